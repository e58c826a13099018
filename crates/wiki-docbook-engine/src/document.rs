//! # Document Driver
//!
//! Wraps the transducer output into a complete DocBook article: XML
//! declaration, DocBook 4.1.2 DOCTYPE, `<article lang="…">`, the converted
//! body of every input in order, and the closing root tag.
//!
//! All inputs share one [`LineTransducer`], so sections and blocks continue
//! across file boundaries.

use std::path::Path;

use log::debug;

use crate::converting::{LineTransducer, inline::escape_entities, source_lines};
use crate::io::{IoError, read_file};

pub const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";
pub const DOCTYPE: &str = "<!DOCTYPE article\n  \
    PUBLIC \"-//OASIS//DTD DocBook XML V4.1.2//EN\"\n  \
    \"http://www.oasis-open.org/docbook/xml/4.1.2/docbookx.dtd\">";
pub const EPILOGUE: &str = "</article>\n";

/// Settings for one conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Value of the root `lang` attribute; empty by default.
    pub language: String,
    /// Image URLs under this prefix become local `file:./` references.
    pub image_base_url: Option<String>,
}

/// Everything before the converted body.
pub fn prologue(language: &str) -> String {
    format!(
        "{XML_DECLARATION}\n{DOCTYPE}\n<article lang=\"{}\">\n",
        escape_entities(language)
    )
}

/// Accumulates one DocBook article from any number of sources.
pub struct DocbookConverter {
    options: ConvertOptions,
    transducer: LineTransducer,
}

impl DocbookConverter {
    pub fn new(options: ConvertOptions) -> Self {
        let transducer =
            LineTransducer::new().with_image_base_url(options.image_base_url.clone());
        Self {
            options,
            transducer,
        }
    }

    /// Feeds already decoded wiki text.
    pub fn push_source(&mut self, text: &str) {
        for line in source_lines(text) {
            self.transducer.push(line);
        }
    }

    /// Reads and feeds one wiki file.
    pub fn push_file(&mut self, path: &Path) -> Result<(), IoError> {
        debug!("converting {}", path.display());
        let text = read_file(path)?;
        self.push_source(&text);
        Ok(())
    }

    /// Closes open sections and returns the complete document.
    pub fn finish(self) -> String {
        let body = self.transducer.finish();
        let mut doc = prologue(&self.options.language);
        doc.push_str(&body);
        doc.push_str(EPILOGUE);
        doc
    }
}

/// Converts in-memory wiki text into a complete document.
pub fn convert_str(text: &str, options: &ConvertOptions) -> String {
    let mut converter = DocbookConverter::new(options.clone());
    converter.push_source(text);
    converter.finish()
}

/// Converts files in order into one document. The first unreadable file
/// aborts the run; no partial document is returned.
pub fn convert_files<P: AsRef<Path>>(
    paths: &[P],
    options: &ConvertOptions,
) -> Result<String, IoError> {
    let mut converter = DocbookConverter::new(options.clone());
    for path in paths {
        converter.push_file(path.as_ref())?;
    }
    Ok(converter.finish())
}
