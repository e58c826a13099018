//! # Conversion
//!
//! Line transducer from Google Code wiki markup to DocBook XML.
//!
//! - **`blocks`**: line classification and the section/block state machines
//! - **`inline`**: entity escaping, links and emphasis inside text
//! - **`sink`**: `XmlSink` collecting the emitted fragments
//! - **`source`**: splitting decoded text into lines

pub mod blocks;
pub mod inline;
pub mod sink;
pub mod source;

pub use blocks::{ConversionContext, LineClass, LineTransducer, WikiLineClassifier};
pub use source::source_lines;

/// Converts one piece of wiki text into the DocBook body (no prologue).
pub fn convert_lines(text: &str) -> String {
    let mut transducer = LineTransducer::new();
    for line in source_lines(text) {
        transducer.push(line);
    }
    transducer.finish()
}

#[cfg(test)]
mod tests;
