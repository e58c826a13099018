use log::{debug, trace, warn};

use crate::converting::{
    inline::{escape_entities, rewrite_inline},
    sink::XmlSink,
};

use super::{
    classify::{LineClass, WikiLineClassifier},
    context::ConversionContext,
    kinds::{CodeBlock, FenceSig, Image, ListKind, Table},
    types::BlockContainer,
};

/// Turns classified lines into DocBook fragments.
///
/// Owns the [`ConversionContext`]; every structural transition goes through
/// one of the state machine methods below so the invariants hold after each
/// pushed line.
pub struct LineTransducer {
    classifier: WikiLineClassifier,
    ctx: ConversionContext,
    sink: XmlSink,
    image_base_url: Option<String>,
}

impl LineTransducer {
    pub fn new() -> Self {
        Self {
            classifier: WikiLineClassifier,
            ctx: ConversionContext::default(),
            sink: XmlSink::new(),
            image_base_url: None,
        }
    }

    /// Image URLs under `base_url` are rewritten to local `file:./` references.
    pub fn with_image_base_url(mut self, base_url: Option<String>) -> Self {
        self.image_base_url = base_url;
        self
    }

    pub fn context(&self) -> &ConversionContext {
        &self.ctx
    }

    /// Everything emitted so far.
    pub fn output(&self) -> &str {
        self.sink.as_str()
    }

    /// Feeds one line of wiki text.
    pub fn push(&mut self, line: &str) {
        let line = line.trim_end();
        trace!("line: {line:?}");

        if self.ctx.in_code_block {
            self.consume_code_line(line);
            return;
        }

        let class = self.classifier.classify(line);

        if self.ctx.in_table() {
            match class {
                LineClass::TableRow => {
                    self.add_table_row(line);
                    return;
                }
                LineClass::Comment => return,
                // Not a row: the table ends and the line is processed normally.
                _ => self.close_table(),
            }
        }

        match class {
            LineClass::Blank => self.set_block(None),
            LineClass::Comment => {}
            LineClass::CodeFence(FenceSig::Open) => self.open_code_block(),
            LineClass::Heading { level, title } => self.open_section(level, title),
            LineClass::TableRow => self.open_table(line),
            LineClass::Image { url } => self.put_image(url),
            LineClass::Bullet { text } => self.list_item(ListKind::Itemized, text),
            LineClass::Numbered { text } => self.list_item(ListKind::Ordered, text),
            LineClass::CodeFence(FenceSig::Close) | LineClass::Text => {
                self.paragraph_line(line)
            }
        }
    }

    /// Closes everything still open and returns the emitted body.
    pub fn finish(mut self) -> String {
        if self.ctx.in_code_block {
            warn!("input ended inside a literal block; closing it");
            self.close_code_block();
        }
        if self.ctx.in_table() {
            warn!("input ended inside a table; closing it");
            self.close_table();
        }
        self.close_all();
        self.sink.finish()
    }

    /// Opens a section at `level`, closing deeper and same-level sections first.
    pub fn open_section(&mut self, level: u8, title: &str) {
        self.set_block(None);
        self.close_sections_deeper_than(level);

        if level == 0 {
            return;
        }
        if self.ctx.section_depth == level {
            self.sink.open(&format!("</sect{level}>"));
            self.ctx.section_depth -= 1;
        }
        while self.ctx.section_depth < level {
            self.ctx.section_depth += 1;
            self.sink.open(&format!("<sect{}>", self.ctx.section_depth));
        }
        debug!("section level {level}: {title:?}");
        self.sink
            .line(&format!("<title>{}</title>", rewrite_inline(title)));
    }

    /// Closes the open block and every open section, innermost first.
    pub fn close_all(&mut self) {
        self.set_block(None);
        self.close_sections_deeper_than(0);
    }

    /// Switches the open block container; contiguous lines of the same kind
    /// stay in one container.
    pub fn set_block(&mut self, kind: Option<BlockContainer>) {
        if self.ctx.open_block == kind {
            return;
        }
        if let Some(open) = self.ctx.open_block.take() {
            self.sink.line(&format!("</{}>", open.tag()));
        }
        if let Some(new) = kind {
            self.sink.open(&format!("<{}>", new.tag()));
        }
        self.ctx.open_block = kind;
    }

    fn close_sections_deeper_than(&mut self, level: u8) {
        while self.ctx.section_depth > level {
            self.sink
                .line(&format!("</sect{}>", self.ctx.section_depth));
            self.ctx.section_depth -= 1;
        }
    }

    fn paragraph_line(&mut self, line: &str) {
        self.set_block(Some(BlockContainer::Paragraph));
        self.sink.line(&rewrite_inline(line));
    }

    fn list_item(&mut self, kind: ListKind, text: &str) {
        self.set_block(Some(kind.into()));
        self.sink.line(&format!(
            "<listitem><para>{}</para></listitem>",
            rewrite_inline(text)
        ));
    }

    fn put_image(&mut self, url: &str) {
        self.set_block(None);
        let fileref = Image::fileref(url, self.image_base_url.as_deref());
        self.sink.line(&format!(
            "<graphic fileref=\"{}\"></graphic>",
            escape_entities(&fileref)
        ));
    }

    fn open_table(&mut self, first_row: &str) {
        self.set_block(None);
        let columns = Table::columns(first_row);
        debug!("table with {columns} columns");
        self.ctx.table_columns = columns;
        self.sink.open("<table frame='all'><title></title>");
        self.sink.open(&format!(
            "<tgroup cols='{columns}' align='left' colsep='1' rowsep='1'>"
        ));
        self.sink.line("<tbody>");
        self.add_table_row(first_row);
    }

    fn add_table_row(&mut self, row: &str) {
        self.sink.open("<row>");
        for cell in Table::cells(row, self.ctx.table_columns) {
            self.sink
                .open(&format!("<entry>{}</entry>", rewrite_inline(cell)));
        }
        self.sink.line("</row>");
    }

    fn close_table(&mut self) {
        self.sink.line("</tbody></tgroup></table>");
        self.ctx.table_columns = 0;
    }

    fn open_code_block(&mut self) {
        self.set_block(None);
        debug!("literal block opened");
        self.ctx.in_code_block = true;
        self.sink.line("<screen>");
    }

    fn consume_code_line(&mut self, line: &str) {
        if CodeBlock::closes(line) {
            self.close_code_block();
        } else if line.is_empty() {
            self.sink.blank();
        } else {
            self.sink.line(&escape_entities(line));
        }
    }

    fn close_code_block(&mut self) {
        self.sink.line("</screen>");
        self.ctx.in_code_block = false;
    }
}

impl Default for LineTransducer {
    fn default() -> Self {
        Self::new()
    }
}
