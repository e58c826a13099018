use super::kinds::{CodeBlock, Comment, FenceSig, Heading, Image, ListItem, ListKind, Table};

/// Structural meaning of a single line, without reference to context.
///
/// Borrowed parts point into the classified line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Empty after right-trimming.
    Blank,
    /// `#` in column 0.
    Comment,
    /// A line that is exactly `{{{` or `}}}`.
    CodeFence(FenceSig),
    Heading {
        level: u8,
        title: &'a str,
    },
    /// Starts with `||`.
    TableRow,
    Image {
        url: &'a str,
    },
    Bullet {
        text: &'a str,
    },
    Numbered {
        text: &'a str,
    },
    /// Anything else: paragraph text.
    Text,
}

/// Classifies individual lines for the conversion phase.
pub struct WikiLineClassifier;

impl WikiLineClassifier {
    /// Classifies an already right-trimmed line.
    ///
    /// Recognizers run in a fixed precedence order, first match wins:
    /// blank, comment, code fence, heading, table row, image, bullet,
    /// numbered item, text. Comments beat numbered items, so a numbered item
    /// needs whitespace before its `#`.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        if line.trim().is_empty() {
            return LineClass::Blank;
        }
        if Comment::matches(line) {
            return LineClass::Comment;
        }
        if let Some(sig) = CodeBlock::sig(line) {
            return LineClass::CodeFence(sig);
        }
        if let Some((level, title)) = Heading::sig(line) {
            return LineClass::Heading { level, title };
        }
        if Table::is_row(line) {
            return LineClass::TableRow;
        }
        if let Some(url) = Image::sig(line) {
            return LineClass::Image { url };
        }
        match ListItem::sig(line) {
            Some((ListKind::Itemized, text)) => LineClass::Bullet { text },
            Some((ListKind::Ordered, text)) => LineClass::Numbered { text },
            None => LineClass::Text,
        }
    }
}
