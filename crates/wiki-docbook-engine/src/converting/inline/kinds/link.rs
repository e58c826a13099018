use std::ops::Range;

/// A bracketed `[url text]` span found in a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link<'a> {
    /// Byte range of the whole span including brackets.
    pub full: Range<usize>,
    pub url: &'a str,
    /// Link text, trimmed. May be empty.
    pub text: &'a str,
}

impl Link<'_> {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    pub const SEPARATOR: u8 = b' ';
    /// Ends the url so it cannot break out of the `url` attribute.
    pub const QUOTE: u8 = b'"';

    /// DocBook rendering of the link.
    pub fn to_ulink(&self) -> String {
        format!("<ulink url=\"{}\">{}</ulink>", self.url, self.text)
    }
}
