/// Inline emphasis kinds, in the order they are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    /// `*bold*`
    Bold,
    /// `_italic_`
    Italic,
    /// `` `literal` ``
    Literal,
}

impl Emphasis {
    /// Application order: bold, then italic, then literal.
    pub const ALL: [Emphasis; 3] = [Emphasis::Bold, Emphasis::Italic, Emphasis::Literal];

    pub fn delimiter(self) -> u8 {
        match self {
            Emphasis::Bold => b'*',
            Emphasis::Italic => b'_',
            Emphasis::Literal => b'`',
        }
    }

    pub fn open_tag(self) -> &'static str {
        match self {
            Emphasis::Bold => "<emphasis role=\"bold\">",
            Emphasis::Italic => "<emphasis>",
            Emphasis::Literal => "<literal>",
        }
    }

    pub fn close_tag(self) -> &'static str {
        match self {
            Emphasis::Bold | Emphasis::Italic => "</emphasis>",
            Emphasis::Literal => "</literal>",
        }
    }
}
