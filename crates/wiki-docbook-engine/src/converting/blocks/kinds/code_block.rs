/// Which half of a `{{{ … }}}` pair a line is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceSig {
    Open,
    Close,
}

/// Literal block type with owned delimiter constants.
///
/// Lines between the fences are a raw zone: they are entity-escaped and
/// copied through, never classified.
pub struct CodeBlock;

impl CodeBlock {
    pub const OPEN: &'static str = "{{{";
    pub const CLOSE: &'static str = "}}}";

    /// Fences only count when they make up the whole (right-trimmed) line.
    pub fn sig(line: &str) -> Option<FenceSig> {
        match line {
            Self::OPEN => Some(FenceSig::Open),
            Self::CLOSE => Some(FenceSig::Close),
            _ => None,
        }
    }

    pub fn closes(line: &str) -> bool {
        Self::sig(line) == Some(FenceSig::Close)
    }
}
