use super::kinds::ListKind;

/// The single block-level container that may be open at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockContainer {
    /// Consecutive text lines.
    Paragraph,
    /// Consecutive `*` items.
    ItemizedList,
    /// Consecutive `#` items.
    OrderedList,
}

impl BlockContainer {
    /// DocBook element name.
    pub fn tag(self) -> &'static str {
        match self {
            BlockContainer::Paragraph => "para",
            BlockContainer::ItemizedList => "itemizedlist",
            BlockContainer::OrderedList => "orderedlist",
        }
    }
}

impl From<ListKind> for BlockContainer {
    fn from(kind: ListKind) -> Self {
        match kind {
            ListKind::Itemized => BlockContainer::ItemizedList,
            ListKind::Ordered => BlockContainer::OrderedList,
        }
    }
}
