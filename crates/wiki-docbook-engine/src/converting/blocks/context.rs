use super::types::BlockContainer;

/// Mutable state threaded through every line of one conversion run.
///
/// It spans all input files: a document assembled from several files is one
/// continuous document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionContext {
    /// Number of open `sectN` elements (0 = none).
    pub section_depth: u8,
    /// The open paragraph or list, if any.
    pub open_block: Option<BlockContainer>,
    /// Inside `{{{ … }}}`.
    pub in_code_block: bool,
    /// Column count of the open table, 0 outside tables.
    pub table_columns: usize,
}

impl ConversionContext {
    pub fn in_table(&self) -> bool {
        self.table_columns > 0
    }

    /// True when nothing is left open.
    pub fn is_settled(&self) -> bool {
        *self == Self::default()
    }
}
