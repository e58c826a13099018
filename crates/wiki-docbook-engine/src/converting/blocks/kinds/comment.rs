/// Comment line marker (marker struct).
///
/// Wiki pages carry pragmas such as `#summary` and `#labels` in column 0.
/// They never reach the output. A `#` preceded by whitespace is a numbered
/// list item instead, see [`ListItem`](super::ListItem).
pub struct Comment;

impl Comment {
    /// The comment marker; only recognized in the first column.
    pub const MARK: char = '#';

    pub fn matches(line: &str) -> bool {
        line.starts_with(Self::MARK)
    }
}
