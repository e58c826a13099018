/// Table type with owned separator knowledge.
///
/// Every row starts with `||`; cells are separated by `||`. The first row
/// fixes the column count for the whole table.
pub struct Table;

impl Table {
    pub const SEPARATOR: &'static str = "||";

    pub fn is_row(line: &str) -> bool {
        line.starts_with(Self::SEPARATOR)
    }

    /// Column count declared by the first row: the separators after the
    /// leading one, at least 1.
    pub fn columns(first_row: &str) -> usize {
        Self::body(first_row)
            .matches(Self::SEPARATOR)
            .count()
            .max(1)
    }

    /// Splits a row into exactly `columns` trimmed cells, padding with empty
    /// cells and dropping extras.
    pub fn cells(row: &str, columns: usize) -> Vec<&str> {
        let mut cells = Self::body(row).split(Self::SEPARATOR).map(str::trim);
        (0..columns)
            .map(|_| cells.next().unwrap_or_default())
            .collect()
    }

    fn body(row: &str) -> &str {
        row.strip_prefix(Self::SEPARATOR).unwrap_or(row)
    }
}
