/// Splits decoded source text into right-trimmed lines.
///
/// Trailing whitespace (including a `\r` from CRLF files) never carries
/// meaning in the wiki dialect, so it is dropped before classification.
pub fn source_lines(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.lines().map(str::trim_end)
}
