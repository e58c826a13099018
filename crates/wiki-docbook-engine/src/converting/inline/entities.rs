use std::borrow::Cow;

/// Replaces the three reserved XML characters `&`, `<`, `>` with entities.
///
/// Nothing else is escaped; quotes pass through unchanged.
pub fn escape_entities(line: &str) -> Cow<'_, str> {
    html_escape::encode_text(line)
}
