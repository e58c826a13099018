use std::sync::OnceLock;

use regex::Regex;

/// Section heading type with owned delimiter knowledge.
///
/// A heading is a line bracketed by one to three `=` on both ends:
/// `= Title =`, `== Title ==`, `=== Title ===`.
pub struct Heading;

impl Heading {
    /// The bracketing character.
    pub const MARK: char = '=';
    /// Deepest section level the markup can express.
    pub const MAX_LEVEL: u8 = 3;

    /// Returns `(level, title)` when the line is a heading.
    ///
    /// Patterns are tried deepest first: the level 1 pattern `=(.*)=` would
    /// also accept `===x===` and report `==x==` as its title. The title is
    /// trimmed and may be empty.
    pub fn sig(line: &str) -> Option<(u8, &str)> {
        static PATTERNS: OnceLock<Vec<(u8, Regex)>> = OnceLock::new();
        let patterns = PATTERNS.get_or_init(|| {
            (1..=Self::MAX_LEVEL)
                .rev()
                .map(|level| {
                    let marks = Self::MARK.to_string().repeat(usize::from(level));
                    let pattern = format!("^{marks}(.*){marks}$");
                    (
                        level,
                        Regex::new(&pattern).expect("Invalid heading regex"),
                    )
                })
                .collect()
        });

        patterns.iter().find_map(|(level, re)| {
            re.captures(line)
                .and_then(|caps| caps.get(1))
                .map(|title| (*level, title.as_str().trim()))
        })
    }
}
