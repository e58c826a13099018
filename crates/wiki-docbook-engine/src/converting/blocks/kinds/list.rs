use std::sync::OnceLock;

use regex::Regex;

/// The two flat list flavours of the wiki dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `* item`
    Itemized,
    /// `# item`
    Ordered,
}

/// List item type with owned marker constants.
pub struct ListItem;

impl ListItem {
    pub const BULLET: char = '*';
    pub const NUMBER: char = '#';

    /// Matches optional leading whitespace, a single marker, one space, then
    /// the item text (returned trimmed).
    pub fn sig(line: &str) -> Option<(ListKind, &str)> {
        static BULLET: OnceLock<Regex> = OnceLock::new();
        static NUMBER: OnceLock<Regex> = OnceLock::new();
        let bullet = BULLET.get_or_init(|| {
            Regex::new(&Self::pattern(Self::BULLET)).expect("Invalid bullet regex")
        });
        let number = NUMBER.get_or_init(|| {
            Regex::new(&Self::pattern(Self::NUMBER)).expect("Invalid numbering regex")
        });

        [(ListKind::Itemized, bullet), (ListKind::Ordered, number)]
            .into_iter()
            .find_map(|(kind, re)| {
                re.captures(line)
                    .and_then(|caps| caps.get(1))
                    .map(|text| (kind, text.as_str().trim()))
            })
    }

    fn pattern(marker: char) -> String {
        format!(r"^\s*{} (.*)$", regex::escape(&marker.to_string()))
    }
}
