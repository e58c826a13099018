use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

/// Inline image reference: a line that is exactly `[path.png]`.
pub struct Image;

impl Image {
    /// Recognized picture extensions, matched case-sensitively.
    pub const EXTENSIONS: [&'static str; 3] = ["png", "jpg", "gif"];

    /// Returns the referenced URL when the whole line is one bracketed image
    /// path with nothing after the closing bracket.
    pub fn sig(line: &str) -> Option<&str> {
        static IMAGE: OnceLock<Regex> = OnceLock::new();
        let re = IMAGE.get_or_init(|| {
            let pattern = format!(r"^\[([^ ]*\.(?:{}))\]$", Self::EXTENSIONS.join("|"));
            Regex::new(&pattern).expect("Invalid image regex")
        });
        re.captures(line)
            .and_then(|caps| caps.get(1))
            .map(|url| url.as_str())
    }

    /// Maps an image URL to the `fileref` written into the document.
    ///
    /// Attachments published under `base_url` are expected next to the
    /// generated document, so they become `file:./<rest>`.
    pub fn fileref<'a>(url: &'a str, base_url: Option<&str>) -> Cow<'a, str> {
        match base_url
            .filter(|base| !base.is_empty())
            .and_then(|base| url.strip_prefix(base))
        {
            Some(rest) => Cow::Owned(format!("file:./{rest}")),
            None => Cow::Borrowed(url),
        }
    }
}
