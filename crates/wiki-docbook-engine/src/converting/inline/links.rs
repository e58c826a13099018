use std::borrow::Cow;

use super::{cursor::Cursor, kinds::Link};

/// Replaces every `[url text]` span with a `<ulink>` element.
///
/// Spans are found left to right and never overlap. An unclosed `[` is
/// left as plain text.
pub fn rewrite_links(line: &str) -> Cow<'_, str> {
    let mut cur = Cursor::new(line);
    let mut out = String::new();
    let mut text_start = 0;

    while !cur.eof() {
        if let Some(link) = try_parse_link(&mut cur) {
            out.push_str(&line[text_start..link.full.start]);
            out.push_str(&link.to_ulink());
            text_start = link.full.end;
            continue;
        }
        cur.bump();
    }

    if text_start == 0 {
        return Cow::Borrowed(line);
    }
    out.push_str(&line[text_start..]);
    Cow::Owned(out)
}

/// Attempts to parse a link at the current position.
///
/// The url is the run after `[` up to a space, `"` or `]`; the text is the
/// rest up to `]`. On failure the cursor is restored.
fn try_parse_link<'a>(cur: &mut Cursor<'a>) -> Option<Link<'a>> {
    if cur.peek() != Some(Link::OPEN) {
        return None;
    }

    let s = cur.s;
    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(1); // [
    let url_start = cur.pos();
    cur.bump_until(|b| matches!(b, Link::SEPARATOR | Link::QUOTE | Link::CLOSE));
    let url_end = cur.pos();
    cur.bump_until(|b| b == Link::CLOSE);
    let text_end = cur.pos();

    if cur.peek() != Some(Link::CLOSE) {
        *cur = saved;
        return None;
    }
    cur.bump_n(1); // ]

    Some(Link {
        full: start..cur.pos(),
        url: &s[url_start..url_end],
        text: s[url_end..text_end].trim(),
    })
}
