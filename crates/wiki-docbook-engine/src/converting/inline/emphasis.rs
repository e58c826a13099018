use std::borrow::Cow;

use super::{cursor::Cursor, kinds::Emphasis};

/// Rewrites `*bold*`, `_italic_` and `` `literal` `` spans.
///
/// Kinds run in [`Emphasis::ALL`] order; each kind is applied until no pair
/// is left. A delimiter opens when the next character is neither whitespace
/// nor the delimiter and the previous one is not alphanumeric. It closes at
/// the first later delimiter whose previous character is neither whitespace
/// nor the delimiter and whose next one is not alphanumeric. This keeps
/// `snake_case_names` and `2 * 3` intact and never produces empty spans.
/// Both delimiters of a span sit inside the same generated element.
pub fn rewrite_emphasis(line: &str) -> Cow<'_, str> {
    let mut line = Cow::Borrowed(line);
    for kind in Emphasis::ALL {
        while let Some((open, close)) = find_pair(&line, kind) {
            let rewritten = format!(
                "{}{}{}{}{}",
                &line[..open],
                kind.open_tag(),
                &line[open + 1..close],
                kind.close_tag(),
                &line[close + 1..]
            );
            line = Cow::Owned(rewritten);
        }
    }
    line
}

/// Byte offsets of the first opening delimiter that has a closing partner.
///
/// The partner must sit at the opener's element depth, so a span never
/// crosses the boundary of a generated element.
fn find_pair(s: &str, kind: Emphasis) -> Option<(usize, usize)> {
    let delim = kind.delimiter();
    let mut cur = Cursor::new(s);

    loop {
        while skip_tag(&mut cur).is_some() {}
        match cur.peek() {
            None => return None,
            Some(b) if b == delim && opens(&cur, delim) => {
                if let Some(close) = find_closer(cur.clone(), delim) {
                    return Some((cur.pos(), close));
                }
            }
            Some(_) => {}
        }
        cur.bump();
    }
}

/// Scans from an opener for its partner, giving up once the enclosing
/// element ends.
fn find_closer(mut cur: Cursor<'_>, delim: u8) -> Option<usize> {
    cur.bump_n(1);
    let mut depth: isize = 0;

    loop {
        while let Some(step) = skip_tag(&mut cur) {
            depth += step;
            if depth < 0 {
                return None;
            }
        }
        match cur.peek() {
            None => return None,
            Some(b) if b == delim && depth == 0 && closes(&cur, delim) => return Some(cur.pos()),
            Some(_) => {
                cur.bump();
            }
        }
    }
}

/// Tags produced by earlier rewrites are raw zones. Text reaching this pass
/// has been entity-escaped, so every `<` starts markup.
///
/// Skips one tag and returns its depth change: -1 for a closing tag, +1
/// otherwise.
fn skip_tag(cur: &mut Cursor<'_>) -> Option<isize> {
    if cur.peek() != Some(b'<') {
        return None;
    }
    let step = if cur.starts_with(b"</") { -1 } else { 1 };
    cur.bump_until(|b| b == b'>');
    cur.bump();
    Some(step)
}

fn opens(cur: &Cursor<'_>, delim: u8) -> bool {
    cur.char_after(1).is_some_and(|c| is_content(c, delim))
        && !cur.prev_char().is_some_and(char::is_alphanumeric)
}

fn closes(cur: &Cursor<'_>, delim: u8) -> bool {
    cur.prev_char().is_some_and(|c| is_content(c, delim))
        && !cur.char_after(1).is_some_and(char::is_alphanumeric)
}

fn is_content(c: char, delim: u8) -> bool {
    !c.is_whitespace() && c != char::from(delim)
}
