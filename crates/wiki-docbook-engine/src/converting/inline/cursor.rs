/// A cursor for character-by-character inline scanning.
///
/// The index always sits on a UTF-8 boundary: `bump` advances by whole
/// characters, `bump_n` must only skip ASCII delimiters.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// The character under the cursor.
    pub fn peek_char(&self) -> Option<char> {
        self.s.get(self.i..)?.chars().next()
    }

    /// The character `n` bytes ahead, e.g. right after a one-byte delimiter.
    pub fn char_after(&self, n: usize) -> Option<char> {
        self.s.get(self.i + n..)?.chars().next()
    }

    /// The character immediately before the cursor.
    pub fn prev_char(&self) -> Option<char> {
        self.s.get(..self.i)?.chars().next_back()
    }

    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s.as_bytes()[self.i.min(self.s.len())..].starts_with(pat)
    }

    /// Advances by one character, returning it.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Advances until `pred` holds for the current byte or input ends.
    pub fn bump_until(&mut self, pred: impl Fn(u8) -> bool) {
        while let Some(b) = self.peek() {
            if pred(b) {
                break;
            }
            self.bump();
        }
    }
}
