/// Collects emitted XML fragments.
///
/// An opening fragment is followed by a space and the next fragment joins
/// its line (`<para> text`, `<sect1> <title>…`); a line fragment ends the line.
#[derive(Debug, Default)]
pub struct XmlSink {
    out: String,
}

impl XmlSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes a fragment the next one continues after.
    pub fn open(&mut self, fragment: &str) {
        self.out.push_str(fragment);
        self.out.push(' ');
    }

    /// Writes a fragment and ends the line.
    pub fn line(&mut self, fragment: &str) {
        self.out.push_str(fragment);
        self.out.push('\n');
    }

    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn finish(self) -> String {
        self.out
    }
}
