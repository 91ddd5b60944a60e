//! Line-oriented output buffer with tab indentation.

#[derive(Debug, Default)]
pub struct Writer {
    out: String,
    depth: usize,
}

impl Writer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one line at the current depth; empty lines carry no indentation.
    pub fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.out.push('\t');
            }
            self.out.push_str(text);
        }
        self.out.push('\n');
    }

    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// `{` on its own line, then one level deeper.
    pub fn open(&mut self) {
        self.line("{");
        self.indent();
    }

    pub fn close(&mut self) {
        self.close_with("}");
    }

    /// Leave the current level and write `text` (e.g. `};`).
    pub fn close_with(&mut self, text: &str) {
        self.dedent();
        self.line(text);
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn finish(self) -> String {
        self.out
    }
}
