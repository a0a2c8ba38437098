//! Output writer with indentation tracking.

/// Default indentation width in spaces.
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Builds source text line by line at the current indentation level.
pub struct CodeWriter {
    output: String,
    indent_level: usize,
    indent_width: usize,
    at_line_start: bool,
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::new(DEFAULT_INDENT_WIDTH)
    }
}

impl CodeWriter {
    pub fn new(indent_width: usize) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            indent_width,
            at_line_start: true,
        }
    }

    pub fn finish(self) -> String {
        self.output
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    fn write_indent(&mut self) {
        if self.at_line_start {
            let width = self.indent_level * self.indent_width;
            self.output.extend(std::iter::repeat_n(' ', width));
            self.at_line_start = false;
        }
    }

    /// Write text on the current line, indenting first if at line start.
    pub fn write(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.write_indent();
        self.output.push_str(s);
    }

    pub fn writeln(&mut self, s: &str) {
        self.write(s);
        self.newline();
    }

    /// Terminate the current line. Blank lines carry no trailing whitespace.
    pub fn newline(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }

    /// Write `open` on its own line, run `body` one level deeper, then `close`.
    pub fn block(&mut self, open: &str, close: &str, body: impl FnOnce(&mut Self)) {
        self.writeln(open);
        self.indent();
        body(self);
        self.dedent();
        self.writeln(close);
    }
}
