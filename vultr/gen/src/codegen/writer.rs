//! Indentation-aware line writer for emitted source.

/// Owns the output buffer and the current indent depth.
///
/// Every [`line`](Self::line) is prefixed with one tab per indent level.
///
/// ## Examples
///
/// ```
/// use vultr_gen::codegen::SourceWriter;
///
/// let mut w = SourceWriter::new();
/// w.block("impl Foo", |w| w.line("fn bar() {}"));
/// assert_eq!(w.finish(), "impl Foo {\n\tfn bar() {}\n}\n");
/// ```
#[derive(Debug, Default)]
pub struct SourceWriter {
    buf: String,
    indent: usize,
}

impl SourceWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `text` at the current indent, followed by a newline.
    pub fn line(&mut self, text: impl AsRef<str>) {
        for _ in 0..self.indent {
            self.buf.push('\t');
        }
        self.buf.push_str(text.as_ref());
        self.buf.push('\n');
    }

    /// Writes an empty line (no indentation).
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Writes `text` as `///` doc lines, one per source line.
    pub fn doc(&mut self, text: &str) {
        if text.is_empty() {
            self.line("///");
            return;
        }
        for line in text.lines() {
            let line = line.trim_end();
            if line.is_empty() {
                self.line("///");
            } else {
                self.line(format!("/// {line}"));
            }
        }
    }

    pub fn indent(&mut self) {
        self.indent += 1;
    }

    pub fn dedent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    /// Writes `header {`, the body one level deeper, then `}`.
    pub fn block(&mut self, header: impl AsRef<str>, body: impl FnOnce(&mut Self)) {
        self.line(format!("{} {{", header.as_ref()));
        self.indent();
        body(self);
        self.dedent();
        self.line("}");
    }

    /// Consumes the writer and returns the buffer.
    pub fn finish(self) -> String {
        self.buf
    }
}
