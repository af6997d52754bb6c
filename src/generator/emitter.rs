//! Line buffer with indentation tracking

use super::INDENT;

/// Append-only sequence of finished output lines plus the current depth.
///
/// Lines are indented at the moment they are pushed; nothing already
/// emitted is ever rewritten or reordered.
#[derive(Debug, Clone, Default)]
pub struct Emitter {
    lines: Vec<String>,
    depth: usize,
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `text` at the current depth
    pub fn line(&mut self, text: &str) {
        let mut line = INDENT.repeat(self.depth);
        line.push_str(text);
        self.lines.push(line);
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn dedent(&mut self) {
        debug_assert!(self.depth > 0, "dedent below column zero");
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Join all lines with `\n` (no trailing newline)
    pub fn into_text(self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_take_depth_at_push_time() {
        let mut out = Emitter::new();
        out.line("def f():");
        out.indent();
        out.line("if x:");
        out.indent();
        out.line("pass");
        out.dedent();
        out.dedent();
        out.line("f()");

        assert_eq!(out.depth(), 0);
        assert_eq!(out.len(), 4);
        assert_eq!(out.into_text(), "def f():\n    if x:\n        pass\nf()");
    }

    #[test]
    fn test_empty_emitter_yields_empty_text() {
        let out = Emitter::new();
        assert!(out.is_empty());
        assert_eq!(out.into_text(), "");
    }
}
