//! Python code generator
//!
//! Walks a parsed [`Program`] once, in source order, and renders each C
//! construct as the closest Python statement or expression:
//!
//! - [`emitter`]: the output line buffer and indentation depth
//! - `statements`: declarations, control flow, `switch` → `if`/`elif`/`else`
//! - `expressions`: operators, calls, indexing, literals
//!
//! # Degrading instead of failing
//!
//! Constructs without a rule never abort the walk. In statement position they
//! become a `# [Unhandled: <Kind>]` line; in expression position the same
//! marker is spliced inline. Translation always produces text for any program
//! the parser accepted.
//!
//! # Emission state
//!
//! Besides the [`Emitter`], the generator tracks the innermost `switch`
//! (discriminant text, whether an arm has been emitted) and the stack of
//! enclosing loops and switches that decides what `break`/`continue` mean.
//! Both are saved and restored around nested constructs, so a `switch`
//! inside a `case` arm leaves the outer chain intact.

pub mod emitter;

mod expressions;
mod statements;

pub use emitter::Emitter;

use crate::parser::ast::{AstNode, Program};
use tracing::trace;

/// One level of Python indentation
pub const INDENT: &str = "    ";

/// Render a whole program as Python source text.
pub fn generate(program: &Program) -> String {
    let mut generator = Generator::new();
    generator.visit_program(program);
    generator.finish()
}

/// Context of the innermost `switch` being translated
#[derive(Debug, Clone, PartialEq, Eq)]
struct SwitchContext {
    discriminant: String,
    branched: bool,
}

impl SwitchContext {
    fn new(discriminant: String) -> Self {
        Self {
            discriminant,
            branched: false,
        }
    }

    /// Header for the next `case` arm: `if` first, `elif` afterwards
    fn branch(&mut self, value: &str) -> String {
        let keyword = if self.branched { "elif" } else { "if" };
        self.branched = true;
        format!("{} {} == {}:", keyword, self.discriminant, value)
    }
}

/// Constructs that a C `break` can leave
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Breakable {
    Loop,
    Switch,
}

/// Tree-walking translator. One instance per translation.
#[derive(Debug, Default)]
pub struct Generator {
    out: Emitter,
    switch: Option<SwitchContext>,
    breakables: Vec<Breakable>,
    unhandled: usize,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visit every top-level declaration in source order
    pub fn visit_program(&mut self, program: &Program) {
        for node in &program.nodes {
            self.visit_statement(node);
        }
    }

    /// Current indentation depth
    pub fn depth(&self) -> usize {
        self.out.depth()
    }

    /// Lines emitted so far
    pub fn lines(&self) -> &[String] {
        self.out.lines()
    }

    /// Number of constructs rendered as `# [Unhandled: ...]`
    pub fn unhandled_count(&self) -> usize {
        self.unhandled
    }

    pub fn finish(self) -> String {
        self.out.into_text()
    }

    /// Build the marker for a construct with no rule
    fn unhandled(&mut self, node: &AstNode) -> String {
        self.unhandled += 1;
        let location = node.location();
        trace!(
            kind = node.kind(),
            line = location.line,
            column = location.column,
            "no translation rule"
        );
        format!("# [Unhandled: {}]", node.kind())
    }

    /// Emit `statements` one level deeper. An empty body becomes `pass`.
    fn nested(&mut self, statements: &[AstNode]) {
        let depth = self.out.depth();
        let before = self.out.len();

        self.out.indent();
        self.visit_block(statements);
        if self.out.len() == before {
            self.out.line("pass");
        }
        self.out.dedent();

        debug_assert_eq!(self.out.depth(), depth);
    }

    /// Like [`Self::nested`], with `break`/`continue` bound to this loop
    fn loop_body(&mut self, statements: &[AstNode]) {
        self.breakables.push(Breakable::Loop);
        self.nested(statements);
        self.breakables.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::frontend::parse;
    use pretty_assertions::assert_eq;

    fn generator_for(source: &str) -> Generator {
        let program = parse(source).unwrap();
        let mut generator = Generator::new();
        generator.visit_program(&program);
        generator
    }

    fn py(source: &str) -> String {
        generator_for(source).finish()
    }

    #[test]
    fn test_switch_context_branches() {
        let mut ctx = SwitchContext::new("x".to_string());
        assert_eq!(ctx.branch("1"), "if x == 1:");
        assert_eq!(ctx.branch("2"), "elif x == 2:");
        assert!(ctx.branched);
    }

    #[test]
    fn test_depth_restored_after_deep_nesting() {
        let generator = generator_for(
            "void f() {
                while (a) {
                    if (b) {
                        for (i = 0; i < n; i = i + 1) {
                            switch (i) { case 1: g(); }
                        }
                    } else {
                        h();
                    }
                }
            }",
        );

        assert_eq!(generator.depth(), 0);
        assert_eq!(
            generator.lines().last().map(String::as_str),
            Some("            h()")
        );
    }

    #[test]
    fn test_line_count_matches_emitted_lines() {
        let generator = generator_for(
            "int main() { int x = 1; if (x) { x = 2; } else { x = 3; } return x; }",
        );
        let emitted = generator.lines().len();
        let text = generator.finish();

        assert_eq!(text.lines().count(), emitted);
        assert_eq!(emitted, 7);
    }

    #[test]
    fn test_unhandled_constructs_are_counted() {
        let generator = generator_for("void f() { int *p; x += 1; y = c ? 1 : 2; }");
        assert_eq!(generator.unhandled_count(), 3);
    }

    #[test]
    fn test_empty_program() {
        assert_eq!(py(""), "");
    }

    #[test]
    fn test_empty_body_gets_pass() {
        assert_eq!(py("void noop() { }"), "def noop():\n    pass");
        assert_eq!(
            py("void f() { while (busy()) ; }"),
            "def f():\n    while busy():\n        pass"
        );
    }
}
