//! # Introduction
//!
//! c2py turns a snippet of C into an approximate Python rendering. The C is
//! parsed into an AST and a single tree walk emits the closest Python
//! statement for each construct. Anything without a rule is kept visible as
//! a `# [Unhandled: <Kind>]` comment instead of stopping the translation.
//!
//! ## Pipeline
//!
//! ```text
//! Source → strip directives → Lexer → Parser → AST → Generator → Python text
//! ```
//!
//! 1. [`parser`]: tokenises the source and builds an AST;
//!    [`parser::frontend`] is the doorway that also strips `#` lines.
//! 2. [`generator`]: walks the AST and emits indented Python lines.
//! 3. [`cli`]: argument handling for the `c2py` binary.
//! 4. [`ui`]: ratatui side-by-side viewer; not part of the stable library API.
//!
//! ## Entry point
//!
//! [`translate`] never fails. When the C cannot be parsed the returned text
//! is a two-line comment block carrying the diagnostic:
//!
//! ```
//! let python = c2py::translate("int add(a, b) { return a + b; }");
//! assert_eq!(python, "def add(a, b):\n    return a + b");
//!
//! let failure = c2py::translate("int main( {");
//! assert!(failure.starts_with("# Error: Could not parse C code.\n# Details: "));
//! ```

pub mod cli;
pub mod generator;
pub mod parser;
pub mod ui;

use generator::Generator;
use parser::frontend;
use tracing::{debug, warn};

/// First line of the output when the source does not parse
pub const PARSE_FAILURE_NOTICE: &str = "# Error: Could not parse C code.";

/// Outcome of one translation, with the numbers the viewer reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// Python text, or the parse-failure comment block
    pub text: String,
    /// Constructs rendered as `# [Unhandled: ...]`
    pub unhandled: usize,
    /// Whether the C parsed at all
    pub parsed: bool,
}

impl Translation {
    /// Translate `source`. Every call uses a fresh generator.
    pub fn of(source: &str) -> Self {
        debug!(bytes = source.len(), "translating");

        let program = match frontend::parse(source) {
            Ok(program) => program,
            Err(failure) => {
                warn!(%failure, "could not parse C source");
                return Translation {
                    text: format!("{}\n# Details: {}", PARSE_FAILURE_NOTICE, failure),
                    unhandled: 0,
                    parsed: false,
                };
            }
        };

        let mut generator = Generator::new();
        generator.visit_program(&program);
        let unhandled = generator.unhandled_count();
        let lines = generator.lines().len();
        let text = generator.finish();

        debug!(
            declarations = program.nodes.len(),
            lines, unhandled, "translation finished"
        );

        Translation {
            text,
            unhandled,
            parsed: true,
        }
    }
}

/// Translate C source text to Python source text.
pub fn translate(source: &str) -> String {
    Translation::of(source).text
}
