//! Front-end adapter: the single doorway from C text to an AST.
//!
//! The parser has no preprocessor, so directive lines are removed textually
//! before lexing. Any lexer or parser diagnostic surfaces as a
//! [`ParseFailure`] whose message is the diagnostic verbatim.

use crate::parser::ast::{Program, SourceLocation};
use crate::parser::parse::{ParseError, Parser};
use thiserror::Error;

/// The source could not be turned into an AST.
#[derive(Debug, Clone, Error)]
#[error(transparent)]
pub struct ParseFailure(#[from] ParseError);

impl ParseFailure {
    /// Diagnostic text without the location prefix
    pub fn message(&self) -> &str {
        &self.0.message
    }

    /// Where in the stripped source the diagnostic points
    pub fn location(&self) -> SourceLocation {
        self.0.location
    }
}

/// Remove every line whose first non-whitespace character is `#`.
///
/// Other lines keep their order and their original terminators.
pub fn strip_directives(source: &str) -> String {
    source
        .split_inclusive('\n')
        .filter(|line| !line.trim_start().starts_with('#'))
        .collect()
}

/// Strip directives, then lex and parse the remainder.
pub fn parse(source: &str) -> Result<Program, ParseFailure> {
    let stripped = strip_directives(source);
    let mut parser = Parser::new(&stripped)?;
    Ok(parser.parse_program()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ast::AstNode;

    #[test]
    fn test_strip_directives_keeps_other_lines() {
        let source = "#include <stdio.h>\n  #define N 3\nint x;\r\nint y;";
        assert_eq!(strip_directives(source), "int x;\r\nint y;");
    }

    #[test]
    fn test_strip_directives_only_checks_line_start() {
        let source = "int a; // not # a directive\n\t# pragma once\n";
        assert_eq!(strip_directives(source), "int a; // not # a directive\n");
    }

    #[test]
    fn test_parse_after_stripping() {
        let program = parse("#include <stdio.h>\nint main() { return 0; }\n").unwrap();

        assert_eq!(program.nodes.len(), 1);
        assert!(matches!(&program.nodes[0], AstNode::FunctionDef { name, .. } if name == "main"));
    }

    #[test]
    fn test_failure_carries_diagnostic() {
        let failure = parse("int main( { }").unwrap_err();

        assert_eq!(failure.location().line, 1);
        assert!(failure.message().starts_with("Expected parameter"));
        assert!(failure.to_string().starts_with("Parse error at line 1, column 11:"));
    }

    #[test]
    fn test_lexer_failure_is_a_parse_failure() {
        let failure = parse("int main() { char c = '; }").unwrap_err();

        assert!(failure.message().contains("Unterminated character literal"));
    }

    #[test]
    fn test_empty_source_is_empty_program() {
        let program = parse("#include <stdio.h>\n\n").unwrap();
        assert!(program.nodes.is_empty());
    }
}
