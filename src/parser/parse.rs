//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including error types, helper methods, and the main parse entry point.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following organization:
//! - This module: Parser struct, helper methods, and coordination
//! - `declarations`: Parsing struct, function, and variable declarations
//! - `statements`: Parsing statements (if, while, for, etc.)
//! - `expressions`: Parsing expressions with precedence climbing
//!
//! # Implementation
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared parser state.

use crate::parser::ast::*;
use crate::parser::lexer::{LexError, Lexer, Token};
use thiserror::Error;

/// Parser error type
#[derive(Debug, Clone, Error)]
#[error("Parse error at line {}, column {}: {message}", .location.line, .location.column)]
pub struct ParseError {
    pub message: String,
    pub location: SourceLocation,
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError {
            message: err.message,
            location: err.location,
        }
    }
}

/// Recursive descent parser for C subset
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
}

impl Parser {
    pub fn new(source: &str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize()?;
        Ok(Self {
            tokens,
            position: 0,
        })
    }

    /// Parse the entire program (top-level declarations)
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut program = Program::new();

        while !self.is_at_end() {
            let decl = self.parse_top_level_declaration()?;
            program.nodes.push(decl);
        }

        Ok(program)
    }

    pub(crate) fn is_type_keyword(&self) -> bool {
        matches!(
            self.peek_token(),
            Token::Int(_)
                | Token::Char(_)
                | Token::Void(_)
                | Token::Float(_)
                | Token::Double(_)
                | Token::Long(_)
                | Token::Short(_)
                | Token::Unsigned(_)
                | Token::Signed(_)
                | Token::Struct(_)
                | Token::Const(_)
        )
    }

    pub(crate) fn match_token(&mut self, token: &Token) -> bool {
        if std::mem::discriminant(&self.peek_token())
            == std::mem::discriminant(token)
        {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn check(&self, token: &Token) -> bool {
        std::mem::discriminant(&self.peek_token())
            == std::mem::discriminant(token)
    }

    pub(crate) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.position += 1;
        }
        self.previous()
    }

    pub(crate) fn is_at_end(&self) -> bool {
        matches!(self.peek_token(), Token::Eof(_))
    }

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.position]
    }

    pub(crate) fn peek_token(&self) -> Token {
        self.tokens[self.position].clone()
    }

    pub(crate) fn peek_ahead(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.position + n)
    }

    pub(crate) fn previous(&self) -> &Token {
        &self.tokens[self.position - 1]
    }

    pub(crate) fn previous_location(&self) -> SourceLocation {
        self.previous().location()
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        self.peek().location()
    }

    pub(crate) fn expect_token(
        &mut self,
        token: &Token,
        message: &str,
    ) -> Result<(), ParseError> {
        if self.check(token) {
            self.advance();
            Ok(())
        } else {
            Err(ParseError {
                message: format!("{}, found {}", message, self.peek()),
                location: self.current_location(),
            })
        }
    }

    pub(crate) fn expect_lparen(
        &mut self,
        ctx: &str,
    ) -> Result<(), ParseError> {
        self.expect_token(
            &Token::LParen(self.current_location()),
            &format!("Expected '(' {ctx}"),
        )
    }

    pub(crate) fn expect_rparen(
        &mut self,
        ctx: &str,
    ) -> Result<(), ParseError> {
        self.expect_token(
            &Token::RParen(self.current_location()),
            &format!("Expected ')' {ctx}"),
        )
    }

    pub(crate) fn expect_lbrace(
        &mut self,
        ctx: &str,
    ) -> Result<(), ParseError> {
        self.expect_token(
            &Token::LBrace(self.current_location()),
            &format!("Expected '{{' {ctx}"),
        )
    }

    pub(crate) fn expect_rbrace(
        &mut self,
        ctx: &str,
    ) -> Result<(), ParseError> {
        self.expect_token(
            &Token::RBrace(self.current_location()),
            &format!("Expected '}}' {ctx}"),
        )
    }

    pub(crate) fn expect_semicolon(
        &mut self,
        ctx: &str,
    ) -> Result<(), ParseError> {
        self.expect_token(
            &Token::Semicolon(self.current_location()),
            &format!("Expected ';' {ctx}"),
        )
    }

    pub(crate) fn expect_identifier(&mut self) -> Result<String, ParseError> {
        if let Token::Ident(name, _) = self.peek_token() {
            self.advance();
            Ok(name)
        } else {
            Err(ParseError {
                message: format!("Expected identifier, found {}", self.peek()),
                location: self.current_location(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Program {
        let mut parser = Parser::new(source).unwrap();
        parser.parse_program().unwrap()
    }

    #[test]
    fn test_parse_simple_function() {
        let program = parse("int main() { return 0; }");

        assert_eq!(program.nodes.len(), 1);
        match &program.nodes[0] {
            AstNode::FunctionDef {
                name,
                params,
                return_type,
                body,
                ..
            } => {
                assert_eq!(name, "main");
                assert_eq!(params.len(), 0);
                assert_eq!(return_type.base, BaseType::Int);
                assert_eq!(body.len(), 1);
            }
            _ => panic!("Expected function definition"),
        }
    }

    #[test]
    fn test_parse_identifier_only_parameters() {
        let program = parse("int add(a, b) { return a + b; }");

        match &program.nodes[0] {
            AstNode::FunctionDef { params, .. } => {
                let names: Vec<_> = params.iter().map(|p| p.name.as_deref()).collect();
                assert_eq!(names, vec![Some("a"), Some("b")]);
                assert_eq!(params[0].param_type.base, BaseType::Int);
            }
            _ => panic!("Expected function definition"),
        }
    }

    #[test]
    fn test_parse_expression() {
        let program = parse("int main() { int x = 1 + 2 * 3; }");

        match &program.nodes[0] {
            AstNode::FunctionDef { body, .. } => match &body[0] {
                AstNode::VarDecl { init: Some(init), .. } => {
                    assert!(matches!(
                        init.as_ref(),
                        AstNode::BinaryOp { op: BinOp::Add, .. }
                    ));
                }
                other => panic!("Expected initialized declaration, got {:?}", other),
            },
            _ => panic!("Expected function definition"),
        }
    }

    #[test]
    fn test_parse_if_statement() {
        let program = parse("int main() { if (x > 0) return 1; else return 0; }");

        match &program.nodes[0] {
            AstNode::FunctionDef { body, .. } => {
                assert!(matches!(
                    &body[0],
                    AstNode::If { else_branch: Some(_), .. }
                ));
            }
            _ => panic!("Expected function definition"),
        }
    }

    #[test]
    fn test_parse_struct() {
        let program = parse("struct Point { int x; int y; };");

        assert_eq!(program.nodes.len(), 1);
        match &program.nodes[0] {
            AstNode::StructDef { name, fields, .. } => {
                assert_eq!(name, "Point");
                assert_eq!(fields.len(), 2);
            }
            _ => panic!("Expected struct definition"),
        }
    }

    #[test]
    fn test_parse_prototype_and_global() {
        let program = parse("int square(int);\nint limit = 10;\n");

        assert!(matches!(&program.nodes[0], AstNode::FunctionDecl { name, params, .. }
            if name == "square" && params.len() == 1 && params[0].name.is_none()));
        assert!(matches!(&program.nodes[1], AstNode::VarDecl { name, .. } if name == "limit"));
    }

    #[test]
    fn test_parse_error_location() {
        let mut parser = Parser::new("int main() {\n  return 0\n}").unwrap();
        let err = parser.parse_program().unwrap_err();

        assert_eq!(err.location.line, 3);
        assert_eq!(
            err.to_string(),
            "Parse error at line 3, column 1: Expected ';' after return, found '}'"
        );
    }
}
