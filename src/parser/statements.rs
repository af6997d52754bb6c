//! Statement parsing implementation
//!
//! This module handles parsing of all C statement types:
//!
//! - Variable declarations: `int x = 42;`
//! - Control flow: `if`, `while`, `for`, `do-while`, `switch`
//! - Jump statements: `return`, `break`, `continue`
//! - Compound statements: `{ ... }` and the empty statement `;`
//! - Expression statements: function calls, assignments
//!
//! # Grammar
//!
//! ```text
//! statement ::= var_decl | if_stmt | while_stmt | for_stmt
//!             | do_while_stmt | switch_stmt | return_stmt
//!             | break_stmt | continue_stmt | goto_stmt | label
//!             | block | ";" | expr_stmt
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::Token;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse block statements (inside braces, excluding the braces themselves)
    pub(crate) fn parse_block_statements(&mut self) -> Result<Vec<AstNode>, ParseError> {
        let mut statements = Vec::new();

        while !self.check(&Token::RBrace(self.current_location())) && !self.is_at_end() {
            statements.push(self.parse_statement()?);
        }

        Ok(statements)
    }

    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Result<AstNode, ParseError> {
        let loc = self.current_location();

        if self.match_token(&Token::Return(loc)) {
            return self.parse_return_statement();
        }

        if self.match_token(&Token::If(loc)) {
            return self.parse_if_statement();
        }

        if self.match_token(&Token::While(loc)) {
            return self.parse_while_statement();
        }

        if self.match_token(&Token::Do(loc)) {
            return self.parse_do_while_statement();
        }

        if self.match_token(&Token::For(loc)) {
            return self.parse_for_statement();
        }

        if self.match_token(&Token::Switch(loc)) {
            return self.parse_switch_statement();
        }

        if self.match_token(&Token::Break(loc)) {
            self.expect_token(
                &Token::Semicolon(self.current_location()),
                "Expected ';' after 'break'",
            )?;
            return Ok(AstNode::Break { location: loc });
        }

        if self.match_token(&Token::Continue(loc)) {
            self.expect_token(
                &Token::Semicolon(self.current_location()),
                "Expected ';' after 'continue'",
            )?;
            return Ok(AstNode::Continue { location: loc });
        }

        if self.match_token(&Token::Goto(loc)) {
            let label = self.expect_identifier()?;
            self.expect_token(
                &Token::Semicolon(self.current_location()),
                "Expected ';' after 'goto'",
            )?;
            return Ok(AstNode::Goto {
                label,
                location: loc,
            });
        }

        if self.match_token(&Token::Semicolon(loc)) {
            return Ok(AstNode::Block {
                statements: Vec::new(),
                location: loc,
            });
        }

        if self.match_token(&Token::LBrace(loc)) {
            let statements = self.parse_block_statements()?;
            self.expect_token(
                &Token::RBrace(self.current_location()),
                "Expected '}' after block",
            )?;
            return Ok(AstNode::Block {
                statements,
                location: loc,
            });
        }

        // `name:` is a label
        if let Token::Ident(_, _) = self.peek_token() {
            if self
                .peek_ahead(1)
                .map(|t| matches!(t, Token::Colon(_)))
                .unwrap_or(false)
            {
                let name = self.expect_identifier()?;
                self.expect_token(
                    &Token::Colon(self.current_location()),
                    "Expected ':' after label",
                )?;
                return Ok(AstNode::Label {
                    name,
                    location: loc,
                });
            }
        }

        if self.is_type_keyword() {
            return self.parse_variable_declaration();
        }

        let expr = self.parse_expression()?;
        self.expect_token(
            &Token::Semicolon(self.current_location()),
            "Expected ';' after expression",
        )?;
        Ok(AstNode::ExpressionStatement {
            expr: Box::new(expr),
            location: loc,
        })
    }

    /// Parse return statement
    fn parse_return_statement(&mut self) -> Result<AstNode, ParseError> {
        let loc = self.previous_location();

        let expr = if self.check(&Token::Semicolon(self.current_location())) {
            None
        } else {
            Some(Box::new(self.parse_expression()?))
        };

        self.expect_token(
            &Token::Semicolon(self.current_location()),
            "Expected ';' after return",
        )?;

        Ok(AstNode::Return {
            expr,
            location: loc,
        })
    }

    /// Parse if statement
    fn parse_if_statement(&mut self) -> Result<AstNode, ParseError> {
        let loc = self.previous_location();

        self.expect_token(
            &Token::LParen(self.current_location()),
            "Expected '(' after 'if'",
        )?;
        let condition = Box::new(self.parse_expression()?);
        self.expect_token(
            &Token::RParen(self.current_location()),
            "Expected ')' after if condition",
        )?;

        let then_branch = self.parse_statement_or_block()?;

        let else_branch = if self.match_token(&Token::Else(self.current_location())) {
            Some(self.parse_statement_or_block()?)
        } else {
            None
        };

        Ok(AstNode::If {
            condition,
            then_branch,
            else_branch,
            location: loc,
        })
    }

    /// Parse while statement
    fn parse_while_statement(&mut self) -> Result<AstNode, ParseError> {
        let loc = self.previous_location();

        self.expect_token(
            &Token::LParen(self.current_location()),
            "Expected '(' after 'while'",
        )?;
        let condition = Box::new(self.parse_expression()?);
        self.expect_token(
            &Token::RParen(self.current_location()),
            "Expected ')' after while condition",
        )?;

        let body = self.parse_statement_or_block()?;

        Ok(AstNode::While {
            condition,
            body,
            location: loc,
        })
    }

    /// Parse do-while statement
    fn parse_do_while_statement(&mut self) -> Result<AstNode, ParseError> {
        let loc = self.previous_location();

        let body = self.parse_statement_or_block()?;

        self.expect_token(
            &Token::While(self.current_location()),
            "Expected 'while' after do body",
        )?;
        self.expect_token(
            &Token::LParen(self.current_location()),
            "Expected '(' after 'while'",
        )?;
        let condition = Box::new(self.parse_expression()?);
        self.expect_token(
            &Token::RParen(self.current_location()),
            "Expected ')' after do-while condition",
        )?;
        self.expect_token(
            &Token::Semicolon(self.current_location()),
            "Expected ';' after do-while",
        )?;

        Ok(AstNode::DoWhile {
            body,
            condition,
            location: loc,
        })
    }

    /// Parse for statement
    fn parse_for_statement(&mut self) -> Result<AstNode, ParseError> {
        let loc = self.previous_location();

        self.expect_token(
            &Token::LParen(self.current_location()),
            "Expected '(' after 'for'",
        )?;

        let init = if self.check(&Token::Semicolon(self.current_location())) {
            self.advance();
            None
        } else if self.is_type_keyword() {
            let decl = self.parse_variable_declaration()?;
            // The declaration consumed the `;`
            Some(Box::new(decl))
        } else {
            let expr = self.parse_expression()?;
            self.expect_token(
                &Token::Semicolon(self.current_location()),
                "Expected ';' after for init",
            )?;
            Some(Box::new(expr))
        };

        let condition = if self.check(&Token::Semicolon(self.current_location())) {
            None
        } else {
            Some(Box::new(self.parse_expression()?))
        };
        self.expect_token(
            &Token::Semicolon(self.current_location()),
            "Expected ';' after for condition",
        )?;

        let increment = if self.check(&Token::RParen(self.current_location())) {
            None
        } else {
            Some(Box::new(self.parse_expression()?))
        };

        self.expect_token(
            &Token::RParen(self.current_location()),
            "Expected ')' after for clauses",
        )?;

        let body = self.parse_statement_or_block()?;

        Ok(AstNode::For {
            init,
            condition,
            increment,
            body,
            location: loc,
        })
    }

    /// Parse switch statement
    fn parse_switch_statement(&mut self) -> Result<AstNode, ParseError> {
        let loc = self.previous_location();

        self.expect_token(
            &Token::LParen(self.current_location()),
            "Expected '(' after 'switch'",
        )?;
        let expr = Box::new(self.parse_expression()?);
        self.expect_token(
            &Token::RParen(self.current_location()),
            "Expected ')' after switch expression",
        )?;
        self.expect_token(
            &Token::LBrace(self.current_location()),
            "Expected '{' before switch body",
        )?;

        let mut cases = Vec::new();

        while !self.check(&Token::RBrace(self.current_location())) && !self.is_at_end() {
            if self.match_token(&Token::Case(self.current_location())) {
                let case_loc = self.previous_location();
                let value = self.parse_expression()?;
                self.expect_token(
                    &Token::Colon(self.current_location()),
                    "Expected ':' after case value",
                )?;

                cases.push(CaseNode::Case {
                    value: Box::new(value),
                    statements: self.parse_case_body()?,
                    location: case_loc,
                });
            } else if self.match_token(&Token::Default(self.current_location())) {
                let default_loc = self.previous_location();
                self.expect_token(
                    &Token::Colon(self.current_location()),
                    "Expected ':' after 'default'",
                )?;

                cases.push(CaseNode::Default {
                    statements: self.parse_case_body()?,
                    location: default_loc,
                });
            } else {
                return Err(ParseError {
                    message: format!(
                        "Expected 'case' or 'default' in switch body, found {}",
                        self.peek()
                    ),
                    location: self.current_location(),
                });
            }
        }

        self.expect_token(
            &Token::RBrace(self.current_location()),
            "Expected '}' after switch body",
        )?;

        Ok(AstNode::Switch {
            expr,
            cases,
            location: loc,
        })
    }

    /// Parse the statements of one case arm, up to the next label or the closing brace
    fn parse_case_body(&mut self) -> Result<Vec<AstNode>, ParseError> {
        let mut statements = Vec::new();
        while !self.check(&Token::Case(self.current_location()))
            && !self.check(&Token::Default(self.current_location()))
            && !self.check(&Token::RBrace(self.current_location()))
            && !self.is_at_end()
        {
            statements.push(self.parse_statement()?);
        }
        Ok(statements)
    }

    /// Parse statement or block (for if/while/for bodies)
    pub(crate) fn parse_statement_or_block(&mut self) -> Result<Vec<AstNode>, ParseError> {
        if self.match_token(&Token::LBrace(self.current_location())) {
            let statements = self.parse_block_statements()?;
            self.expect_token(
                &Token::RBrace(self.current_location()),
                "Expected '}' after block",
            )?;
            Ok(statements)
        } else {
            Ok(vec![self.parse_statement()?])
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::*;
    use crate::parser::parse::Parser;

    fn body_of(source: &str) -> Vec<AstNode> {
        let mut parser = Parser::new(source).unwrap();
        let program = parser.parse_program().unwrap();
        match program.nodes.into_iter().next() {
            Some(AstNode::FunctionDef { body, .. }) => body,
            other => panic!("Expected function definition, got {:?}", other),
        }
    }

    #[test]
    fn test_for_with_declaration_init() {
        let body = body_of("void f() { for (int i = 0; i < 3; i++) { g(i); } }");

        match &body[0] {
            AstNode::For {
                init: Some(init),
                condition: Some(condition),
                increment: Some(_),
                body,
                ..
            } => {
                assert!(matches!(init.as_ref(), AstNode::VarDecl { name, .. } if name == "i"));
                assert!(matches!(
                    condition.as_ref(),
                    AstNode::BinaryOp { op: BinOp::Lt, .. }
                ));
                assert_eq!(body.len(), 1);
            }
            other => panic!("Expected for loop, got {:?}", other),
        }
    }

    #[test]
    fn test_switch_arms() {
        let body = body_of(
            "void f() { switch (x) { case 1: a(); break; case 2: default: b(); } }",
        );

        match &body[0] {
            AstNode::Switch { cases, .. } => {
                assert_eq!(cases.len(), 3);
                assert!(matches!(&cases[0], CaseNode::Case { statements, .. } if statements.len() == 2));
                assert!(matches!(&cases[1], CaseNode::Case { statements, .. } if statements.is_empty()));
                assert!(matches!(&cases[2], CaseNode::Default { statements, .. } if statements.len() == 1));
            }
            other => panic!("Expected switch, got {:?}", other),
        }
    }

    #[test]
    fn test_nested_block_and_empty_statement() {
        let body = body_of("void f() { { int x; ; } while (x) ; }");

        assert!(matches!(&body[0], AstNode::Block { statements, .. } if statements.len() == 2));
        match &body[1] {
            AstNode::While { body, .. } => {
                assert!(matches!(&body[0], AstNode::Block { statements, .. } if statements.is_empty()));
            }
            other => panic!("Expected while loop, got {:?}", other),
        }
    }

    #[test]
    fn test_goto_and_label() {
        let body = body_of("void f() { again: goto again; }");

        assert!(matches!(&body[0], AstNode::Label { name, .. } if name == "again"));
        assert!(matches!(&body[1], AstNode::Goto { label, .. } if label == "again"));
    }

    #[test]
    fn test_switch_rejects_statement_before_case() {
        let mut parser = Parser::new("void f() { switch (x) { a(); } }").unwrap();
        let err = parser.parse_program().unwrap_err();

        assert!(err.message.starts_with("Expected 'case' or 'default' in switch body"));
    }
}
