//! Declaration parsing implementation
//!
//! This module handles parsing of declarations in C programs:
//!
//! - Struct definitions: `struct Name { ... };`
//! - Function definitions and prototypes: `type name(params) { ... }` / `type name(params);`
//! - Variable declarations, local or global, with one or more declarators
//! - Type parsing: specifiers, pointers, array dimensions
//!
//! # Grammar
//!
//! ```text
//! declaration   ::= struct_def | function | var_decl
//! struct_def    ::= "struct" identifier "{" field_list "}" ";"
//! function      ::= type identifier "(" params ")" ( "{" statements "}" | ";" )
//! var_decl      ::= specifiers declarator ( "," declarator )* ";"
//! declarator    ::= "*"* identifier ( "[" expr? "]" )* ( "=" initializer )?
//! initializer   ::= expr | "{" initializer ( "," initializer )* ","? "}"
//! param         ::= type identifier? ( "[" expr? "]" )* | identifier
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::Token;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse a top-level declaration (function, prototype, struct, or global variable)
    pub(crate) fn parse_top_level_declaration(&mut self) -> Result<AstNode, ParseError> {
        // `struct Name {` opens a definition; `struct Name f(...)` or
        // `struct Name v;` only uses the struct as a type.
        if self.check(&Token::Struct(self.current_location()))
            && matches!(self.peek_ahead(1), Some(Token::Ident(_, _)))
            && matches!(self.peek_ahead(2), Some(Token::LBrace(_)))
        {
            self.advance();
            return self.parse_struct_definition();
        }

        let loc = self.current_location();
        let base = self.parse_base_type()?;

        // Look past any pointer stars for `name (` to spot a function
        let saved_pos = self.position;
        let mut return_type = base.clone();
        self.parse_pointers(&mut return_type);
        if matches!(self.peek_token(), Token::Ident(_, _))
            && matches!(self.peek_ahead(1), Some(Token::LParen(_)))
        {
            let name = self.expect_identifier()?;
            return self.parse_function_rest(return_type, name);
        }

        self.position = saved_pos;
        self.finish_variable_declaration(base, loc)
    }

    /// Parse struct definition: struct Name { fields };
    pub(crate) fn parse_struct_definition(&mut self) -> Result<AstNode, ParseError> {
        let loc = self.previous_location();

        let name = self.expect_identifier()?;

        self.expect_lbrace("after struct name")?;

        let mut fields = Vec::new();
        while !self.check(&Token::RBrace(self.current_location())) && !self.is_at_end() {
            let field_type = self.parse_type()?;
            let field_name = self.expect_identifier()?;
            let field_type = self.parse_array_dims(field_type)?;
            self.expect_semicolon("after struct field")?;

            fields.push(Field {
                name: field_name,
                field_type,
            });
        }

        self.expect_rbrace("after struct fields")?;
        self.expect_semicolon("after struct definition")?;

        Ok(AstNode::StructDef {
            name,
            fields,
            location: loc,
        })
    }

    /// Parse the rest of a function after its name: (params) { body } or (params);
    fn parse_function_rest(
        &mut self,
        return_type: Type,
        name: String,
    ) -> Result<AstNode, ParseError> {
        let loc = self.previous_location();

        self.expect_lparen("after function name")?;

        let params = self.parse_parameter_list()?;

        self.expect_rparen("after parameters")?;

        if self.match_token(&Token::Semicolon(self.current_location())) {
            return Ok(AstNode::FunctionDecl {
                name,
                params,
                return_type,
                location: loc,
            });
        }

        self.expect_lbrace("before function body")?;

        let body = self.parse_block_statements()?;

        self.expect_rbrace("after function body")?;

        Ok(AstNode::FunctionDef {
            name,
            params,
            return_type,
            body,
            location: loc,
        })
    }

    /// Parse parameter list: (type name, type name, ...) or K&R style (a, b, ...)
    pub(crate) fn parse_parameter_list(&mut self) -> Result<Vec<Param>, ParseError> {
        let mut params = Vec::new();

        if self.check(&Token::RParen(self.current_location())) {
            return Ok(params);
        }

        // `(void)` declares no parameters
        if self.check(&Token::Void(self.current_location()))
            && matches!(self.peek_ahead(1), Some(Token::RParen(_)))
        {
            self.advance();
            return Ok(params);
        }

        loop {
            if self.is_type_keyword() {
                let param_type = self.parse_type()?;
                let name = if let Token::Ident(name, _) = self.peek_token() {
                    self.advance();
                    Some(name)
                } else {
                    None
                };
                let param_type = self.parse_array_dims(param_type)?;
                params.push(Param { name, param_type });
            } else if let Token::Ident(name, _) = self.peek_token() {
                // Identifier-only parameter; C89 defaults its type to int
                self.advance();
                params.push(Param {
                    name: Some(name),
                    param_type: Type::new(BaseType::Int),
                });
            } else {
                return Err(ParseError {
                    message: format!("Expected parameter, found {}", self.peek()),
                    location: self.current_location(),
                });
            }

            if !self.match_token(&Token::Comma(self.current_location())) {
                break;
            }
        }

        Ok(params)
    }

    /// Parse type: specifiers followed by pointer stars
    pub(crate) fn parse_type(&mut self) -> Result<Type, ParseError> {
        let mut ty = self.parse_base_type()?;
        self.parse_pointers(&mut ty);
        Ok(ty)
    }

    /// Parse declaration specifiers: [const] [unsigned|signed] [short|long] base
    pub(crate) fn parse_base_type(&mut self) -> Result<Type, ParseError> {
        let mut is_const = false;
        let mut is_unsigned = false;
        let mut width = None;
        let mut base = None;
        let mut saw_specifier = false;

        loop {
            let loc = self.current_location();
            if self.match_token(&Token::Const(loc)) {
                is_const = true;
            } else if self.match_token(&Token::Unsigned(loc)) {
                is_unsigned = true;
            } else if self.match_token(&Token::Signed(loc)) {
                is_unsigned = false;
            } else if self.match_token(&Token::Long(loc)) {
                width = Some(BaseType::Long);
            } else if self.match_token(&Token::Short(loc)) {
                width = Some(BaseType::Short);
            } else if base.is_none() && self.match_token(&Token::Int(loc)) {
                base = Some(BaseType::Int);
            } else if base.is_none() && self.match_token(&Token::Char(loc)) {
                base = Some(BaseType::Char);
            } else if base.is_none() && self.match_token(&Token::Void(loc)) {
                base = Some(BaseType::Void);
            } else if base.is_none() && self.match_token(&Token::Float(loc)) {
                base = Some(BaseType::Float);
            } else if base.is_none() && self.match_token(&Token::Double(loc)) {
                base = Some(BaseType::Double);
            } else if base.is_none() && self.match_token(&Token::Struct(loc)) {
                let name = self.expect_identifier()?;
                base = Some(BaseType::Struct(name));
            } else {
                break;
            }
            saw_specifier = true;
        }

        if !saw_specifier {
            return Err(ParseError {
                message: format!("Expected type, found {}", self.peek()),
                location: self.current_location(),
            });
        }

        // `long`/`short` refine `int`; `unsigned x` alone means `unsigned int`
        let base = match (base, width) {
            (None | Some(BaseType::Int), Some(width)) => width,
            (Some(base), _) => base,
            (None, None) => BaseType::Int,
        };

        Ok(Type {
            base,
            is_const,
            is_unsigned,
            pointer_depth: 0,
            array_dims: Vec::new(),
        })
    }

    /// Consume `*` (and `* const`) markers onto `ty`
    pub(crate) fn parse_pointers(&mut self, ty: &mut Type) {
        while self.match_token(&Token::Star(self.current_location())) {
            ty.pointer_depth += 1;
            self.match_token(&Token::Const(self.current_location()));
        }
    }

    /// Parse trailing `[size]` / `[]` dimensions after a declarator name
    pub(crate) fn parse_array_dims(&mut self, mut ty: Type) -> Result<Type, ParseError> {
        while self.match_token(&Token::LBracket(self.current_location())) {
            if self.match_token(&Token::RBracket(self.current_location())) {
                // Unsized array []
                ty = ty.with_array(None);
            } else {
                let size_expr = self.parse_expression()?;
                self.expect_token(
                    &Token::RBracket(self.current_location()),
                    "Expected ']' after array size",
                )?;
                ty = ty.with_array(Some(size_expr));
            }
        }
        Ok(ty)
    }

    /// Parse variable declaration: specifiers declarator (, declarator)* ;
    pub(crate) fn parse_variable_declaration(&mut self) -> Result<AstNode, ParseError> {
        let loc = self.current_location();
        let base = self.parse_base_type()?;
        self.finish_variable_declaration(base, loc)
    }

    /// Parse the declarator list once the specifiers are known.
    ///
    /// A single declarator yields a plain `VarDecl`; `int a, b;` yields a
    /// `DeclList` so the statement count stays one-per-source-statement.
    fn finish_variable_declaration(
        &mut self,
        base: Type,
        loc: SourceLocation,
    ) -> Result<AstNode, ParseError> {
        let mut declarations = vec![self.parse_declarator(&base)?];
        while self.match_token(&Token::Comma(self.current_location())) {
            declarations.push(self.parse_declarator(&base)?);
        }

        self.expect_semicolon("after variable declaration")?;

        if declarations.len() == 1 {
            Ok(declarations.remove(0))
        } else {
            Ok(AstNode::DeclList {
                declarations,
                location: loc,
            })
        }
    }

    /// Parse a single declarator: *name[dims] = init
    fn parse_declarator(&mut self, base: &Type) -> Result<AstNode, ParseError> {
        let mut var_type = base.clone();
        self.parse_pointers(&mut var_type);
        let name = self.expect_identifier()?;
        let loc = self.previous_location();
        let var_type = self.parse_array_dims(var_type)?;

        let init = if self.match_token(&Token::Eq(self.current_location())) {
            Some(Box::new(self.parse_initializer()?))
        } else {
            None
        };

        Ok(AstNode::VarDecl {
            name,
            var_type,
            init,
            location: loc,
        })
    }

    /// Parse an initializer: an expression or a brace-enclosed list
    fn parse_initializer(&mut self) -> Result<AstNode, ParseError> {
        let loc = self.current_location();
        if !self.match_token(&Token::LBrace(loc)) {
            return self.parse_expression();
        }

        let mut elements = Vec::new();
        while !self.check(&Token::RBrace(self.current_location())) {
            elements.push(self.parse_initializer()?);
            if !self.match_token(&Token::Comma(self.current_location())) {
                break;
            }
        }
        self.expect_rbrace("after initializer list")?;

        Ok(AstNode::InitList {
            elements,
            location: loc,
        })
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
    fn test_array_size_kept_as_expression() {
        let body = body_of("void f() { int buf[N * 2]; }");

        match &body[0] {
            AstNode::VarDecl { var_type, .. } => {
                assert_eq!(var_type.array_dims.len(), 1);
                assert!(matches!(
                    var_type.array_dims[0],
                    Some(AstNode::BinaryOp { op: BinOp::Mul, .. })
                ));
            }
            other => panic!("Expected array declaration, got {:?}", other),
        }
    }

    #[test]
    fn test_pointer_stars_bind_to_each_declarator() {
        let body = body_of("void f() { int *p, q; }");

        match &body[0] {
            AstNode::DeclList { declarations, .. } => {
                assert_eq!(declarations[0].kind(), "PointerDeclaration");
                assert_eq!(declarations[1].kind(), "VariableDeclaration");
            }
            other => panic!("Expected declaration list, got {:?}", other),
        }
    }

    #[test]
    fn test_initializer_list() {
        let body = body_of("void f() { int a[] = {1, 2, 3,}; }");

        match &body[0] {
            AstNode::VarDecl {
                init: Some(init), ..
            } => match init.as_ref() {
                AstNode::InitList { elements, .. } => assert_eq!(elements.len(), 3),
                other => panic!("Expected initializer list, got {:?}", other),
            },
            other => panic!("Expected declaration, got {:?}", other),
        }
    }

    #[test]
    fn test_type_specifier_combinations() {
        let mut parser = Parser::new("unsigned long x;").unwrap();
        let ty = parser.parse_base_type().unwrap();
        assert_eq!(ty.base, BaseType::Long);
        assert!(ty.is_unsigned);

        let mut parser = Parser::new("const char *s").unwrap();
        let ty = parser.parse_type().unwrap();
        assert_eq!(ty.base, BaseType::Char);
        assert!(ty.is_const);
        assert_eq!(ty.pointer_depth, 1);
    }

    #[test]
    fn test_struct_return_type_is_not_a_definition() {
        let mut parser =
            Parser::new("struct Point origin(void) { struct Point p; return p; }").unwrap();
        let program = parser.parse_program().unwrap();

        match &program.nodes[0] {
            AstNode::FunctionDef {
                name, return_type, params, ..
            } => {
                assert_eq!(name, "origin");
                assert!(params.is_empty());
                assert_eq!(return_type.base, BaseType::Struct("Point".to_string()));
            }
            other => panic!("Expected function definition, got {:?}", other),
        }
    }
}
