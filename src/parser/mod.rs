//! C source code front end
//!
//! This module transforms C source text into an Abstract Syntax Tree (AST):
//! - [`frontend`]: Entry point (directive stripping → parsing → [`frontend::ParseFailure`])
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parsing (tokens → AST)
//! - [`ast`]: AST node definitions
//!
//! # Accepted C Subset
//!
//! The parser accepts the shapes that commonly appear in teaching-sized snippets:
//! - Types: `int`, `char`, `void`, `float`, `double`, `short`, `long`,
//!   `unsigned`/`signed`, structs, pointers, arrays
//! - Declarations: functions, prototypes, globals, multi-declarator locals,
//!   brace initializers, K&R identifier-only parameters
//! - Statements: control flow (`if`, `while`, `do`, `for`, `switch`), jumps, labels
//! - Expressions: arithmetic, logical, bitwise, ternary, casts, `sizeof`, calls
//! - No preprocessor: directive lines are removed before lexing
//! - No typedefs, unions, enums, or function pointers
//!
//! Accepting a construct here does not mean it translates; the generator
//! marks what it cannot express.
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with precedence climbing for binary operators.
//! No external parser generator dependencies.

pub mod ast;
pub mod frontend;
pub mod lexer;
pub mod parse;

mod declarations;
mod expressions;
mod statements;
