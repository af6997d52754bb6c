//! Lexer (tokenizer) for C source code
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the parser.
//! Literals keep their exact source spelling (quotes, escapes, suffixes), since
//! the generator reproduces them verbatim. Preprocessor lines never reach the
//! lexer; they are stripped by [`super::frontend`] beforehand.

use super::ast::SourceLocation;
use std::fmt;
use thiserror::Error;

/// All token variants produced by the lexer.
///
/// Every variant carries a [`SourceLocation`] so that parse errors can report
/// an accurate line and column without a separate token→location table.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals (raw source text)
    IntLiteral(String, SourceLocation),
    FloatLiteral(String, SourceLocation),
    CharLiteral(String, SourceLocation),
    StringLiteral(String, SourceLocation),

    // Identifiers
    Ident(String, SourceLocation),

    // Keywords
    Int(SourceLocation),
    Char(SourceLocation),
    Void(SourceLocation),
    Float(SourceLocation),
    Double(SourceLocation),
    Long(SourceLocation),
    Short(SourceLocation),
    Unsigned(SourceLocation),
    Signed(SourceLocation),
    Struct(SourceLocation),
    Const(SourceLocation),
    If(SourceLocation),
    Else(SourceLocation),
    While(SourceLocation),
    Do(SourceLocation),
    For(SourceLocation),
    Switch(SourceLocation),
    Case(SourceLocation),
    Default(SourceLocation),
    Break(SourceLocation),
    Continue(SourceLocation),
    Return(SourceLocation),
    Goto(SourceLocation),
    Sizeof(SourceLocation),
    Null(SourceLocation),

    // Operators (single and multi-character)
    // Arithmetic
    Plus(SourceLocation),    // +
    Minus(SourceLocation),   // -
    Star(SourceLocation),    // *
    Slash(SourceLocation),   // /
    Percent(SourceLocation), // %

    // Comparison
    EqEq(SourceLocation),  // ==
    NotEq(SourceLocation), // !=
    Lt(SourceLocation),    // <
    Le(SourceLocation),    // <=
    Gt(SourceLocation),    // >
    Ge(SourceLocation),    // >=

    // Logical
    AndAnd(SourceLocation), // &&
    OrOr(SourceLocation),   // ||
    Bang(SourceLocation),   // !

    // Bitwise
    Amp(SourceLocation),   // &
    Pipe(SourceLocation),  // |
    Caret(SourceLocation), // ^
    Tilde(SourceLocation), // ~
    LtLt(SourceLocation),  // <<
    GtGt(SourceLocation),  // >>

    // Assignment
    Eq(SourceLocation),        // =
    PlusEq(SourceLocation),    // +=
    MinusEq(SourceLocation),   // -=
    StarEq(SourceLocation),    // *=
    SlashEq(SourceLocation),   // /=
    PercentEq(SourceLocation), // %=
    AmpEq(SourceLocation),     // &=
    PipeEq(SourceLocation),    // |=
    CaretEq(SourceLocation),   // ^=
    LtLtEq(SourceLocation),    // <<=
    GtGtEq(SourceLocation),    // >>=

    // Increment/Decrement
    PlusPlus(SourceLocation),   // ++
    MinusMinus(SourceLocation), // --

    // Member access
    Dot(SourceLocation),   // .
    Arrow(SourceLocation), // ->

    // Ternary
    Question(SourceLocation), // ?
    Colon(SourceLocation),    // :

    // Punctuation
    LParen(SourceLocation),    // (
    RParen(SourceLocation),    // )
    LBrace(SourceLocation),    // {
    RBrace(SourceLocation),    // }
    LBracket(SourceLocation),  // [
    RBracket(SourceLocation),  // ]
    Semicolon(SourceLocation), // ;
    Comma(SourceLocation),     // ,

    // End of file
    Eof(SourceLocation),
}

impl Token {
    /// Returns the source location where this token appears.
    pub fn location(&self) -> SourceLocation {
        match self {
            Token::IntLiteral(_, loc)
            | Token::FloatLiteral(_, loc)
            | Token::CharLiteral(_, loc)
            | Token::StringLiteral(_, loc)
            | Token::Ident(_, loc)
            | Token::Int(loc)
            | Token::Char(loc)
            | Token::Void(loc)
            | Token::Float(loc)
            | Token::Double(loc)
            | Token::Long(loc)
            | Token::Short(loc)
            | Token::Unsigned(loc)
            | Token::Signed(loc)
            | Token::Struct(loc)
            | Token::Const(loc)
            | Token::If(loc)
            | Token::Else(loc)
            | Token::While(loc)
            | Token::Do(loc)
            | Token::For(loc)
            | Token::Switch(loc)
            | Token::Case(loc)
            | Token::Default(loc)
            | Token::Break(loc)
            | Token::Continue(loc)
            | Token::Return(loc)
            | Token::Goto(loc)
            | Token::Sizeof(loc)
            | Token::Null(loc)
            | Token::Plus(loc)
            | Token::Minus(loc)
            | Token::Star(loc)
            | Token::Slash(loc)
            | Token::Percent(loc)
            | Token::EqEq(loc)
            | Token::NotEq(loc)
            | Token::Lt(loc)
            | Token::Le(loc)
            | Token::Gt(loc)
            | Token::Ge(loc)
            | Token::AndAnd(loc)
            | Token::OrOr(loc)
            | Token::Bang(loc)
            | Token::Amp(loc)
            | Token::Pipe(loc)
            | Token::Caret(loc)
            | Token::Tilde(loc)
            | Token::LtLt(loc)
            | Token::GtGt(loc)
            | Token::Eq(loc)
            | Token::PlusEq(loc)
            | Token::MinusEq(loc)
            | Token::StarEq(loc)
            | Token::SlashEq(loc)
            | Token::PercentEq(loc)
            | Token::AmpEq(loc)
            | Token::PipeEq(loc)
            | Token::CaretEq(loc)
            | Token::LtLtEq(loc)
            | Token::GtGtEq(loc)
            | Token::PlusPlus(loc)
            | Token::MinusMinus(loc)
            | Token::Dot(loc)
            | Token::Arrow(loc)
            | Token::Question(loc)
            | Token::Colon(loc)
            | Token::LParen(loc)
            | Token::RParen(loc)
            | Token::LBrace(loc)
            | Token::RBrace(loc)
            | Token::LBracket(loc)
            | Token::RBracket(loc)
            | Token::Semicolon(loc)
            | Token::Comma(loc)
            | Token::Eof(loc) => *loc,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::IntLiteral(text, _) => write!(f, "int literal {}", text),
            Token::FloatLiteral(text, _) => write!(f, "float literal {}", text),
            Token::CharLiteral(text, _) => write!(f, "char literal {}", text),
            Token::StringLiteral(text, _) => write!(f, "string literal {}", text),
            Token::Ident(s, _) => write!(f, "identifier '{}'", s),
            Token::Int(_) => write!(f, "'int'"),
            Token::Char(_) => write!(f, "'char'"),
            Token::Void(_) => write!(f, "'void'"),
            Token::Float(_) => write!(f, "'float'"),
            Token::Double(_) => write!(f, "'double'"),
            Token::Long(_) => write!(f, "'long'"),
            Token::Short(_) => write!(f, "'short'"),
            Token::Unsigned(_) => write!(f, "'unsigned'"),
            Token::Signed(_) => write!(f, "'signed'"),
            Token::Struct(_) => write!(f, "'struct'"),
            Token::Const(_) => write!(f, "'const'"),
            Token::If(_) => write!(f, "'if'"),
            Token::Else(_) => write!(f, "'else'"),
            Token::While(_) => write!(f, "'while'"),
            Token::Do(_) => write!(f, "'do'"),
            Token::For(_) => write!(f, "'for'"),
            Token::Switch(_) => write!(f, "'switch'"),
            Token::Case(_) => write!(f, "'case'"),
            Token::Default(_) => write!(f, "'default'"),
            Token::Break(_) => write!(f, "'break'"),
            Token::Continue(_) => write!(f, "'continue'"),
            Token::Return(_) => write!(f, "'return'"),
            Token::Goto(_) => write!(f, "'goto'"),
            Token::Sizeof(_) => write!(f, "'sizeof'"),
            Token::Null(_) => write!(f, "'NULL'"),
            Token::Plus(_) => write!(f, "'+'"),
            Token::Minus(_) => write!(f, "'-'"),
            Token::Star(_) => write!(f, "'*'"),
            Token::Slash(_) => write!(f, "'/'"),
            Token::Percent(_) => write!(f, "'%'"),
            Token::EqEq(_) => write!(f, "'=='"),
            Token::NotEq(_) => write!(f, "'!='"),
            Token::Lt(_) => write!(f, "'<'"),
            Token::Le(_) => write!(f, "'<='"),
            Token::Gt(_) => write!(f, "'>'"),
            Token::Ge(_) => write!(f, "'>='"),
            Token::AndAnd(_) => write!(f, "'&&'"),
            Token::OrOr(_) => write!(f, "'||'"),
            Token::Bang(_) => write!(f, "'!'"),
            Token::Amp(_) => write!(f, "'&'"),
            Token::Pipe(_) => write!(f, "'|'"),
            Token::Caret(_) => write!(f, "'^'"),
            Token::Tilde(_) => write!(f, "'~'"),
            Token::LtLt(_) => write!(f, "'<<'"),
            Token::GtGt(_) => write!(f, "'>>'"),
            Token::Eq(_) => write!(f, "'='"),
            Token::PlusEq(_) => write!(f, "'+='"),
            Token::MinusEq(_) => write!(f, "'-='"),
            Token::StarEq(_) => write!(f, "'*='"),
            Token::SlashEq(_) => write!(f, "'/='"),
            Token::PercentEq(_) => write!(f, "'%='"),
            Token::AmpEq(_) => write!(f, "'&='"),
            Token::PipeEq(_) => write!(f, "'|='"),
            Token::CaretEq(_) => write!(f, "'^='"),
            Token::LtLtEq(_) => write!(f, "'<<='"),
            Token::GtGtEq(_) => write!(f, "'>>='"),
            Token::PlusPlus(_) => write!(f, "'++'"),
            Token::MinusMinus(_) => write!(f, "'--'"),
            Token::Dot(_) => write!(f, "'.'"),
            Token::Arrow(_) => write!(f, "'->'"),
            Token::Question(_) => write!(f, "'?'"),
            Token::Colon(_) => write!(f, "':'"),
            Token::LParen(_) => write!(f, "'('"),
            Token::RParen(_) => write!(f, "')'"),
            Token::LBrace(_) => write!(f, "'{{'"),
            Token::RBrace(_) => write!(f, "'}}'"),
            Token::LBracket(_) => write!(f, "'['"),
            Token::RBracket(_) => write!(f, "']'"),
            Token::Semicolon(_) => write!(f, "';'"),
            Token::Comma(_) => write!(f, "','"),
            Token::Eof(_) => write!(f, "end of file"),
        }
    }
}

/// Lexer error type
#[derive(Debug, Clone, Error)]
#[error("Lexer error at line {}, column {}: {message}", .location.line, .location.column)]
pub struct LexError {
    pub message: String,
    pub location: SourceLocation,
}

/// Lexer for C source code
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace_and_comments()?;

            if self.is_at_end() {
                tokens.push(Token::Eof(self.current_location()));
                break;
            }

            tokens.push(self.next_token()?);
        }

        Ok(tokens)
    }

    /// Get next token
    fn next_token(&mut self) -> Result<Token, LexError> {
        let loc = self.current_location();
        let ch = self.advance().ok_or_else(|| LexError {
            message: "Unexpected end of file".to_string(),
            location: loc,
        })?;

        match ch {
            // String literals
            '"' => self.string_literal(),

            // Character literals
            '\'' => self.char_literal(),

            // Numeric literals, including `.5` style floats
            '0'..='9' => self.number_literal(ch),
            '.' if self.peek().is_some_and(|c| c.is_ascii_digit()) => {
                self.number_literal(ch)
            }

            // Identifiers and keywords
            'a'..='z' | 'A'..='Z' | '_' => self.identifier_or_keyword(ch),

            // Operators and punctuation
            '+' => {
                if self.peek() == Some('+') {
                    self.advance();
                    Ok(Token::PlusPlus(loc))
                } else if self.peek() == Some('=') {
                    self.advance();
                    Ok(Token::PlusEq(loc))
                } else {
                    Ok(Token::Plus(loc))
                }
            }
            '-' => {
                if self.peek() == Some('-') {
                    self.advance();
                    Ok(Token::MinusMinus(loc))
                } else if self.peek() == Some('=') {
                    self.advance();
                    Ok(Token::MinusEq(loc))
                } else if self.peek() == Some('>') {
                    self.advance();
                    Ok(Token::Arrow(loc))
                } else {
                    Ok(Token::Minus(loc))
                }
            }
            '*' => Ok(self.with_optional_eq(Token::StarEq(loc), Token::Star(loc))),
            '/' => Ok(self.with_optional_eq(Token::SlashEq(loc), Token::Slash(loc))),
            '%' => Ok(self.with_optional_eq(Token::PercentEq(loc), Token::Percent(loc))),
            '^' => Ok(self.with_optional_eq(Token::CaretEq(loc), Token::Caret(loc))),
            '=' => Ok(self.with_optional_eq(Token::EqEq(loc), Token::Eq(loc))),
            '!' => Ok(self.with_optional_eq(Token::NotEq(loc), Token::Bang(loc))),
            '<' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Ok(Token::Le(loc))
                } else if self.peek() == Some('<') {
                    self.advance();
                    Ok(self.with_optional_eq(Token::LtLtEq(loc), Token::LtLt(loc)))
                } else {
                    Ok(Token::Lt(loc))
                }
            }
            '>' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Ok(Token::Ge(loc))
                } else if self.peek() == Some('>') {
                    self.advance();
                    Ok(self.with_optional_eq(Token::GtGtEq(loc), Token::GtGt(loc)))
                } else {
                    Ok(Token::Gt(loc))
                }
            }
            '&' => {
                if self.peek() == Some('&') {
                    self.advance();
                    Ok(Token::AndAnd(loc))
                } else {
                    Ok(self.with_optional_eq(Token::AmpEq(loc), Token::Amp(loc)))
                }
            }
            '|' => {
                if self.peek() == Some('|') {
                    self.advance();
                    Ok(Token::OrOr(loc))
                } else {
                    Ok(self.with_optional_eq(Token::PipeEq(loc), Token::Pipe(loc)))
                }
            }
            '~' => Ok(Token::Tilde(loc)),
            '.' => Ok(Token::Dot(loc)),
            '?' => Ok(Token::Question(loc)),
            ':' => Ok(Token::Colon(loc)),
            '(' => Ok(Token::LParen(loc)),
            ')' => Ok(Token::RParen(loc)),
            '{' => Ok(Token::LBrace(loc)),
            '}' => Ok(Token::RBrace(loc)),
            '[' => Ok(Token::LBracket(loc)),
            ']' => Ok(Token::RBracket(loc)),
            ';' => Ok(Token::Semicolon(loc)),
            ',' => Ok(Token::Comma(loc)),

            _ => Err(LexError {
                message: format!("Unexpected character: '{}'", ch),
                location: loc,
            }),
        }
    }

    /// Consume a trailing `=` and return `with_eq`, otherwise `plain`
    fn with_optional_eq(&mut self, with_eq: Token, plain: Token) -> Token {
        if self.peek() == Some('=') {
            self.advance();
            with_eq
        } else {
            plain
        }
    }

    /// Parse string literal, keeping quotes and escapes as written
    fn string_literal(&mut self) -> Result<Token, LexError> {
        let loc = SourceLocation::new(self.line, self.column - 1);
        let text = self.quoted_literal('"', loc, "string")?;
        Ok(Token::StringLiteral(text, loc))
    }

    /// Parse character literal, keeping quotes and escapes as written
    fn char_literal(&mut self) -> Result<Token, LexError> {
        let loc = SourceLocation::new(self.line, self.column - 1);
        let text = self.quoted_literal('\'', loc, "character")?;
        if text.len() <= 2 {
            return Err(LexError {
                message: "Empty character literal".to_string(),
                location: loc,
            });
        }
        Ok(Token::CharLiteral(text, loc))
    }

    /// Scan up to the closing `quote`; the opening quote is already consumed.
    fn quoted_literal(
        &mut self,
        quote: char,
        loc: SourceLocation,
        what: &str,
    ) -> Result<String, LexError> {
        let mut text = String::new();
        text.push(quote);

        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            self.advance();
            text.push(ch);

            if ch == quote {
                return Ok(text);
            }

            if ch == '\\' {
                let escaped = self.advance().ok_or_else(|| LexError {
                    message: format!("Unexpected end of file in {} literal", what),
                    location: self.current_location(),
                })?;
                if escaped == '\r' && self.peek() == Some('\n') {
                    self.advance();
                    text.pop();
                } else if escaped == '\n' {
                    // Line continuation: the literal carries on without a break
                    text.pop();
                } else {
                    text.push(escaped);
                }
            }
        }

        Err(LexError {
            message: format!("Unterminated {} literal", what),
            location: loc,
        })
    }

    /// Parse numeric literal: decimal, octal, hex, floats with exponents,
    /// and the usual `u`/`l`/`f` suffixes.
    fn number_literal(&mut self, first: char) -> Result<Token, LexError> {
        let loc = SourceLocation::new(self.line, self.column - 1);
        let mut text = String::new();
        text.push(first);
        let mut is_float = first == '.';

        if first == '0' && matches!(self.peek(), Some('x') | Some('X')) {
            text.push(self.advance().unwrap_or('x'));
            while let Some(ch) = self.peek().filter(|c| c.is_ascii_hexdigit()) {
                text.push(ch);
                self.advance();
            }
            if text.len() == 2 {
                return Err(LexError {
                    message: format!("Invalid hex literal: {}", text),
                    location: loc,
                });
            }
        } else {
            while let Some(ch) = self.peek() {
                if ch.is_ascii_digit() {
                    text.push(ch);
                } else if ch == '.' && !is_float {
                    is_float = true;
                    text.push(ch);
                } else if matches!(ch, 'e' | 'E') {
                    is_float = true;
                    text.push(ch);
                    self.advance();
                    if let Some(sign) = self.peek().filter(|c| matches!(c, '+' | '-')) {
                        text.push(sign);
                        self.advance();
                    }
                    continue;
                } else {
                    break;
                }
                self.advance();
            }
        }

        while let Some(ch) = self.peek().filter(|c| matches!(c, 'u' | 'U' | 'l' | 'L' | 'f' | 'F')) {
            if matches!(ch, 'f' | 'F') {
                is_float = true;
            }
            text.push(ch);
            self.advance();
        }

        if self.peek().is_some_and(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(LexError {
                message: format!("Invalid numeric literal: {}{}", text, self.peek().unwrap_or(' ')),
                location: loc,
            });
        }

        if is_float {
            Ok(Token::FloatLiteral(text, loc))
        } else {
            Ok(Token::IntLiteral(text, loc))
        }
    }

    /// Parse identifier or keyword
    fn identifier_or_keyword(
        &mut self,
        first_char: char,
    ) -> Result<Token, LexError> {
        let loc = SourceLocation::new(self.line, self.column - 1);
        let mut ident = String::new();
        ident.push(first_char);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let token = match ident.as_str() {
            "int" => Token::Int(loc),
            "char" => Token::Char(loc),
            "void" => Token::Void(loc),
            "float" => Token::Float(loc),
            "double" => Token::Double(loc),
            "long" => Token::Long(loc),
            "short" => Token::Short(loc),
            "unsigned" => Token::Unsigned(loc),
            "signed" => Token::Signed(loc),
            "struct" => Token::Struct(loc),
            "const" => Token::Const(loc),
            "if" => Token::If(loc),
            "else" => Token::Else(loc),
            "while" => Token::While(loc),
            "do" => Token::Do(loc),
            "for" => Token::For(loc),
            "switch" => Token::Switch(loc),
            "case" => Token::Case(loc),
            "default" => Token::Default(loc),
            "break" => Token::Break(loc),
            "continue" => Token::Continue(loc),
            "return" => Token::Return(loc),
            "goto" => Token::Goto(loc),
            "sizeof" => Token::Sizeof(loc),
            "NULL" => Token::Null(loc),
            _ => Token::Ident(ident, loc),
        };

        Ok(token)
    }

    /// Skip whitespace and comments
    fn skip_whitespace_and_comments(&mut self) -> Result<(), LexError> {
        loop {
            match self.peek() {
                Some(' ') | Some('\t') | Some('\r') | Some('\n') => {
                    self.advance();
                }
                Some('/') => {
                    if self.peek_ahead(1) == Some('/') {
                        // Single-line comment
                        self.skip_line_comment();
                    } else if self.peek_ahead(1) == Some('*') {
                        // Multi-line comment
                        self.skip_block_comment()?;
                    } else {
                        break;
                    }
                }
                _ => break,
            }
        }
        Ok(())
    }

    /// Skip single-line comment (// ...)
    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.peek() {
            self.advance();
            if ch == '\n' {
                break;
            }
        }
    }

    /// Skip multi-line comment (/* ... */)
    fn skip_block_comment(&mut self) -> Result<(), LexError> {
        let start_loc = self.current_location();
        self.advance();
        self.advance();

        while !self.is_at_end() {
            if self.peek() == Some('*') && self.peek_ahead(1) == Some('/') {
                self.advance();
                self.advance();
                return Ok(());
            }
            self.advance();
        }

        Err(LexError {
            message: "Unterminated block comment".to_string(),
            location: start_loc,
        })
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Peek ahead n characters
    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Check if at end of input
    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_tokens() {
        let mut lexer = Lexer::new("int main() { return 0; }");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::Int(_)));
        assert!(matches!(tokens[1], Token::Ident(ref s, _) if s == "main"));
        assert!(matches!(tokens[2], Token::LParen(_)));
        assert!(matches!(tokens[3], Token::RParen(_)));
        assert!(matches!(tokens[4], Token::LBrace(_)));
        assert!(matches!(tokens[5], Token::Return(_)));
        assert!(matches!(tokens[6], Token::IntLiteral(ref s, _) if s == "0"));
        assert!(matches!(tokens[7], Token::Semicolon(_)));
        assert!(matches!(tokens[8], Token::RBrace(_)));
        assert!(matches!(tokens[9], Token::Eof(_)));
    }

    #[test]
    fn test_operators() {
        let mut lexer = Lexer::new("++ -- += -= == != && || <<= >>= &= |= ^=");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::PlusPlus(_)));
        assert!(matches!(tokens[1], Token::MinusMinus(_)));
        assert!(matches!(tokens[2], Token::PlusEq(_)));
        assert!(matches!(tokens[3], Token::MinusEq(_)));
        assert!(matches!(tokens[4], Token::EqEq(_)));
        assert!(matches!(tokens[5], Token::NotEq(_)));
        assert!(matches!(tokens[6], Token::AndAnd(_)));
        assert!(matches!(tokens[7], Token::OrOr(_)));
        assert!(matches!(tokens[8], Token::LtLtEq(_)));
        assert!(matches!(tokens[9], Token::GtGtEq(_)));
        assert!(matches!(tokens[10], Token::AmpEq(_)));
        assert!(matches!(tokens[11], Token::PipeEq(_)));
        assert!(matches!(tokens[12], Token::CaretEq(_)));
    }

    #[test]
    fn test_comments() {
        let mut lexer =
            Lexer::new("int x; // comment\nint y; /* block\ncomment */ int z;");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::Int(_)));
        assert!(matches!(tokens[1], Token::Ident(ref s, _) if s == "x"));
        assert!(matches!(tokens[2], Token::Semicolon(_)));
        assert!(matches!(tokens[3], Token::Int(_)));
        assert!(matches!(tokens[4], Token::Ident(ref s, _) if s == "y"));
        assert!(matches!(tokens[5], Token::Semicolon(_)));
        assert!(matches!(tokens[6], Token::Int(_)));
        assert!(matches!(tokens[7], Token::Ident(ref s, _) if s == "z"));
    }

    #[test]
    fn test_string_literal_kept_verbatim() {
        let mut lexer = Lexer::new(r#""hello\nworld %d""#);
        let tokens = lexer.tokenize().unwrap();

        match &tokens[0] {
            Token::StringLiteral(s, _) => {
                assert_eq!(s, r#""hello\nworld %d""#);
            }
            _ => panic!("Expected string literal"),
        }
    }

    #[test]
    fn test_char_literal_kept_verbatim() {
        let mut lexer = Lexer::new(r"'a' '\n' '\''");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::CharLiteral(ref s, _) if s == "'a'"));
        assert!(matches!(tokens[1], Token::CharLiteral(ref s, _) if s == r"'\n'"));
        assert!(matches!(tokens[2], Token::CharLiteral(ref s, _) if s == r"'\''"));
    }

    #[test]
    fn test_string_line_continuation_is_folded() {
        let mut lexer = Lexer::new("\"a\\\n b\" x \"c\\\r\nd\"");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::StringLiteral(ref s, _) if s == "\"a b\""));
        assert!(matches!(tokens[1], Token::Ident(_, loc) if loc.line == 2));
        assert!(matches!(tokens[2], Token::StringLiteral(ref s, _) if s == "\"cd\""));
    }

    #[test]
    fn test_numeric_literals() {
        let mut lexer = Lexer::new("42 0x1F 3.14 1e-3 .5 10UL 2.0f");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::IntLiteral(ref s, _) if s == "42"));
        assert!(matches!(tokens[1], Token::IntLiteral(ref s, _) if s == "0x1F"));
        assert!(matches!(tokens[2], Token::FloatLiteral(ref s, _) if s == "3.14"));
        assert!(matches!(tokens[3], Token::FloatLiteral(ref s, _) if s == "1e-3"));
        assert!(matches!(tokens[4], Token::FloatLiteral(ref s, _) if s == ".5"));
        assert!(matches!(tokens[5], Token::IntLiteral(ref s, _) if s == "10UL"));
        assert!(matches!(tokens[6], Token::FloatLiteral(ref s, _) if s == "2.0f"));
    }

    #[test]
    fn test_unterminated_string_reports_location() {
        let mut lexer = Lexer::new("int x;\nchar *s = \"oops;\n");
        let err = lexer.tokenize().unwrap_err();

        assert_eq!(err.location.line, 2);
        assert_eq!(err.location.column, 11);
        assert!(err.to_string().contains("Unterminated string literal"));
    }

    #[test]
    fn test_hash_is_not_a_token() {
        let mut lexer = Lexer::new("int x; # y");
        let err = lexer.tokenize().unwrap_err();

        assert!(err.message.contains("Unexpected character: '#'"));
    }
}
