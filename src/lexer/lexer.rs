use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    ast::types::DataType,
    errors::errors::{CompileError, ErrorImpl},
    Location, MK_ERROR, MK_TOKEN,
};

use super::{
    cursor::SourceCursor,
    tokens::{Token, TokenKind, BOOLEAN_LOOKUP, RESERVED_LOOKUP},
};

const NEW_LINE: char = '\n';
const CITATION: char = '"';
const APOSTROPHE: char = '\'';
const BACKSLASH: char = '\\';
const WHITESPACE: [char; 5] = [' ', '\t', '\r', '\u{8}', '\u{c}'];
const ESCAPED_CHAR: [char; 8] = ['t', 'r', 'n', 'b', 'f', '\\', '\'', '"'];
const DELIMITER: [char; 11] = [',', ':', '[', ']', '{', '}', '(', ')', '.', ';', '@'];
const OPERATOR: [char; 12] = ['+', '-', '*', '/', '!', '%', '&', '|', '=', '<', '>', '^'];

/// Spaces per indentation level.
pub const INDENT_WIDTH: usize = 4;

lazy_static! {
    static ref HEXADECIMAL: Regex = Regex::new("^0[xX]([0-9a-fA-F]*)").unwrap();
    static ref DECIMAL: Regex =
        Regex::new("^[0-9]+(\\.[0-9]*)?([eE][+-]?[0-9]+)?([fF])?").unwrap();
}

/// States of the scanning machine. Each one names the function that runs
/// next; the driver loop in `tokenize` dispatches on it until a state
/// function returns `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    WhiteSpace,
    NewLine,
    LineComment,
    BlockComment,
    Number,
    Identifier,
    Operator,
    Delimiter,
    String,
    Char,
    EndOfFile,
}

pub struct Lexer {
    cursor: SourceCursor,
    tokens: Vec<Token>,
    file: Rc<String>,
    /// Where the token being scanned starts.
    location: Location,
    scope_level: usize,
    /// Whether the current line has produced a token yet.
    written_token: bool,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            cursor: SourceCursor::new(source),
            tokens: vec![],
            location: Location::new(Rc::clone(&file_name), 1, 1),
            file: file_name,
            scope_level: 0,
            written_token: false,
        }
    }

    fn step(&mut self, state: State) -> Result<Option<State>, CompileError> {
        match state {
            State::Start => self.lex_start(),
            State::WhiteSpace => self.handle_white_space(),
            State::NewLine => self.handle_new_line(),
            State::LineComment => self.handle_line_comment(),
            State::BlockComment => self.handle_block_comment(),
            State::Number => self.lex_number(),
            State::Identifier => self.lex_identifier(),
            State::Operator => self.lex_operator(),
            State::Delimiter => self.lex_delimiter(),
            State::String => self.lex_string(),
            State::Char => self.lex_char(),
            State::EndOfFile => self.handle_end_of_file(),
        }
    }

    fn lex_start(&mut self) -> Result<Option<State>, CompileError> {
        self.update_location();
        let c = self.cursor.peek();

        let state = if self.cursor.at_end() {
            State::EndOfFile
        } else if WHITESPACE.contains(&c) {
            State::WhiteSpace
        } else if c == NEW_LINE {
            State::NewLine
        } else if self.cursor.matches("//") {
            State::LineComment
        } else if self.cursor.matches("/*") {
            State::BlockComment
        } else if c.is_ascii_digit() {
            State::Number
        } else if c.is_ascii_alphabetic() || c == '_' {
            State::Identifier
        } else if OPERATOR.contains(&c) {
            State::Operator
        } else if DELIMITER.contains(&c) {
            State::Delimiter
        } else if c == CITATION {
            State::String
        } else if c == APOSTROPHE {
            State::Char
        } else {
            return self.error(ErrorImpl::SyntaxError { character: c });
        };

        Ok(Some(state))
    }

    /// Leading whitespace at column 1 sets the scope level of the line;
    /// whitespace anywhere else is dropped.
    fn handle_white_space(&mut self) -> Result<Option<State>, CompileError> {
        if self.cursor.column() == 1 {
            let mut spaces = 0;
            let mut tabs = 0;
            loop {
                if self.cursor.accept(' ') {
                    spaces += 1;
                } else if self.cursor.accept('\t') {
                    tabs += 1;
                } else {
                    break;
                }
            }

            let blank_line = self.cursor.check(NEW_LINE)
                || self.cursor.matches("\r\n")
                || self.cursor.at_end()
                || self.cursor.matches("//");
            if !blank_line {
                if spaces > 0 && tabs > 0 {
                    return self.error(ErrorImpl::MixedIndentation);
                }
                if spaces > 0 {
                    if spaces % INDENT_WIDTH != 0 {
                        return self.error(ErrorImpl::BadIndentation { spaces });
                    }
                    self.scope_level = spaces / INDENT_WIDTH;
                } else if tabs > 0 {
                    self.scope_level = tabs;
                }
            }
        }

        while self.cursor.accept_if(|c| WHITESPACE.contains(&c)) {}
        self.cursor.ignore();
        Ok(Some(State::Start))
    }

    /// A newline ends the statement only if the line produced a token, so
    /// blank and comment-only lines are invisible to the parser.
    fn handle_new_line(&mut self) -> Result<Option<State>, CompileError> {
        self.update_location();
        if self.cursor.accept(NEW_LINE) {
            if self.written_token {
                self.new_token(TokenKind::EndOfStatement);
            } else {
                self.cursor.ignore();
            }
            self.written_token = false;
            self.cursor.new_line();
            self.scope_level = 0;
        }
        Ok(Some(State::Start))
    }

    fn handle_line_comment(&mut self) -> Result<Option<State>, CompileError> {
        while self.cursor.not(&[NEW_LINE]) {}
        self.cursor.ignore();
        Ok(Some(State::Start))
    }

    fn handle_block_comment(&mut self) -> Result<Option<State>, CompileError> {
        let start = self.location.clone();
        let mut depth = 0;

        loop {
            while self.cursor.not(&['/', '*', NEW_LINE]) {}

            if self.cursor.at_end() {
                return MK_ERROR!(ErrorImpl::UnclosedComment, start);
            } else if self.cursor.check(NEW_LINE) {
                self.cursor.ignore();
                self.handle_new_line()?;
            } else if self.cursor.matches("*/") {
                self.cursor.advance_n(2);
                depth -= 1;
                if depth == 0 {
                    break;
                }
            } else if self.cursor.matches("/*") {
                self.cursor.advance_n(2);
                depth += 1;
            } else {
                self.cursor.next();
            }
        }

        self.cursor.ignore();
        Ok(Some(State::Start))
    }

    fn handle_end_of_file(&mut self) -> Result<Option<State>, CompileError> {
        if self.written_token {
            self.new_token(TokenKind::EndOfStatement);
        }
        self.scope_level = 0;
        self.new_token(TokenKind::EOF);
        Ok(None)
    }

    /// Decimal integers, floating point numbers with optional fraction,
    /// exponent and `f` suffix, and `0x` hexadecimal integers. Hexadecimal
    /// literals are stored as their decimal text.
    fn lex_number(&mut self) -> Result<Option<State>, CompileError> {
        if let Some(captures) = HEXADECIMAL.captures(self.cursor.remainder()) {
            let length = captures[0].len();
            let digits = captures[1].to_string();
            if digits.is_empty() {
                return self.error(ErrorImpl::ExpectedHexDigit);
            }
            self.cursor.advance_n(length);
            self.reject_trailing_alphabetic()?;

            let value = match i32::from_str_radix(&digits, 16) {
                Ok(value) => value.to_string(),
                Err(_) => {
                    return self.error(ErrorImpl::BadHexadecimal {
                        literal: self.cursor.lexeme().to_string(),
                    })
                }
            };
            self.add_token(MK_TOKEN!(
                TokenKind::Literal,
                value,
                self.location.clone(),
                self.scope_level,
                data_type: Some(DataType::Int)
            ));
            return Ok(Some(State::Start));
        }

        let Some(captures) = DECIMAL.captures(self.cursor.remainder()) else {
            return self.error(ErrorImpl::ExpectedDigit);
        };
        let length = captures[0].len();
        let data_type = if captures.get(3).is_some() {
            DataType::Float
        } else if captures.get(1).is_some() || captures.get(2).is_some() {
            DataType::Double
        } else {
            DataType::Int
        };

        self.cursor.advance_n(length);
        self.reject_trailing_alphabetic()?;
        self.add_literal(data_type);
        Ok(Some(State::Start))
    }

    fn reject_trailing_alphabetic(&self) -> Result<(), CompileError> {
        if self.cursor.peek().is_alphabetic() {
            return self.error(ErrorImpl::BadNumberSyntax);
        }
        Ok(())
    }

    fn lex_identifier(&mut self) -> Result<Option<State>, CompileError> {
        while self.cursor.accept_if(|c| c.is_ascii_alphanumeric() || c == '_') {}

        let lexeme = self.cursor.lexeme();
        if let Some(keyword) = RESERVED_LOOKUP.get(lexeme) {
            let keyword = *keyword;
            self.add_token(MK_TOKEN!(
                TokenKind::Keyword,
                lexeme.to_string(),
                self.location.clone(),
                self.scope_level,
                keyword: Some(keyword)
            ));
        } else if BOOLEAN_LOOKUP.contains_key(lexeme) {
            self.add_literal(DataType::Boolean);
        } else {
            self.new_token(TokenKind::Identifier);
        }
        Ok(Some(State::Start))
    }

    /// Operators are maximal runs of operator characters. A run never
    /// swallows the start of a comment.
    fn lex_operator(&mut self) -> Result<Option<State>, CompileError> {
        loop {
            if self.cursor.matches("//") || self.cursor.matches("/*") {
                break;
            }
            if !self.cursor.accept_if(|c| OPERATOR.contains(&c)) {
                break;
            }
        }
        self.new_token(TokenKind::Operator);
        Ok(Some(State::Start))
    }

    fn lex_delimiter(&mut self) -> Result<Option<State>, CompileError> {
        self.cursor.next();
        self.new_token(TokenKind::Delimiter);
        Ok(Some(State::Start))
    }

    /// The token keeps the raw text between the quotes; escapes are resolved
    /// when the literal node is built.
    fn lex_string(&mut self) -> Result<Option<State>, CompileError> {
        self.cursor.skip();
        loop {
            while self.cursor.not(&[BACKSLASH, CITATION, NEW_LINE]) {}

            if self.cursor.at_end() || self.cursor.check(NEW_LINE) {
                return self.error(ErrorImpl::IllegalLineEnd { literal: "string" });
            }
            if self.cursor.accept(BACKSLASH) {
                if self.cursor.at_end() || self.cursor.check(NEW_LINE) {
                    return self.error(ErrorImpl::IllegalLineEnd { literal: "string" });
                }
                self.cursor.next();
                continue;
            }
            break;
        }

        self.add_literal(DataType::String);
        self.cursor.skip();
        Ok(Some(State::Start))
    }

    /// A char literal must hold exactly one character once escapes are
    /// resolved: a plain character, one of the escape letters, or a decimal
    /// escape of up to three digits.
    fn lex_char(&mut self) -> Result<Option<State>, CompileError> {
        self.cursor.skip();
        let mut length = 0;

        loop {
            if self.cursor.at_end() || self.cursor.check(NEW_LINE) {
                return self.error(ErrorImpl::IllegalLineEnd { literal: "char" });
            }
            if self.cursor.check(APOSTROPHE) {
                break;
            }

            if self.cursor.accept(BACKSLASH) {
                if self.cursor.accept_if(|c| ESCAPED_CHAR.contains(&c)) {
                    length += 1;
                } else if self.cursor.check_digit() {
                    let mut digits = String::new();
                    while digits.len() < 3 && self.cursor.check_digit() {
                        digits.push(self.cursor.next());
                    }
                    if digits.parse::<u8>().is_err() {
                        return self.error(ErrorImpl::IllegalEscapeCode);
                    }
                    length += 1;
                } else {
                    return self.error(ErrorImpl::IllegalEscapeCode);
                }
            } else {
                self.cursor.next();
                length += 1;
            }
        }

        if length != 1 {
            return self.error(ErrorImpl::IllegalCharLength);
        }
        self.add_literal(DataType::Char);
        self.cursor.skip();
        Ok(Some(State::Start))
    }

    fn update_location(&mut self) {
        self.location = Location::new(
            Rc::clone(&self.file),
            self.cursor.line(),
            self.cursor.column(),
        );
    }

    fn error<T>(&self, error: ErrorImpl) -> Result<T, CompileError> {
        MK_ERROR!(error, self.location.clone())
    }

    fn add_token(&mut self, token: Token) {
        self.tokens.push(token);
        self.cursor.ignore();
        self.written_token = true;
    }

    fn new_token(&mut self, kind: TokenKind) {
        self.add_token(MK_TOKEN!(
            kind,
            self.cursor.lexeme().to_string(),
            self.location.clone(),
            self.scope_level
        ));
    }

    fn add_literal(&mut self, data_type: DataType) {
        self.add_token(MK_TOKEN!(
            TokenKind::Literal,
            self.cursor.lexeme().to_string(),
            self.location.clone(),
            self.scope_level,
            data_type: Some(data_type)
        ));
    }
}

/// Resolves the escape sequences of a string or char literal body.
///
/// Decimal escapes (`\65`) are only honoured when `decimal` is set, which
/// the parser does for char literals. Unknown escapes are kept verbatim.
pub fn resolve_escapes(raw: &str, decimal: bool) -> String {
    let mut result = String::new();
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != BACKSLASH {
            result.push(ch);
            continue;
        }

        match chars.peek().copied() {
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some('n') => result.push('\n'),
            Some('b') => result.push('\u{8}'),
            Some('f') => result.push('\u{c}'),
            Some(c @ ('\\' | '\'' | '"')) => result.push(c),
            Some(c) if decimal && c.is_ascii_digit() => {
                let mut digits = String::new();
                while let Some(digit) = chars.peek().copied() {
                    if digits.len() == 3 || !digit.is_ascii_digit() {
                        break;
                    }
                    digits.push(digit);
                    chars.next();
                }
                match digits.parse::<u8>() {
                    Ok(code) => result.push(code as char),
                    Err(_) => {
                        result.push(BACKSLASH);
                        result.push_str(&digits);
                    }
                }
                continue;
            }
            Some(c) => {
                result.push(BACKSLASH);
                result.push(c);
            }
            None => {
                result.push(BACKSLASH);
                continue;
            }
        }
        chars.next();
    }

    result
}

/// Splits `source` into tokens, ending with an `EOF` token.
///
/// Stops at the first malformed construct.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, CompileError> {
    let mut lex = Lexer::new(source, file);

    let mut state = Some(State::Start);
    while let Some(current) = state {
        state = lex.step(current)?;
    }

    Ok(lex.tokens)
}
