#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::{ast::statements::Scope, errors::errors::CompileError};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod symbols;
pub mod type_checker;

extern crate regex;

/// A point in a source file. Lines and columns start at 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub file: Rc<String>,
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub fn new(file: Rc<String>, line: u32, column: u32) -> Self {
        Location { file, line, column }
    }

    pub fn null() -> Self {
        Location::new(Rc::new(String::from("<null>")), 0, 0)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Tokenizes and parses `source`, returning the type checked and folded
/// top level scope.
pub fn compile(file: &str, source: &str) -> Result<Scope, CompileError> {
    let tokens = lexer::lexer::tokenize(source.to_string(), Some(file.to_string()))?;
    parser::parser::parse(tokens)
}

/// Returns the text of line `line` (1-based) without its line break.
pub fn get_line(source: &str, line: u32) -> Option<&str> {
    let index = (line as usize).checked_sub(1)?;
    source
        .split('\n')
        .nth(index)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

/// Renders a diagnostic with the offending line and a caret under the
/// reported column:
///
/// ```text
/// test.ic:2:9 type mismatch
///   |
/// 2 | y := x + "a"
///   | --------^
/// ```
pub fn display_error(error: &CompileError, source: &str) -> String {
    let location = error.get_location();
    let mut output = format!("{}\n", error);

    let Some(line_text) = get_line(source, location.line) else {
        return output;
    };

    let line_string = location.line.to_string();
    let padding = line_string.len() + 2;
    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);

    output.push_str(&format!("{:>padding$}\n", "|"));
    output.push_str(&format!(
        "{} | {}\n",
        line_string,
        line_text_removed.trim_end()
    ));

    let column = (location.column as usize).max(1);
    let arrows = column.saturating_sub(removed_whitespace).max(1);
    output.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    output
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);
    (trimmed, string.chars().count() - trimmed.chars().count())
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{CompileError, ErrorImpl},
        Location,
    };

    #[test]
    fn test_get_line() {
        let source = "first\nsecond\r\n\nfourth";
        assert_eq!(super::get_line(source, 1), Some("first"));
        assert_eq!(super::get_line(source, 2), Some("second"));
        assert_eq!(super::get_line(source, 3), Some(""));
        assert_eq!(super::get_line(source, 4), Some("fourth"));
        assert_eq!(super::get_line(source, 5), None);
        assert_eq!(super::get_line(source, 0), None);
    }

    #[test]
    fn test_display_error() {
        let source = "x := 1\n    y := x + \"a\"\n";
        let error = CompileError::new(
            ErrorImpl::TypeMismatch,
            Location::new(Rc::new("test.ic".to_string()), 2, 12),
        );

        let rendered = super::display_error(&error, source);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "test.ic:2:12 type mismatch");
        assert_eq!(lines[1], "  |");
        assert_eq!(lines[2], "2 | y := x + \"a\"");
        assert_eq!(lines[3], "  | -------^");
    }

    #[test]
    fn test_display_error_without_source_line() {
        let error = CompileError::new(ErrorImpl::UnexpectedEndOfFile, Location::null());
        assert_eq!(
            super::display_error(&error, "x := 1"),
            "<null>:0:0 unexpected end of file\n"
        );
    }
}
