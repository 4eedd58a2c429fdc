//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords, identifiers and boolean literals
//! - Numeric literals (integers, doubles, floats, hexadecimal)
//! - String and char literals with escape sequences
//! - Nested comments
//! - Indentation and end of statement handling
//! - Error cases

use crate::{ast::types::DataType, errors::errors::CompileError, get_line};

use super::{
    lexer::{resolve_escapes, tokenize},
    tokens::{Keyword, Token, TokenKind},
};

fn lex(source: &str) -> Vec<Token> {
    tokenize(source.to_string(), Some("test.ic".to_string())).unwrap()
}

fn lex_error(source: &str) -> CompileError {
    tokenize(source.to_string(), Some("test.ic".to_string())).unwrap_err()
}

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|token| token.kind).collect()
}

#[test]
fn test_tokenize_keywords_and_identifiers() {
    let tokens = lex("if else while for foo _bar x1");

    assert_eq!(tokens[0].keyword, Some(Keyword::If));
    assert_eq!(tokens[1].keyword, Some(Keyword::Else));
    assert_eq!(tokens[2].keyword, Some(Keyword::While));
    assert_eq!(tokens[3].keyword, Some(Keyword::For));
    for token in &tokens[..4] {
        assert_eq!(token.kind, TokenKind::Keyword);
    }

    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "foo");
    assert_eq!(tokens[5].value, "_bar");
    assert_eq!(tokens[6].value, "x1");
    assert_eq!(tokens[6].keyword, None);
    assert_eq!(tokens[7].kind, TokenKind::EndOfStatement);
    assert_eq!(tokens[8].kind, TokenKind::EOF);
    assert_eq!(tokens.len(), 9);
}

#[test]
fn test_keywords_are_case_sensitive() {
    let tokens = lex("If WHILE");
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
}

#[test]
fn test_tokenize_booleans() {
    let tokens = lex("true false truth");

    assert_eq!(tokens[0].kind, TokenKind::Literal);
    assert_eq!(tokens[0].data_type, Some(DataType::Boolean));
    assert_eq!(tokens[1].data_type, Some(DataType::Boolean));
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = lex("42 3.14 2.5f 1e3 1.5E-2 7F 0x1F 0XfF");

    let expected = [
        ("42", DataType::Int),
        ("3.14", DataType::Double),
        ("2.5f", DataType::Float),
        ("1e3", DataType::Double),
        ("1.5E-2", DataType::Double),
        ("7F", DataType::Float),
        ("31", DataType::Int),
        ("255", DataType::Int),
    ];
    for (token, (value, data_type)) in tokens.iter().zip(expected) {
        assert_eq!(token.kind, TokenKind::Literal);
        assert_eq!(token.value, value);
        assert_eq!(token.data_type, Some(data_type));
    }
}

#[test]
fn test_number_followed_by_letter_fails() {
    assert_eq!(lex_error("12abc").get_error_name(), "BadNumberSyntax");
    assert_eq!(lex_error("1e").get_error_name(), "BadNumberSyntax");
    assert_eq!(lex_error("0x1g").get_error_name(), "BadNumberSyntax");
}

#[test]
fn test_bad_hexadecimal() {
    assert_eq!(lex_error("0x").get_error_name(), "ExpectedHexDigit");
    assert_eq!(lex_error("0xZZ").get_error_name(), "ExpectedHexDigit");
    assert_eq!(lex_error("0xFFFFFFFFF").get_error_name(), "BadHexadecimal");
}

#[test]
fn test_tokenize_strings() {
    let tokens = lex(r#"s := "a\"b" + "plain""#);

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert!(tokens[1].is_delimiter(":"));
    assert!(tokens[2].is_operator("="));
    assert_eq!(tokens[3].kind, TokenKind::Literal);
    assert_eq!(tokens[3].data_type, Some(DataType::String));
    assert_eq!(tokens[3].value, r#"a\"b"#);
    assert_eq!(tokens[3].location.column, 6);
    assert!(tokens[4].is_operator("+"));
    assert_eq!(tokens[5].value, "plain");
}

#[test]
fn test_string_line_end_fails() {
    assert_eq!(lex_error("\"abc").get_error_name(), "IllegalLineEnd");
    assert_eq!(lex_error("\"ab\ncd\"").get_error_name(), "IllegalLineEnd");
    assert_eq!(lex_error("\"ab\\").get_error_name(), "IllegalLineEnd");
}

#[test]
fn test_tokenize_chars() {
    let tokens = lex(r"'a' '\n' '\65' '\''");

    let expected = ["a", r"\n", r"\65", r"\'"];
    for (token, value) in tokens.iter().zip(expected) {
        assert_eq!(token.kind, TokenKind::Literal);
        assert_eq!(token.data_type, Some(DataType::Char));
        assert_eq!(token.value, value);
    }
}

#[test]
fn test_char_length_counts_resolved_characters() {
    // Three raw digits make one character.
    assert_eq!(lex(r"'\255'")[0].value, r"\255");
    // A fourth digit is a second character.
    assert_eq!(lex_error(r"'\1234'").get_error_name(), "IllegalCharLength");
    assert_eq!(lex_error("'ab'").get_error_name(), "IllegalCharLength");
    assert_eq!(lex_error("''").get_error_name(), "IllegalCharLength");
}

#[test]
fn test_char_errors() {
    assert_eq!(lex_error(r"'\q'").get_error_name(), "IllegalEscapeCode");
    assert_eq!(lex_error(r"'\300'").get_error_name(), "IllegalEscapeCode");
    assert_eq!(lex_error("'a").get_error_name(), "IllegalLineEnd");
}

#[test]
fn test_resolve_escapes() {
    assert_eq!(resolve_escapes(r#"a\tb\""#, false), "a\tb\"");
    assert_eq!(resolve_escapes(r"\n\r\b\f\\", false), "\n\r\u{8}\u{c}\\");
    assert_eq!(resolve_escapes(r"\65", true), "A");
    assert_eq!(resolve_escapes(r"\65", false), r"\65");
    assert_eq!(resolve_escapes(r"\q", false), r"\q");
}

#[test]
fn test_nested_block_comment() {
    let tokens = lex("/* a /* b */ c */ 42");

    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::Literal, TokenKind::EndOfStatement, TokenKind::EOF]
    );
    assert_eq!(tokens[0].value, "42");
}

#[test]
fn test_block_comment_spanning_lines() {
    let tokens = lex("/* a\n b */ x");

    assert_eq!(tokens[0].value, "x");
    assert_eq!(tokens[0].location.line, 2);
    assert_eq!(tokens[0].location.column, 7);
}

#[test]
fn test_unclosed_comment() {
    let error = lex_error("x\n/* a /* b */");
    assert_eq!(error.get_error_name(), "UnclosedComment");
    assert_eq!(error.get_location().line, 2);
    assert_eq!(error.get_location().column, 1);
}

#[test]
fn test_line_comments() {
    let tokens = lex("x // comment\n// only a comment\ny");

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Identifier,
            TokenKind::EndOfStatement,
            TokenKind::Identifier,
            TokenKind::EndOfStatement,
            TokenKind::EOF
        ]
    );
}

#[test]
fn test_operator_run_stops_at_comment() {
    let tokens = lex("a+//c");

    assert!(tokens[1].is_operator("+"));
    assert_eq!(tokens[2].kind, TokenKind::EndOfStatement);
    assert_eq!(tokens.len(), 4);
}

#[test]
fn test_operators_are_maximal_runs() {
    let tokens = lex("a <= b == c++ =-1");

    assert!(tokens[1].is_operator("<="));
    assert!(tokens[3].is_operator("=="));
    assert!(tokens[5].is_operator("++"));
    assert!(tokens[6].is_operator("=-"));
}

#[test]
fn test_delimiters() {
    let tokens = lex("f(a, b)[0]");
    let values: Vec<&str> = tokens.iter().map(|token| token.value.as_str()).collect();

    assert_eq!(&values[..9], &["f", "(", "a", ",", "b", ")", "[", "0", "]"]);
    assert_eq!(tokens[1].kind, TokenKind::Delimiter);
    assert_eq!(tokens[3].kind, TokenKind::Delimiter);
}

#[test]
fn test_indentation_levels() {
    let tokens = lex("a\n    b\n        c\n\td");
    let levels: Vec<(TokenKind, usize)> = tokens
        .iter()
        .map(|token| (token.kind, token.scope_level))
        .collect();

    assert_eq!(
        levels,
        vec![
            (TokenKind::Identifier, 0),
            (TokenKind::EndOfStatement, 0),
            (TokenKind::Identifier, 1),
            (TokenKind::EndOfStatement, 1),
            (TokenKind::Identifier, 2),
            (TokenKind::EndOfStatement, 2),
            (TokenKind::Identifier, 1),
            (TokenKind::EndOfStatement, 1),
            (TokenKind::EOF, 0),
        ]
    );
    assert_eq!(tokens[2].location.column, 5);
}

#[test]
fn test_every_token_on_a_line_shares_its_level() {
    let tokens = lex("    x := y + 1   // trailing\nz");

    for token in tokens.iter().take_while(|token| token.location.line == 1) {
        assert_eq!(token.scope_level, 1);
    }
    assert_eq!(tokens.last().unwrap().scope_level, 0);
}

#[test]
fn test_mixed_indentation() {
    let error = lex_error("a\n  \tb");
    assert_eq!(error.get_error_name(), "MixedIndentation");
    assert_eq!(error.get_location().line, 2);
    assert_eq!(error.get_message(), "mixed tabs and spaces");
}

#[test]
fn test_indentation_not_multiple_of_four() {
    assert_eq!(lex_error("a\n   b").get_error_name(), "BadIndentation");
}

#[test]
fn test_blank_and_comment_lines_ignore_indentation() {
    let tokens = lex("a\n   \n  // note\n\t  \nb");

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Identifier,
            TokenKind::EndOfStatement,
            TokenKind::Identifier,
            TokenKind::EndOfStatement,
            TokenKind::EOF
        ]
    );
    assert_eq!(tokens[2].scope_level, 0);
}

#[test]
fn test_blank_lines_with_carriage_returns() {
    let tokens = lex("x := 1\r\n  \r\ny := 2\r\n");

    assert_eq!(tokens.len(), 11);
    assert_eq!(tokens[5].value, "y");
    assert_eq!(tokens[5].location.line, 3);
    assert_eq!(tokens[5].scope_level, 0);
    assert_eq!(lex("x := 1\n  \ny := 2\n").len(), 11);
}

#[test]
fn test_consecutive_newlines_collapse() {
    let tokens = lex("a\n\n\nb\n\n");

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Identifier,
            TokenKind::EndOfStatement,
            TokenKind::Identifier,
            TokenKind::EndOfStatement,
            TokenKind::EOF
        ]
    );
}

#[test]
fn test_empty_source() {
    let tokens = lex("");
    assert_eq!(kinds(&tokens), vec![TokenKind::EOF]);
}

#[test]
fn test_syntax_error_location() {
    let error = lex_error("x := #");

    assert_eq!(error.get_error_name(), "SyntaxError");
    assert_eq!(error.get_location().line, 1);
    assert_eq!(error.get_location().column, 6);
    assert_eq!(error.to_string(), "test.ic:1:6 syntax error, unexpected character '#'");
}

#[test]
fn test_token_text_matches_source() {
    let source = "count := count + 42 * (y - 1)\n    if flag\n        z := z <= 0x10";
    let tokens = lex(source);

    for token in &tokens {
        if token.ends_statement() || token.value == "16" {
            continue;
        }
        let line = get_line(source, token.location.line).unwrap();
        let text: String = line
            .chars()
            .skip(token.location.column as usize - 1)
            .take(token.value.chars().count())
            .collect();
        assert_eq!(text, token.value);
    }
}

#[test]
fn test_token_display() {
    let tokens = lex("    x");

    assert_eq!(tokens[0].to_string(), "(1:5) [1] IDENTIFIER 'x'");
    assert_eq!(tokens[1].to_string(), "(1:6) [1] END_OF_STATEMENT '\\n'");
    assert_eq!(tokens[2].to_string(), "(1:6) [0] EOF ''");
}

#[test]
fn test_default_file_name() {
    let tokens = tokenize("x".to_string(), None).unwrap();
    assert_eq!(tokens[0].location.file.as_str(), "shell");
}
