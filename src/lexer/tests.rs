//! Unit tests for the lexer module.
//!
//! Covers punctuation, string and number literals, keywords, position
//! tracking and lexical faults.

use crate::{errors::errors::ErrorImpl, Position};

use super::{
    lexer::{tokenize, tokenize_all, Lexer},
    tokens::TokenKind,
};

#[test]
fn test_tokenize_punctuation() {
    let source = "[ ] { } , :".to_string();
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::OpenBracket);
    assert_eq!(tokens[1].kind, TokenKind::CloseBracket);
    assert_eq!(tokens[2].kind, TokenKind::OpenCurly);
    assert_eq!(tokens[3].kind, TokenKind::CloseCurly);
    assert_eq!(tokens[4].kind, TokenKind::Comma);
    assert_eq!(tokens[5].kind, TokenKind::Colon);
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_object_sequence() {
    let source = r#"{"a":1,"b":[1,2,3]}"#.to_string();
    let tokens = tokenize(source).unwrap();

    let expected = [
        (TokenKind::OpenCurly, "{"),
        (TokenKind::String, "\"a\""),
        (TokenKind::Colon, ":"),
        (TokenKind::Number, "1"),
        (TokenKind::Comma, ","),
        (TokenKind::String, "\"b\""),
        (TokenKind::Colon, ":"),
        (TokenKind::OpenBracket, "["),
        (TokenKind::Number, "1"),
        (TokenKind::Comma, ","),
        (TokenKind::Number, "2"),
        (TokenKind::Comma, ","),
        (TokenKind::Number, "3"),
        (TokenKind::CloseBracket, "]"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::EOF, ""),
    ];

    assert_eq!(tokens.len(), expected.len());
    for (token, (kind, value)) in tokens.iter().zip(expected.iter()) {
        assert_eq!(token.kind, *kind);
        assert_eq!(token.value, *value);
    }
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 3.14 0 1e10 2.5E-3 7e+2".to_string();
    let tokens = tokenize(source).unwrap();

    let values: Vec<&str> = tokens.iter().map(|token| token.value.as_str()).collect();
    assert_eq!(values, vec!["42", "3.14", "0", "1e10", "2.5E-3", "7e+2", ""]);
    assert!(tokens[..6].iter().all(|token| token.kind == TokenKind::Number));
}

#[test]
fn test_number_without_fraction_digits_stops_before_dot() {
    let mut lexer = Lexer::new("1.".to_string());

    let token = lexer.next_token().unwrap();
    assert_eq!(token.kind, TokenKind::Number);
    assert_eq!(token.value, "1");

    let error = lexer.next_token().unwrap_err();
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnrecognisedToken {
            token: ".".to_string()
        }
    );
    assert_eq!(error.get_position(), &Position::new(1, 2));
}

#[test]
fn test_negative_number_is_a_fault() {
    let result = tokenize("-1".to_string());
    assert!(result.is_err());
}

#[test]
fn test_tokenize_strings() {
    let source = r#""hello" "multiple words" """#.to_string();
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "\"hello\"");
    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[1].value, "\"multiple words\"");
    assert_eq!(tokens[2].kind, TokenKind::String);
    assert_eq!(tokens[2].value, "\"\"");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_escaped_quote_in_string() {
    let source = r#""quote\"test" "back\\slash""#.to_string();
    let tokens = tokenize(source).unwrap();

    // Escapes are kept verbatim in the lexeme.
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, r#""quote\"test""#);
    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[1].value, r#""back\\slash""#);
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_unterminated_string_is_a_fault() {
    let error = tokenize("[\"abc".to_string()).unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnrecognisedToken {
            token: "\"".to_string()
        }
    );
    assert_eq!(error.get_position(), &Position::new(1, 2));
}

#[test]
fn test_tokenize_keywords() {
    let source = "true TRUE false FALSE null NULL".to_string();
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::True);
    assert_eq!(tokens[1].kind, TokenKind::True);
    assert_eq!(tokens[2].kind, TokenKind::False);
    assert_eq!(tokens[3].kind, TokenKind::False);
    assert_eq!(tokens[4].kind, TokenKind::Null);
    assert_eq!(tokens[5].kind, TokenKind::Null);
    assert_eq!(tokens[5].value, "NULL");
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_mixed_case_keyword_is_a_fault() {
    let error = tokenize("True".to_string()).unwrap_err();

    assert!(error.is_lexical());
    assert_eq!(error.get_position(), &Position::new(1, 1));
}

#[test]
fn test_first_pattern_wins_over_longest_match() {
    // `true` matches, then `x` is left over.
    let (tokens, fault) = tokenize_all("truex".to_string());

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::True);
    assert_eq!(fault.unwrap().get_position(), &Position::new(1, 5));
}

#[test]
fn test_whitespace_only_input_yields_eof() {
    for source in ["", " ", "\t\r\n  \n"] {
        let mut lexer = Lexer::new(source.to_string());
        let token = lexer.next_token().unwrap();

        assert_eq!(token.kind, TokenKind::EOF);
        assert_eq!(token.value, "");
    }
}

#[test]
fn test_eof_position_is_final_line_and_column() {
    let tokens = tokenize("[]\n  ".to_string()).unwrap();

    assert_eq!(tokens[2].kind, TokenKind::EOF);
    assert_eq!(tokens[2].position, Position::new(2, 3));
}

#[test]
fn test_eof_is_repeated() {
    let mut lexer = Lexer::new("[".to_string());

    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::OpenBracket);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EOF);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EOF);
}

#[test]
fn test_token_positions() {
    let source = "{\n  \"a\":1\n}".to_string();
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens[0].position, Position::new(1, 1));
    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[1].position, Position::new(2, 3));
    assert_eq!(tokens[2].position, Position::new(2, 6));
    assert_eq!(tokens[3].position, Position::new(2, 7));
    assert_eq!(tokens[4].position, Position::new(3, 1));
}

#[test]
fn test_columns_count_characters() {
    let source = "{\"ñandú\": 1}".to_string();
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens[1].value, "\"ñandú\"");
    assert_eq!(tokens[2].position, Position::new(1, 9));
    assert_eq!(tokens[3].position, Position::new(1, 11));
}

#[test]
fn test_newline_inside_string_moves_line() {
    let source = "[\"a\nbc\" ,]".to_string();
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[1].position, Position::new(1, 2));
    assert_eq!(tokens[2].kind, TokenKind::Comma);
    assert_eq!(tokens[2].position, Position::new(2, 5));
}

#[test]
fn test_unrecognized_character() {
    let source = "{\n  \"a\": &1\n}".to_string();
    let (tokens, fault) = tokenize_all(source);
    let fault = fault.unwrap();

    assert_eq!(tokens.len(), 3);
    assert!(tokens.iter().all(|token| token.kind != TokenKind::EOF));
    assert_eq!(
        fault.get_kind(),
        &ErrorImpl::UnrecognisedToken {
            token: "&".to_string()
        }
    );
    assert_eq!(fault.get_position(), &Position::new(2, 8));
    assert_eq!(fault.to_string(), "[Line 2 Col 8] unexpected character \"&\"");
}

#[test]
fn test_fault_does_not_advance() {
    let mut lexer = Lexer::new("@".to_string());

    let first = lexer.next_token().unwrap_err();
    let second = lexer.next_token().unwrap_err();
    assert_eq!(first, second);
}

#[test]
fn test_token_debug_line() {
    let tokens = tokenize("{\"k\": null}".to_string()).unwrap();

    assert_eq!(tokens[0].debug(), "OpenCurly {");
    assert_eq!(tokens[1].debug(), "String \"k\"");
    assert_eq!(tokens[3].debug(), "Null null");
    assert_eq!(tokens[1].to_string(), "String(\"\\\"k\\\"\")@1:2");
}
