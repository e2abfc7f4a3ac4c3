//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric and string literals
//! - Operators and the first-match rule order
//! - Comments and whitespace
//! - Error cases

use regex::Regex;

use crate::{errors::errors::ErrorImpl, Position, MK_RULE};

use super::{
    lexer::{tokenize, Lexer, TokenSource},
    rules::Rule,
    tokens::TokenKind,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).unwrap().iter().map(|t| t.kind).collect()
}

#[test]
fn test_tokenize_keywords() {
    let source = "let def return if while do class this extends super new for else true false null";
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Def);
    assert_eq!(tokens[2].kind, TokenKind::Return);
    assert_eq!(tokens[3].kind, TokenKind::If);
    assert_eq!(tokens[4].kind, TokenKind::While);
    assert_eq!(tokens[5].kind, TokenKind::Do);
    assert_eq!(tokens[6].kind, TokenKind::Class);
    assert_eq!(tokens[7].kind, TokenKind::This);
    assert_eq!(tokens[8].kind, TokenKind::Extends);
    assert_eq!(tokens[9].kind, TokenKind::Super);
    assert_eq!(tokens[10].kind, TokenKind::New);
    assert_eq!(tokens[11].kind, TokenKind::For);
    assert_eq!(tokens[12].kind, TokenKind::Else);
    assert_eq!(tokens[13].kind, TokenKind::True);
    assert_eq!(tokens[14].kind, TokenKind::False);
    assert_eq!(tokens[15].kind, TokenKind::Null);
    assert_eq!(tokens[16].kind, TokenKind::EOF);
    assert_eq!(tokens.len(), 17);
}

#[test]
fn test_keyword_prefix_is_identifier() {
    let tokens = tokenize("letter done classy iffy").unwrap();

    for token in &tokens[..4] {
        assert_eq!(token.kind, TokenKind::Identifier);
    }
    assert_eq!(tokens[0].value, "letter");
    assert_eq!(tokens[1].value, "done");
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar baz_123 _underscore CamelCase").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[2].value, "baz_123");
    assert_eq!(tokens[3].value, "_underscore");
    assert_eq!(tokens[4].value, "CamelCase");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 0 1234567").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].value, "0");
    assert_eq!(tokens[2].value, "1234567");
}

#[test]
fn test_number_wins_over_identifier() {
    // Digits first, so `42abc` splits in two
    let tokens = tokenize("42abc").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "abc");
}

#[test]
fn test_tokenize_strings_keep_delimiters() {
    let tokens = tokenize(r#""hello" 'world' "two words""#).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "\"hello\"");
    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[1].value, "'world'");
    assert_eq!(tokens[2].value, "\"two words\"");
}

#[test]
fn test_strings_have_no_escapes() {
    let tokens = tokenize(r#""a\n" 'it"s'"#).unwrap();

    assert_eq!(tokens[0].value, r#""a\n""#);
    assert_eq!(tokens[1].value, r#"'it"s'"#);
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("; { } ( ) , . [ ]"),
        vec![
            TokenKind::Semicolon,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::Comma,
            TokenKind::Dot,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokenize("== != = += -= *= /= ! && || > < >= <= + - * /").unwrap();
    let pairs: Vec<(TokenKind, &str)> = tokens.iter().map(|t| (t.kind, t.value.as_str())).collect();

    assert_eq!(
        pairs,
        vec![
            (TokenKind::EqualityOp, "=="),
            (TokenKind::EqualityOp, "!="),
            (TokenKind::SimpleAssign, "="),
            (TokenKind::ComplexAssign, "+="),
            (TokenKind::ComplexAssign, "-="),
            (TokenKind::ComplexAssign, "*="),
            (TokenKind::ComplexAssign, "/="),
            (TokenKind::Not, "!"),
            (TokenKind::And, "&&"),
            (TokenKind::Or, "||"),
            (TokenKind::RelationalOp, ">"),
            (TokenKind::RelationalOp, "<"),
            (TokenKind::RelationalOp, ">="),
            (TokenKind::RelationalOp, "<="),
            (TokenKind::AdditiveOp, "+"),
            (TokenKind::AdditiveOp, "-"),
            (TokenKind::MultiplicativeOp, "*"),
            (TokenKind::MultiplicativeOp, "/"),
            (TokenKind::EOF, ""),
        ]
    );
}

#[test]
fn test_operators_without_spaces() {
    assert_eq!(
        kinds("x+=1;y==2"),
        vec![
            TokenKind::Identifier,
            TokenKind::ComplexAssign,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::Identifier,
            TokenKind::EqualityOp,
            TokenKind::Number,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_comments_are_skipped() {
    let source = "// line comment\n42 /* block\n comment */ ; /**/ x // trailing";

    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::Identifier,
            TokenKind::EOF
        ]
    );
}

#[test]
fn test_block_comment_is_lazy() {
    // The first `*/` closes the comment
    let tokens = tokenize("/* a */ x /* b */").unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].value, "x");
}

#[test]
fn test_eof_is_sticky() {
    let mut lexer = Lexer::new("x");

    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Identifier);
    for _ in 0..3 {
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EOF);
    }
}

#[test]
fn test_empty_and_blank_sources() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
    assert_eq!(kinds("  \n\t // nothing"), vec![TokenKind::EOF]);
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("let  xy = 1;").unwrap();

    assert_eq!(tokens[1].span.start, Position(5));
    assert_eq!(tokens[1].span.end, Position(7));
    assert_eq!(tokens[5].span.start, Position(12));
}

#[test]
fn test_unrecognised_character() {
    let error = tokenize("let x = 1 @ 2;").unwrap_err();

    assert_eq!(error.get_error_name(), "LexicalError");
    assert_eq!(error.get_position().0, 10);
    match error.get_kind() {
        ErrorImpl::LexicalError { remaining } => assert_eq!(remaining, "@ 2;"),
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_lexical_error_truncates_remaining() {
    let source = format!("#{}", "a".repeat(100));
    let error = tokenize(&source).unwrap_err();

    match error.get_kind() {
        ErrorImpl::LexicalError { remaining } => {
            assert_eq!(remaining.chars().count(), 32);
            assert!(remaining.starts_with('#'));
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_unterminated_block_comment_lexes_as_operators() {
    assert_eq!(
        kinds("x /* y"),
        vec![
            TokenKind::Identifier,
            TokenKind::MultiplicativeOp,
            TokenKind::MultiplicativeOp,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_rule_order_decides() {
    // With `=` listed before `==`, equality can never be produced
    let rules = vec![
        MK_RULE!(TokenKind::Skip, r"\s+"),
        MK_RULE!(TokenKind::SimpleAssign, r"="),
        MK_RULE!(TokenKind::EqualityOp, r"=="),
    ];
    let mut lexer = Lexer::with_rules("==", &rules);

    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::SimpleAssign);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::SimpleAssign);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EOF);
}

#[test]
fn test_empty_matches_are_ignored() {
    let rules = vec![
        MK_RULE!(TokenKind::Skip, r"\s*"),
        MK_RULE!(TokenKind::Identifier, r"[a-z]+"),
    ];
    let mut lexer = Lexer::with_rules("ab", &rules);

    assert_eq!(lexer.next_token().unwrap().value, "ab");
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EOF);
}

#[test]
fn test_single_quoted_strings_stop_at_single_quote() {
    let tokens = tokenize("'a' + 'b'").unwrap();
    let pairs: Vec<(TokenKind, &str)> = tokens.iter().map(|t| (t.kind, t.value.as_str())).collect();

    assert_eq!(
        pairs,
        vec![
            (TokenKind::String, "'a'"),
            (TokenKind::AdditiveOp, "+"),
            (TokenKind::String, "'b'"),
            (TokenKind::EOF, ""),
        ]
    );
}

#[test]
fn test_single_quoted_strings_may_hold_double_quotes() {
    let tokens = tokenize(r#"'say "hi"';"#).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, r#"'say "hi"'"#);
    assert_eq!(tokens[1].kind, TokenKind::Semicolon);
}

#[test]
fn test_only_ascii_whitespace_is_skipped() {
    assert_eq!(
        kinds("x\t\n\r\u{c} y"),
        vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::EOF]
    );

    let error = tokenize("x\u{a0}y").unwrap_err();
    assert_eq!(error.get_error_name(), "LexicalError");
    assert_eq!(error.get_position().0, 1);
}

#[test]
fn test_keyword_boundary_is_ascii() {
    let mut lexer = Lexer::new("letä");

    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Let);

    let error = lexer.next_token().unwrap_err();
    match error.get_kind() {
        ErrorImpl::LexicalError { remaining } => assert_eq!(remaining, "ä"),
        other => panic!("unexpected error {:?}", other),
    }
    assert_eq!(error.get_position().0, 3);
}

#[test]
fn test_token_is_one_of_many() {
    let tokens = tokenize(", ;").unwrap();
    let separators = [TokenKind::Comma, TokenKind::Semicolon];

    assert!(tokens[0].is_one_of_many(&separators));
    assert!(tokens[1].is_one_of_many(&separators));
    assert!(!tokens[2].is_one_of_many(&separators));
    assert!(!tokens[0].is_one_of_many(&[]));
}
