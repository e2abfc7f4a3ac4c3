//! The default lexical rule table.
//!
//! Rules are tried top to bottom and the first match wins, so the order
//! below is load-bearing: skip rules first, keywords before identifiers,
//! two-character operators before their one-character prefixes.

use lazy_static::lazy_static;
use regex::Regex;

use crate::MK_RULE;

use super::tokens::TokenKind;

#[derive(Debug, Clone)]
pub struct Rule {
    pub kind: TokenKind,
    pub regex: Regex,
}

impl Rule {
    /// Returns the length of the match at the start of `input`, if any.
    ///
    /// Empty matches count as no match, otherwise a bad rule could stall the
    /// lexer forever.
    pub fn match_len(&self, input: &str) -> Option<usize> {
        self.regex
            .find(input)
            .filter(|m| m.start() == 0 && m.end() > 0)
            .map(|m| m.end())
    }
}

lazy_static! {
    pub static ref DEFAULT_RULES: Vec<Rule> = vec![
        // ASCII whitespace and comments
        MK_RULE!(TokenKind::Skip, r"[\t\n\f\r ]+"),
        MK_RULE!(TokenKind::Skip, r"//.*"),
        MK_RULE!(TokenKind::Skip, r"/\*[\s\S]*?\*/"),

        // Punctuation
        MK_RULE!(TokenKind::Semicolon, r";"),
        MK_RULE!(TokenKind::OpenCurly, r"\{"),
        MK_RULE!(TokenKind::CloseCurly, r"\}"),
        MK_RULE!(TokenKind::OpenParen, r"\("),
        MK_RULE!(TokenKind::CloseParen, r"\)"),
        MK_RULE!(TokenKind::Comma, r","),
        MK_RULE!(TokenKind::Dot, r"\."),
        MK_RULE!(TokenKind::OpenBracket, r"\["),
        MK_RULE!(TokenKind::CloseBracket, r"\]"),

        // Keywords, ending at an ASCII word boundary
        MK_RULE!(TokenKind::Let, r"let(?-u:\b)"),
        MK_RULE!(TokenKind::Def, r"def(?-u:\b)"),
        MK_RULE!(TokenKind::Return, r"return(?-u:\b)"),
        MK_RULE!(TokenKind::If, r"if(?-u:\b)"),
        MK_RULE!(TokenKind::While, r"while(?-u:\b)"),
        MK_RULE!(TokenKind::Do, r"do(?-u:\b)"),
        MK_RULE!(TokenKind::Class, r"class(?-u:\b)"),
        MK_RULE!(TokenKind::This, r"this(?-u:\b)"),
        MK_RULE!(TokenKind::Extends, r"extends(?-u:\b)"),
        MK_RULE!(TokenKind::Super, r"super(?-u:\b)"),
        MK_RULE!(TokenKind::New, r"new(?-u:\b)"),
        MK_RULE!(TokenKind::For, r"for(?-u:\b)"),
        MK_RULE!(TokenKind::Else, r"else(?-u:\b)"),
        MK_RULE!(TokenKind::True, r"true(?-u:\b)"),
        MK_RULE!(TokenKind::False, r"false(?-u:\b)"),
        MK_RULE!(TokenKind::Null, r"null(?-u:\b)"),

        // Literals and names
        MK_RULE!(TokenKind::Number, r"[0-9]+"),
        MK_RULE!(TokenKind::String, r#""[^"]*""#),
        MK_RULE!(TokenKind::String, r"'[^']*'"),
        MK_RULE!(TokenKind::Identifier, r"[A-Za-z0-9_]+"),

        // Operators
        MK_RULE!(TokenKind::EqualityOp, r"[=!]="),
        MK_RULE!(TokenKind::SimpleAssign, r"="),
        MK_RULE!(TokenKind::ComplexAssign, r"[+\-*/]="),
        MK_RULE!(TokenKind::Not, r"!"),
        MK_RULE!(TokenKind::And, r"&&"),
        MK_RULE!(TokenKind::Or, r"\|\|"),
        MK_RULE!(TokenKind::RelationalOp, r"[<>]=?"),
        MK_RULE!(TokenKind::AdditiveOp, r"[+\-]"),
        MK_RULE!(TokenKind::MultiplicativeOp, r"[*/]"),
    ];
}
