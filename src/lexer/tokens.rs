use std::fmt::Display;

use serde::{Serialize, Serializer};

use crate::Span;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    /// Whitespace and comments, dropped by the lexer.
    Skip,

    Semicolon,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,
    Comma,
    Dot,
    OpenBracket,
    CloseBracket,

    // Reserved
    Let,
    Def,
    Return,
    If,
    While,
    Do,
    Class,
    This,
    Extends,
    Super,
    New,
    For,
    Else,
    True,
    False,
    Null,

    Number,
    String,
    Identifier,

    EqualityOp,       // == !=
    SimpleAssign,     // =
    ComplexAssign,    // += -= *= /=
    RelationalOp,     // > < >= <=
    And,              // &&
    Or,               // ||
    Not,              // !
    AdditiveOp,       // + -
    MultiplicativeOp, // * /
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::EOF => "EOF",
            TokenKind::Skip => "Skip",
            TokenKind::Semicolon => ";",
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::Let => "let",
            TokenKind::Def => "def",
            TokenKind::Return => "return",
            TokenKind::If => "if",
            TokenKind::While => "while",
            TokenKind::Do => "do",
            TokenKind::Class => "class",
            TokenKind::This => "this",
            TokenKind::Extends => "extends",
            TokenKind::Super => "super",
            TokenKind::New => "new",
            TokenKind::For => "for",
            TokenKind::Else => "else",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Null => "null",
            TokenKind::Number => "Number",
            TokenKind::String => "String",
            TokenKind::Identifier => "Identifier",
            TokenKind::EqualityOp => "EqualityOp",
            TokenKind::SimpleAssign => "=",
            TokenKind::ComplexAssign => "ComplexAssign",
            TokenKind::RelationalOp => "RelationalOp",
            TokenKind::And => "AndLogicalOp",
            TokenKind::Or => "OrLogicalOp",
            TokenKind::Not => "NotLogicalOp",
            TokenKind::AdditiveOp => "AdditiveOp",
            TokenKind::MultiplicativeOp => "MultiplicativeOp",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub kind: TokenKind,
    pub value: String,
    #[serde(skip)]
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.value.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}({})", self.kind, self.value)
        }
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}
