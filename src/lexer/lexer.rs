use log::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_TOKEN,
};

use super::{
    rules::{Rule, DEFAULT_RULES},
    tokens::{Token, TokenKind},
};

/// Number of characters of unconsumed input kept in a lexical error.
const ERROR_CONTEXT_CHARS: usize = 32;

/// Anything that can hand the parser one token at a time.
pub trait TokenSource {
    /// Returns the next token, or `EOF` once the input is exhausted.
    fn next_token(&mut self) -> Result<Token, Error>;
}

/// Pull-based lexer over a borrowed source buffer.
///
/// The lexer keeps nothing but a cursor: every call to `next_token` tries the
/// rules at the cursor, advances past the match and hands back one token.
#[derive(Clone)]
pub struct Lexer<'a> {
    rules: &'a [Rule],
    source: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer::with_rules(source, &DEFAULT_RULES)
    }

    pub fn with_rules(source: &'a str, rules: &'a [Rule]) -> Lexer<'a> {
        Lexer {
            rules,
            source,
            pos: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn get_position(&self) -> Position {
        Position(self.pos)
    }

    fn span_of(&self, len: usize) -> Span {
        Span {
            start: Position(self.pos),
            end: Position(self.pos + len),
        }
    }
}

impl TokenSource for Lexer<'_> {
    fn next_token(&mut self) -> Result<Token, Error> {
        loop {
            if self.at_eof() {
                return Ok(MK_TOKEN!(TokenKind::EOF, String::new(), self.span_of(0)));
            }

            let remaining = self.remainder();
            let matched = self
                .rules
                .iter()
                .find_map(|rule| rule.match_len(remaining).map(|len| (rule.kind, len)));

            let Some((kind, len)) = matched else {
                return Err(Error::new(
                    ErrorImpl::LexicalError {
                        remaining: remaining.chars().take(ERROR_CONTEXT_CHARS).collect(),
                    },
                    self.get_position(),
                ));
            };

            if kind == TokenKind::Skip {
                self.advance_n(len);
                continue;
            }

            let token = MK_TOKEN!(kind, String::from(&remaining[..len]), self.span_of(len));
            self.advance_n(len);

            trace!("token {} at {}", token, token.span.start.0);
            return Ok(token);
        }
    }
}

/// Lexes the whole source up front.
///
/// The returned list always ends with exactly one `EOF` token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token()?;
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return Ok(tokens);
        }
    }
}
