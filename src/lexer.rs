use std::fmt;

use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use crate::ast::{Token, TokenKind};
use crate::lexicon::{self, LONGEST_FIRST};

lazy_static! {
    static ref NUMBER_RE: Regex = Regex::new(r"^[+-]?[0-9]+(\.[0-9]+)?").unwrap();
    static ref VARIABLE_RE: Regex = Regex::new(r"(?i)^[a-z]\w*").unwrap();
}

/// Longest lexeme quoted back in a [`LexError`] snippet.
const SNIPPET_LEN: usize = 24;

/// No lexicon phrase, numeral or identifier matches at `position`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    /// Byte offset of the first unmatched character
    pub position: usize,
    /// The unmatched word, up to the next whitespace
    pub snippet: String,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unrecognized input '{}' at position {}",
            self.snippet, self.position
        )
    }
}

impl std::error::Error for LexError {}

pub struct Lexer<'input> {
    input: &'input str,
    position: usize,
}

impl<'input> Lexer<'input> {
    pub fn new(input: &'input str) -> Self {
        Lexer { input, position: 0 }
    }

    fn rest(&self) -> &'input str {
        &self.input[self.position..]
    }

    fn current_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.position += ch.len_utf8();
            } else {
                break;
            }
        }
    }

    fn emit(&mut self, kind: TokenKind, len: usize) -> Token {
        let token = Token::new(kind, &self.rest()[..len], self.position);
        self.position += len;
        trace!("token {:?} {:?} at {}", token.kind, token.lexeme, token.position);
        token
    }

    fn read_phrase(&self) -> Option<(TokenKind, usize)> {
        let rest = self.rest();
        LONGEST_FIRST
            .iter()
            .find_map(|entry| lexicon::match_at(entry, rest).map(|len| (entry.kind, len)))
    }

    fn snippet(&self) -> String {
        self.rest()
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .chars()
            .take(SNIPPET_LEN)
            .collect()
    }

    /// Scan the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.skip_whitespace();

        if self.current_char().is_none() {
            return Ok(None);
        }

        if let Some((kind, len)) = self.read_phrase() {
            return Ok(Some(self.emit(kind, len)));
        }

        if let Some(m) = NUMBER_RE.find(self.rest()) {
            return Ok(Some(self.emit(TokenKind::Number, m.end())));
        }

        if let Some(m) = VARIABLE_RE.find(self.rest()) {
            return Ok(Some(self.emit(TokenKind::Variable, m.end())));
        }

        Err(LexError {
            position: self.position,
            snippet: self.snippet(),
        })
    }

    /// Scan the whole input.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        debug!("scanned {} tokens from {} bytes", tokens.len(), self.input.len());
        Ok(tokens)
    }
}

/// Scan `input` into tokens.
///
/// # Examples
///
/// ```
/// use spoken_math::ast::TokenKind;
/// use spoken_math::lexer::tokenize;
///
/// let kinds: Vec<_> = tokenize("x divided by 2")
///     .unwrap()
///     .into_iter()
///     .map(|t| t.kind)
///     .collect();
/// assert_eq!(kinds, vec![TokenKind::Variable, TokenKind::Div, TokenKind::Number]);
/// ```
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(input).tokenize()
}

#[test]
fn test_longest_phrase_wins() {
    let mut lexer = Lexer::new("geteilt durch durch");
    let first = lexer.next_token().unwrap().unwrap();
    assert_eq!(first.kind, TokenKind::Div);
    assert_eq!(first.lexeme, "geteilt durch");
    let second = lexer.next_token().unwrap().unwrap();
    assert_eq!(second.kind, TokenKind::Div);
    assert_eq!(second.position, 14);
    assert_eq!(lexer.next_token().unwrap(), None);
}

#[test]
fn test_identifier_longer_than_phrase() {
    let mut lexer = Lexer::new("sinx");
    let token = lexer.next_token().unwrap().unwrap();
    assert_eq!(token.kind, TokenKind::Variable);
    assert_eq!(token.lexeme, "sinx");
}
