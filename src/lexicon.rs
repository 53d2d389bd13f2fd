//! Static phrase table shared by the lexer, the printers and the CLI.
//!
//! Phrases are lower-case ASCII, one space between words. Matching against
//! input is ASCII case-insensitive and tolerates any whitespace run between
//! the words of a multi-word phrase.

use lazy_static::lazy_static;

use crate::ast::TokenKind;

/// Vocabulary a phrase belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    German,
    /// Function names shared by both vocabularies (`sin`, `log`, ...).
    Common,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub phrase: &'static str,
    pub kind: TokenKind,
    pub language: Language,
}

const fn entry(phrase: &'static str, kind: TokenKind, language: Language) -> Entry {
    Entry {
        phrase,
        kind,
        language,
    }
}

use Language::{Common, English, German};
use TokenKind::*;

pub const ENTRIES: &[Entry] = &[
    entry("plus", Plus, English),
    entry("add", Plus, English),
    entry("und", Plus, German),
    entry("minus", Minus, English),
    entry("subtract", Minus, English),
    entry("abziehen", Minus, German),
    entry("times", Times, English),
    entry("multiplied by", Times, English),
    entry("mal", Times, German),
    entry("divided by", Div, English),
    entry("over", Div, English),
    entry("durch", Div, German),
    entry("geteilt durch", Div, German),
    entry("to the power of", Pow, English),
    entry("hoch", Pow, German),
    entry("square root of", Sqrt, English),
    entry("wurzel aus", Sqrt, German),
    entry("open parenthesis", LParen, English),
    entry("open bracket", LParen, English),
    entry("klammer auf", LParen, German),
    entry("close parenthesis", RParen, English),
    entry("close bracket", RParen, English),
    entry("klammer zu", RParen, German),
    entry("sin", Func, Common),
    entry("sine", Func, English),
    entry("sinus", Func, German),
    entry("cos", Func, Common),
    entry("cosine", Func, English),
    entry("cosinus", Func, German),
    entry("tan", Func, Common),
    entry("tangent", Func, English),
    entry("arcsin", Func, Common),
    entry("arccos", Func, Common),
    entry("arctan", Func, Common),
    entry("log", Func, Common),
    entry("ln", Func, Common),
    entry("exp", Func, Common),
    entry("abs", Func, Common),
];

lazy_static! {
    /// Entries ordered longest phrase first, so the first match at a scan
    /// position is the longest one.
    pub static ref LONGEST_FIRST: Vec<Entry> = {
        let mut entries = ENTRIES.to_vec();
        entries.sort_by(|a, b| b.phrase.len().cmp(&a.phrase.len()));
        entries
    };
}

/// Look up a whole phrase, ignoring ASCII case and extra whitespace.
///
/// # Examples
///
/// ```
/// use spoken_math::ast::TokenKind;
/// use spoken_math::lexicon;
///
/// assert_eq!(lexicon::lookup("Divided  by"), Some(TokenKind::Div));
/// assert_eq!(lexicon::lookup("divide"), None);
/// ```
pub fn lookup(phrase: &str) -> Option<TokenKind> {
    let normalized = phrase.split_whitespace().collect::<Vec<_>>().join(" ");
    ENTRIES
        .iter()
        .find(|e| e.phrase.eq_ignore_ascii_case(&normalized))
        .map(|e| e.kind)
}

/// True if `word` would never scan as a variable on its own.
pub fn is_reserved(word: &str) -> bool {
    lookup(word).is_some()
}

/// Entries of one token kind, in table order.
pub fn phrases_for(kind: TokenKind) -> impl Iterator<Item = &'static Entry> {
    ENTRIES.iter().filter(move |e| e.kind == kind)
}

/// Try to match `entry` at the start of `input`, returning the byte length
/// of the match. The match must end at a word boundary.
pub(crate) fn match_at(entry: &Entry, input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    let mut offset = 0;

    for (i, word) in entry.phrase.split(' ').enumerate() {
        if i > 0 {
            let gap = input[offset..]
                .char_indices()
                .find(|(_, c)| !c.is_whitespace())
                .map(|(idx, _)| idx)
                .unwrap_or(input.len() - offset);
            if gap == 0 {
                return None;
            }
            offset += gap;
        }

        let end = offset + word.len();
        if end > bytes.len() || !bytes[offset..end].eq_ignore_ascii_case(word.as_bytes()) {
            return None;
        }
        offset = end;
    }

    match input[offset..].chars().next() {
        Some(c) if c.is_alphanumeric() || c == '_' => None,
        _ => Some(offset),
    }
}
