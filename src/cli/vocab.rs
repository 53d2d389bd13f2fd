//! Vocabulary listings for the spoken-math CLI

use std::fmt::Write;

use super::CliError;
use crate::{
    ast::{Function, TokenKind},
    lexicon::{self, Language, ENTRIES},
};

/// Available vocabulary categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VocabCategory {
    Operators,
    Functions,
    Grouping,
    English,
    German,
}

impl VocabCategory {
    /// Parse category name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "operators" | "ops" => Some(Self::Operators),
            "functions" | "function" | "funcs" => Some(Self::Functions),
            "grouping" | "parentheses" | "brackets" => Some(Self::Grouping),
            "english" | "en" => Some(Self::English),
            "german" | "deutsch" | "de" => Some(Self::German),
            _ => None,
        }
    }
}

/// Get the vocabulary overview (category listing)
pub fn get_vocab_overview() -> &'static str {
    r#"SPOKEN MATH VOCABULARY

Phrases are matched case-insensitively, longest phrase first. Numbers must be
spoken as digits (2, 3.5, -1); any other word is taken as a variable name.

VOCABULARY CATEGORIES

  operators         plus, minus, times, divided by, to the power of
  functions         sin, cos, tan, arcsin, arccos, arctan, log, exp, abs, square root
  grouping          open/close parenthesis
  english           every English phrase
  german            every German phrase

PRECEDENCE (loosest first)

  plus minus                 left-associative
  times divided by           left-associative
  to the power of            right-associative
  functions, square root     apply to one following atom

  sine x plus 1              sin(x) + 1
  sine open parenthesis x plus 1 close parenthesis     sin(x + 1)

Run 'spoken-math vocab <category>' for the phrases in a category.
"#
}

fn kind_label(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Plus => "addition",
        TokenKind::Minus => "subtraction",
        TokenKind::Times => "multiplication",
        TokenKind::Div => "division",
        TokenKind::Pow => "power",
        TokenKind::Sqrt => "square root",
        TokenKind::Func => "function",
        TokenKind::LParen => "open group",
        TokenKind::RParen => "close group",
        TokenKind::Number | TokenKind::Variable => "literal",
    }
}

fn list_kinds(out: &mut String, kinds: &[TokenKind]) {
    for &kind in kinds {
        let phrases: Vec<&str> = lexicon::phrases_for(kind).map(|e| e.phrase).collect();
        let _ = writeln!(out, "  {:<16}{}", kind_label(kind), phrases.join(", "));
    }
}

fn list_language(out: &mut String, language: Language) {
    for e in ENTRIES.iter().filter(|e| e.language == language || e.language == Language::Common) {
        let _ = writeln!(out, "  {:<20}{}", e.phrase, kind_label(e.kind));
    }
}

/// Get the phrases of a specific category
pub fn get_vocab_category(name: &str) -> Result<String, CliError> {
    let category =
        VocabCategory::from_name(name).ok_or_else(|| CliError::UnknownCategory(name.to_string()))?;

    let mut out = String::new();
    match category {
        VocabCategory::Operators => {
            out.push_str("OPERATORS\n\n");
            list_kinds(
                &mut out,
                &[TokenKind::Plus, TokenKind::Minus, TokenKind::Times, TokenKind::Div, TokenKind::Pow],
            );
        }
        VocabCategory::Functions => {
            out.push_str("FUNCTIONS\n\n");
            for function in Function::ALL {
                let names: Vec<&str> = match function {
                    Function::Sqrt => lexicon::phrases_for(TokenKind::Sqrt).map(|e| e.phrase).collect(),
                    f => Function::synonyms()
                        .filter(|(_, g)| *g == f)
                        .map(|(name, _)| name)
                        .collect(),
                };
                let _ = writeln!(out, "  {:<16}{}", function.name(), names.join(", "));
            }
        }
        VocabCategory::Grouping => {
            out.push_str("GROUPING\n\n");
            list_kinds(&mut out, &[TokenKind::LParen, TokenKind::RParen]);
        }
        VocabCategory::English => {
            out.push_str("ENGLISH\n\n");
            list_language(&mut out, Language::English);
        }
        VocabCategory::German => {
            out.push_str("GERMAN\n\n");
            list_language(&mut out, Language::German);
        }
    }
    Ok(out)
}
