//! CLI support for spoken-math
//!
//! Provides programmatic access to the CLI commands so they can be embedded
//! in other front ends (a voice assistant, a notebook plugin).

mod convert;
mod vocab;

pub use convert::{
    OutputFormat, execute_convert, execute_transcript, render, render_diagnostic, ConvertOptions,
    TranscriptOptions,
};
pub use vocab::{get_vocab_category, get_vocab_overview, VocabCategory};

use std::io;

use crate::{ConvertError, transcript::{TranscriptError, TranscriptWord}};

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// Conversion error, with the diagnostic already rendered against the input
    Convert {
        error: ConvertError,
        diagnostic: String,
    },
    /// Conversion error inside a word-level transcript
    TranscriptConvert {
        error: ConvertError,
        word: Option<TranscriptWord>,
    },
    /// Malformed transcript input
    Transcript(TranscriptError),
    /// JSON output could not be serialized
    Json(serde_json::Error),
    /// IO error
    Io(io::Error),
    /// No input provided
    NoInput,
    /// Unknown vocabulary category
    UnknownCategory(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Convert { diagnostic, .. } => write!(f, "{}", diagnostic),
            CliError::TranscriptConvert { error, word } => match word {
                Some(w) => write!(
                    f,
                    "{} (spoken as '{}' at {:.2}s-{:.2}s)",
                    error, w.word, w.start, w.end
                ),
                None => write!(f, "{}", error),
            },
            CliError::Transcript(e) => write!(f, "{}", e),
            CliError::Json(e) => write!(f, "JSON output error: {}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::NoInput => write!(f, "No input provided. Pass TEXT or pipe it to stdin."),
            CliError::UnknownCategory(c) => {
                write!(
                    f,
                    "Unknown category: '{}'\nRun 'spoken-math vocab' to see available categories.",
                    c
                )
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Convert { error, .. } => Some(error),
            CliError::TranscriptConvert { error, .. } => Some(error),
            CliError::Transcript(e) => Some(e),
            CliError::Json(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TranscriptError> for CliError {
    fn from(e: TranscriptError) -> Self {
        CliError::Transcript(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
