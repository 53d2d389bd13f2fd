//! Convert spoken phrases and rendered transcripts

use std::str::FromStr;

use super::CliError;
use crate::{
    ConvertError, Expr, convert, output,
    transcript::{Transcript, normalize_utterance},
};

/// How a converted expression is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Canonical spoken form
    #[default]
    Canonical,
    /// S-expression
    Tree,
    /// Tagged JSON tree
    Json,
    /// LaTeX
    Latex,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "canonical" | "spoken" | "text" => Ok(Self::Canonical),
            "tree" | "sexpr" => Ok(Self::Tree),
            "json" => Ok(Self::Json),
            "latex" | "tex" => Ok(Self::Latex),
            other => Err(format!(
                "unknown format '{}' (expected canonical, tree, json or latex)",
                other
            )),
        }
    }
}

/// Options for the convert command
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// The spoken phrase
    pub text: String,
    pub format: OutputFormat,
    /// Pretty-print JSON output
    pub pretty: bool,
    /// Lower-case and strip punctuation before converting
    pub normalize: bool,
}

/// Options for the transcript command
#[derive(Debug, Clone, Default)]
pub struct TranscriptOptions {
    /// JSON array of `{"word", "start", "end"}` objects
    pub json: String,
    pub format: OutputFormat,
    pub pretty: bool,
}

/// Print `expr` in the requested format.
pub fn render(expr: &Expr, format: OutputFormat, pretty: bool) -> Result<String, CliError> {
    Ok(match format {
        OutputFormat::Canonical => output::to_spoken(expr),
        OutputFormat::Tree => output::to_tree(expr),
        OutputFormat::Json => output::to_json_string(expr, pretty)?,
        OutputFormat::Latex => output::to_latex(expr),
    })
}

/// Render `error` against `input`, pointing at the offending position.
///
/// ```text
/// Syntax error: missing operand at position 2
///   x plus
///     ^
/// ```
pub fn render_diagnostic(input: &str, error: &ConvertError) -> String {
    match error.position() {
        Some(position) => {
            let column = input
                .get(..position)
                .map_or(position, |prefix| prefix.chars().count());
            format!("{}\n  {}\n  {}^", error, input, " ".repeat(column))
        }
        None => error.to_string(),
    }
}

/// Execute a convert operation
pub fn execute_convert(options: &ConvertOptions) -> Result<String, CliError> {
    let text = if options.normalize {
        normalize_utterance(&options.text)
    } else {
        options.text.trim().to_string()
    };

    if text.is_empty() {
        return Err(CliError::NoInput);
    }

    let expr = convert(&text).map_err(|error| CliError::Convert {
        diagnostic: render_diagnostic(&text, &error),
        error,
    })?;

    render(&expr, options.format, options.pretty)
}

/// Execute a transcript operation: join the words, convert, and map any
/// error position back to the spoken word.
pub fn execute_transcript(options: &TranscriptOptions) -> Result<String, CliError> {
    let transcript = Transcript::from_json(&options.json)?;

    if transcript.utterance().is_empty() {
        return Err(CliError::NoInput);
    }

    let expr = convert(transcript.utterance()).map_err(|error| CliError::TranscriptConvert {
        word: error
            .position()
            .and_then(|position| transcript.word_at(position))
            .cloned(),
        error,
    })?;

    render(&expr, options.format, options.pretty)
}
