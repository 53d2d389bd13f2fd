//! Upstream boundary with the speech-to-text service.
//!
//! A transcription arrives either as plain text or as a list of words with
//! start/end timestamps in seconds:
//!
//! ```text
//! [{"word": "Sine", "start": 0.0, "end": 0.42}, {"word": "x.", "start": 0.42, "end": 0.8}]
//! ```
//!
//! Both are normalized into the lower-case, single-spaced utterance the
//! lexer expects. For word lists, byte offsets in the utterance can be mapped
//! back to the word (and time span) they came from.

use std::fmt;

use log::debug;
use serde_json::Value;

/// Sentence punctuation the transcriber appends to words.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':'];

#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptWord {
    pub word: String,
    /// Seconds from the start of the recording
    pub start: f64,
    pub end: f64,
}

#[derive(Debug)]
pub enum TranscriptError {
    /// Not valid JSON
    Json(serde_json::Error),
    /// Valid JSON of the wrong shape
    Format(String),
}

impl fmt::Display for TranscriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscriptError::Json(e) => write!(f, "Invalid transcript JSON: {}", e),
            TranscriptError::Format(msg) => write!(f, "Invalid transcript: {}", msg),
        }
    }
}

impl std::error::Error for TranscriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TranscriptError::Json(e) => Some(e),
            TranscriptError::Format(_) => None,
        }
    }
}

impl From<serde_json::Error> for TranscriptError {
    fn from(e: serde_json::Error) -> Self {
        TranscriptError::Json(e)
    }
}

/// Lower-case one word and strip trailing sentence punctuation.
fn normalize_word(word: &str) -> String {
    word.trim_end_matches(TRAILING_PUNCTUATION).to_lowercase()
}

/// Normalize free text into an utterance: lower-cased, words separated by
/// single spaces, trailing sentence punctuation removed from each word.
///
/// # Examples
///
/// ```
/// use spoken_math::transcript::normalize_utterance;
///
/// assert_eq!(normalize_utterance("  Two   plus 3.5. "), "two plus 3.5");
/// ```
pub fn normalize_utterance(text: &str) -> String {
    text.split_whitespace()
        .map(normalize_word)
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// A word-level transcription joined into one utterance.
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    words: Vec<TranscriptWord>,
    utterance: String,
    /// Byte offset in `utterance` where each word starts.
    offsets: Vec<usize>,
}

impl Transcript {
    pub fn new(words: Vec<TranscriptWord>) -> Self {
        let mut utterance = String::new();
        let mut offsets = Vec::with_capacity(words.len());
        let mut kept = Vec::with_capacity(words.len());

        for word in words {
            let normalized = normalize_utterance(&word.word);
            if normalized.is_empty() {
                continue;
            }
            if !utterance.is_empty() {
                utterance.push(' ');
            }
            offsets.push(utterance.len());
            utterance.push_str(&normalized);
            kept.push(word);
        }

        debug!("transcript of {} words: {:?}", kept.len(), utterance);
        Transcript {
            words: kept,
            utterance,
            offsets,
        }
    }

    /// Parse a JSON array of `{"word", "start", "end"}` objects.
    pub fn from_json(json: &str) -> Result<Self, TranscriptError> {
        let value: Value = serde_json::from_str(json)?;
        let entries = value
            .as_array()
            .ok_or_else(|| TranscriptError::Format("expected an array of words".to_string()))?;

        let mut words = Vec::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            let word = entry
                .get("word")
                .and_then(Value::as_str)
                .ok_or_else(|| TranscriptError::Format(format!("entry {} has no 'word'", i)))?;
            let time = |key: &str| -> Result<f64, TranscriptError> {
                match entry.get(key) {
                    None | Some(Value::Null) => Ok(0.0),
                    Some(v) => v.as_f64().ok_or_else(|| {
                        TranscriptError::Format(format!("entry {} has a non-numeric '{}'", i, key))
                    }),
                }
            };
            words.push(TranscriptWord {
                word: word.to_string(),
                start: time("start")?,
                end: time("end")?,
            });
        }

        Ok(Transcript::new(words))
    }

    pub fn utterance(&self) -> &str {
        &self.utterance
    }

    pub fn words(&self) -> &[TranscriptWord] {
        &self.words
    }

    /// The word whose text covers byte offset `position` of the utterance.
    /// A position on the separating space maps to the following word.
    pub fn word_at(&self, position: usize) -> Option<&TranscriptWord> {
        if position >= self.utterance.len() {
            return None;
        }
        let index = match self.offsets.binary_search(&position) {
            Ok(i) => i,
            Err(0) => return None,
            Err(i) => {
                let previous = i - 1;
                let end = self.offsets[previous] + self.word_len(previous);
                if position < end { previous } else { i }
            }
        };
        self.words.get(index)
    }

    fn word_len(&self, index: usize) -> usize {
        let start = self.offsets[index];
        let end = self
            .offsets
            .get(index + 1)
            .map_or(self.utterance.len(), |next| next - 1);
        end - start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<TranscriptWord> {
        list.iter()
            .enumerate()
            .map(|(i, w)| TranscriptWord {
                word: w.to_string(),
                start: i as f64,
                end: i as f64 + 0.5,
            })
            .collect()
    }

    #[test]
    fn test_utterance_joins_normalized_words() {
        let t = Transcript::new(words(&[" Sine", "X.", "", "plus", "1!"]));
        assert_eq!(t.utterance(), "sine x plus 1");
        assert_eq!(t.words().len(), 4);
    }

    #[test]
    fn test_word_at_maps_offsets() {
        let t = Transcript::new(words(&["sine", "x", "plus", "1"]));
        assert_eq!(t.word_at(0).unwrap().word, "sine");
        assert_eq!(t.word_at(3).unwrap().word, "sine");
        assert_eq!(t.word_at(4).unwrap().word, "x");
        assert_eq!(t.word_at(5).unwrap().word, "x");
        assert_eq!(t.word_at(7).unwrap().word, "plus");
        assert_eq!(t.word_at(12).unwrap().word, "1");
        assert!(t.word_at(13).is_none());
    }
}
