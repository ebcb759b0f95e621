use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// A word token with its UTF-8 byte offsets in the source text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    /// The token text content.
    pub text: String,
    /// Byte offset (inclusive) in the source text.
    pub start: usize,
    /// Byte offset (exclusive) in the source text.
    pub end: usize,
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        self.text.as_str()
    }
}

/// Splits text into word tokens on Unicode word boundaries (UAX-29).
///
/// Letters, digits, and word-internal apostrophes form tokens; punctuation
/// and whitespace are separators and never appear in the output. The result
/// is deterministic and locale-independent.
pub fn tokenize(text: &str) -> Vec<Token> {
    text.unicode_word_indices()
        .map(|(start, word)| Token {
            text: word.to_string(),
            start,
            end: start + word.len(),
        })
        .collect()
}
