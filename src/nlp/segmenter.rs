//! Sentence-like segmentation of normalized text
//!
//! Boundaries are runs of newlines/semicolons, or whitespace directly after
//! sentence-terminal punctuation (`.`, `?`, `!`). Segments with too little
//! lexical content are dropped.

use crate::nlp::tokenizer::has_alpha_word;

/// Default minimum segment length (segments must be strictly longer)
pub const DEFAULT_MIN_SEGMENT_CHARS: usize = 6;

/// Splits cleaned text into segments
#[derive(Debug, Clone)]
pub struct Segmenter {
    min_chars: usize,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Segmenter {
    pub fn new() -> Self {
        Self {
            min_chars: DEFAULT_MIN_SEGMENT_CHARS,
        }
    }

    /// Set the minimum segment length
    pub fn with_min_chars(mut self, min_chars: usize) -> Self {
        self.min_chars = min_chars;
        self
    }

    /// Split `text` and keep segments longer than the minimum that contain
    /// an alphabetic word of at least three letters.
    pub fn segment(&self, text: &str) -> Vec<String> {
        split_segments(text)
            .into_iter()
            .map(str::trim)
            .filter(|s| s.chars().count() > self.min_chars && has_alpha_word(s, 3))
            .map(str::to_string)
            .collect()
    }
}

/// Raw boundary split, before trimming and filtering
fn split_segments(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        let hard_break = c == '\n' || c == ';';
        let soft_break = c.is_whitespace() && matches!(prev, Some('.' | '?' | '!'));

        if !hard_break && !soft_break {
            prev = Some(c);
            continue;
        }

        pieces.push(&text[start..idx]);

        // Swallow the rest of the separator run.
        let mut end = idx + c.len_utf8();
        while let Some(&(next_idx, next)) = chars.peek() {
            let continues = if hard_break {
                next == '\n' || next == ';'
            } else {
                next.is_whitespace()
            };
            if !continues {
                break;
            }
            end = next_idx + next.len_utf8();
            chars.next();
        }

        start = end;
        prev = None;
    }

    pieces.push(&text[start..]);
    pieces
}
