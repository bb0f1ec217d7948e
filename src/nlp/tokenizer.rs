//! ASCII word scanning and lexical predicates
//!
//! Every heuristic in the pipeline is phrased in terms of "word characters"
//! (`[A-Za-z0-9_]`) and maximal runs of them. This module provides the scanner
//! and the small predicates the stages share, so that segment filtering,
//! phrase mining and topic filtering all agree on what a word is.

/// Check if a byte is a word character (`[A-Za-z0-9_]`)
#[inline]
pub fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// A maximal run of word characters within a piece of text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSpan<'a> {
    /// The run itself
    pub text: &'a str,
    /// Byte offset (start) in the scanned text
    pub start: usize,
    /// Byte offset (end, exclusive) in the scanned text
    pub end: usize,
}

/// Scan `text` into maximal word-character runs.
///
/// Word characters are ASCII, so run boundaries always fall on UTF-8
/// character boundaries.
pub fn word_spans(text: &str) -> Vec<WordSpan<'_>> {
    let bytes = text.as_bytes();
    let mut spans = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if !is_word_byte(bytes[i]) {
            i += 1;
            continue;
        }
        let start = i;
        while i < bytes.len() && is_word_byte(bytes[i]) {
            i += 1;
        }
        spans.push(WordSpan {
            text: &text[start..i],
            start,
            end: i,
        });
    }

    spans
}

/// A word made only of ASCII letters, at least `min_len` long
pub fn is_alpha_word(word: &str, min_len: usize) -> bool {
    word.len() >= min_len && word.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Whether any whole word of `text` is alphabetic with at least `min_len`
/// letters (`\b[a-zA-Z]{n,}\b`)
pub fn has_alpha_word(text: &str, min_len: usize) -> bool {
    word_spans(text)
        .iter()
        .any(|span| is_alpha_word(span.text, min_len))
}

/// Whether `text` contains `min_len` consecutive ASCII letters anywhere
/// (`[a-zA-Z]{n,}`)
pub fn has_alpha_run(text: &str, min_len: usize) -> bool {
    let mut run = 0;
    for b in text.bytes() {
        if b.is_ascii_alphabetic() {
            run += 1;
            if run >= min_len {
                return true;
            }
        } else {
            run = 0;
        }
    }
    min_len == 0
}

/// An uppercase letter followed by at least one lowercase letter or digit
/// (`[A-Z][a-z0-9]+`), e.g. `Binary`, `Python3`
pub fn is_capitalized_word(word: &str) -> bool {
    let bytes = word.as_bytes();
    bytes.len() >= 2
        && bytes[0].is_ascii_uppercase()
        && bytes[1..]
            .iter()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
}

/// An acronym (`[A-Z]{2,}`) or a mixed-case token with an internal capital
/// (`[a-zA-Z]+[A-Z][a-zA-Z0-9]+`), e.g. `HTTP`, `iPhone`, `JavaScript`
pub fn is_technical_token(word: &str) -> bool {
    let bytes = word.as_bytes();

    if bytes.len() >= 2 && bytes.iter().all(|b| b.is_ascii_uppercase()) {
        return true;
    }

    if bytes.len() < 3 || !bytes.iter().all(|b| b.is_ascii_alphanumeric()) {
        return false;
    }

    // Letters up to some internal capital, then at least one alphanumeric.
    let mut k = 1;
    while k + 1 < bytes.len() && bytes[k - 1].is_ascii_alphabetic() {
        if bytes[k].is_ascii_uppercase() {
            return true;
        }
        k += 1;
    }
    false
}

/// Remove everything but word characters and hyphens from a token
pub fn strip_to_word_chars(token: &str) -> String {
    token
        .chars()
        .filter(|&c| c.is_ascii() && (is_word_byte(c as u8) || c == '-'))
        .collect()
}

/// Number of whitespace-separated words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
