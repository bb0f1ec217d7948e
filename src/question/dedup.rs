//! Candidate deduplication
//!
//! Every whitespace run, line breaks included, collapses to one space and
//! the candidate is trimmed. Multiple-choice items therefore leave this
//! stage on a single line.

use rustc_hash::FxHashSet;

/// Whitespace-normalized form of a candidate
pub fn normalize_whitespace(candidate: &str) -> String {
    candidate.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Drops repeated and too-short candidates
#[derive(Debug, Clone)]
pub struct Deduplicator {
    min_chars: usize,
}

impl Default for Deduplicator {
    fn default() -> Self {
        Self { min_chars: 10 }
    }
}

impl Deduplicator {
    pub fn new(min_chars: usize) -> Self {
        Self { min_chars }
    }

    /// Normalize each candidate, keep first occurrences, and drop those of
    /// `min_chars` characters or fewer.
    pub fn dedup<I, S>(&self, candidates: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = FxHashSet::default();
        candidates
            .into_iter()
            .map(|c| normalize_whitespace(c.as_ref()))
            .filter(|c| c.chars().count() > self.min_chars)
            .filter(|c| seen.insert(c.clone()))
            .collect()
    }
}
