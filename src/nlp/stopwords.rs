//! Topic stoplist
//!
//! Section-heading words that rank highly in lecture material but make poor
//! question topics. Matching is exact and case-sensitive on the trimmed
//! phrase, so "Summary" is dropped while "Summary Statistics" survives.

use rustc_hash::FxHashSet;

/// Built-in topic stopwords
pub const DEFAULT_TOPIC_STOPWORDS: &[&str] = &[
    "Introduction",
    "Overview",
    "Chapter",
    "Section",
    "Summary",
    "Conclusion",
];

/// A set of phrases that may never become topics
#[derive(Debug, Clone)]
pub struct Stoplist {
    words: FxHashSet<String>,
}

impl Default for Stoplist {
    fn default() -> Self {
        Self::from_list(DEFAULT_TOPIC_STOPWORDS)
    }
}

impl Stoplist {
    /// Create the built-in stoplist
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty stoplist (no filtering)
    pub fn empty() -> Self {
        Self {
            words: FxHashSet::default(),
        }
    }

    /// Create a stoplist from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Add additional stopwords
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words.extend(words.into_iter().map(Into::into));
    }

    /// Check if a phrase is a stopword
    pub fn contains(&self, phrase: &str) -> bool {
        self.words.contains(phrase)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_list() {
        let stoplist = Stoplist::new();
        assert_eq!(stoplist.len(), DEFAULT_TOPIC_STOPWORDS.len());
        assert!(stoplist.contains("Summary"));
        assert!(stoplist.contains("Conclusion"));
    }

    #[test]
    fn test_exact_case_sensitive_match() {
        let stoplist = Stoplist::new();
        assert!(!stoplist.contains("summary"));
        assert!(!stoplist.contains("Summary Statistics"));
    }

    #[test]
    fn test_extend() {
        let mut stoplist = Stoplist::empty();
        assert!(stoplist.is_empty());
        stoplist.extend(["Appendix"]);
        assert!(stoplist.contains("Appendix"));
    }
}
