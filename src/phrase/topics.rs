//! Topic selection
//!
//! Ranks mined phrases by aggregated weight, cleans and filters them, and
//! keeps a bounded list of topics. When nothing survives, falls back to one
//! long token per segment.

use crate::errors::{QuizError, Result};
use crate::nlp::stopwords::Stoplist;
use crate::nlp::tokenizer::has_alpha_run;
use crate::types::{QuizConfig, WeightedPhrase};

/// Picks question topics from weighted phrases
#[derive(Debug, Clone)]
pub struct TopicSelector {
    stoplist: Stoplist,
    min_topics: usize,
    max_topics: usize,
    fallback_size: usize,
}

impl Default for TopicSelector {
    fn default() -> Self {
        Self::from_config(&QuizConfig::default())
    }
}

impl TopicSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selector from the pipeline config, extending the built-in
    /// stoplist with `extra_stopwords`
    pub fn from_config(config: &QuizConfig) -> Self {
        let mut stoplist = Stoplist::new();
        stoplist.extend(config.extra_stopwords.iter().cloned());
        Self {
            stoplist,
            min_topics: config.min_topics,
            max_topics: config.max_topics,
            fallback_size: config.fallback_topics,
        }
    }

    /// Replace the stoplist
    pub fn with_stoplist(mut self, stoplist: Stoplist) -> Self {
        self.stoplist = stoplist;
        self
    }

    /// Select topics, falling back to long segment tokens when ranking
    /// yields nothing.
    pub fn select<S: AsRef<str>>(
        &self,
        phrases: Vec<WeightedPhrase>,
        segments: &[S],
    ) -> Result<Vec<String>> {
        let ranked = self.rank(phrases);
        let take = self.max_topics.min(self.min_topics.max(ranked.len()));
        let topics: Vec<String> = ranked.into_iter().take(take).collect();
        if !topics.is_empty() {
            return Ok(topics);
        }

        let fallback = self.fallback(segments);
        if fallback.is_empty() {
            return Err(QuizError::no_topics(format!(
                "no ranked phrase or long token in {} segments",
                segments.len()
            )));
        }
        Ok(fallback)
    }

    /// Order phrases by weight (first-seen breaks ties), strip trailing
    /// punctuation, and drop entries without three consecutive letters or
    /// on the stoplist.
    pub fn rank(&self, mut phrases: Vec<WeightedPhrase>) -> Vec<String> {
        phrases.sort_by(|a, b| a.stable_cmp(b));
        phrases
            .into_iter()
            .map(|p| trim_trailing_punctuation(&p.text).to_string())
            .filter(|p| has_alpha_run(p, 3))
            .filter(|p| !self.stoplist.contains(p))
            .collect()
    }

    /// First whitespace token longer than five characters from each segment,
    /// up to the fallback size
    pub fn fallback<S: AsRef<str>>(&self, segments: &[S]) -> Vec<String> {
        segments
            .iter()
            .filter_map(|s| {
                s.as_ref()
                    .split_whitespace()
                    .find(|w| w.chars().count() > 5)
            })
            .take(self.fallback_size)
            .map(str::to_string)
            .collect()
    }
}

/// Remove one trailing `.`, `,`, `;` or `:` and surrounding whitespace
fn trim_trailing_punctuation(phrase: &str) -> &str {
    phrase
        .strip_suffix(&['.', ',', ';', ':'][..])
        .unwrap_or(phrase)
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrases(entries: &[(&str, u32)]) -> Vec<WeightedPhrase> {
        entries
            .iter()
            .enumerate()
            .map(|(i, (text, weight))| WeightedPhrase::new(*text, *weight, i))
            .collect()
    }

    #[test]
    fn test_rank_by_weight_then_first_seen() {
        let selector = TopicSelector::new();
        let ranked = selector.rank(phrases(&[
            ("heap", 2),
            ("binary tree", 6),
            ("stack", 2),
            ("queue", 9),
        ]));
        assert_eq!(ranked, vec!["queue", "binary tree", "heap", "stack"]);
    }

    #[test]
    fn test_rank_filters_stopwords_and_non_alpha() {
        let selector = TopicSelector::new();
        let ranked = selector.rank(phrases(&[
            ("Summary", 9),
            ("x1 y2", 8),
            ("Sorting:", 7),
            ("Summary Statistics", 1),
        ]));
        assert_eq!(ranked, vec!["Sorting", "Summary Statistics"]);
    }

    #[test]
    fn test_select_caps_at_max_topics() {
        let selector = TopicSelector::new();
        let many: Vec<(String, u32)> = (0..20).map(|i| (format!("topic{i:02}"), 1)).collect();
        let entries: Vec<(&str, u32)> = many.iter().map(|(t, w)| (t.as_str(), *w)).collect();
        let topics = selector.select(phrases(&entries), &["unused"]).unwrap();
        assert_eq!(topics.len(), 12);
        assert_eq!(topics[0], "topic00");
    }

    #[test]
    fn test_select_keeps_all_when_few() {
        let selector = TopicSelector::new();
        let topics = selector
            .select(phrases(&[("heap", 1), ("stack", 1)]), &["unused"])
            .unwrap();
        assert_eq!(topics, vec!["heap", "stack"]);
    }

    #[test]
    fn test_fallback_to_long_tokens() {
        let selector = TopicSelector::new();
        let segments = ["short words only", "contains longer tokens", "tiny bit"];
        let topics = selector
            .select(phrases(&[("Summary", 3)]), &segments)
            .unwrap();
        assert_eq!(topics, vec!["contains"]);
    }

    #[test]
    fn test_fallback_limited_to_five() {
        let selector = TopicSelector::new();
        let segments = ["aaaaaa1", "bbbbbb2", "cccccc3", "dddddd4", "eeeeee5", "ffffff6"];
        assert_eq!(selector.fallback(&segments).len(), 5);
    }

    #[test]
    fn test_no_topics_error() {
        let selector = TopicSelector::new();
        let err = selector.select(Vec::new(), &["tiny bit"]).unwrap_err();
        assert!(matches!(err, QuizError::NoTopics { .. }));
    }

    #[test]
    fn test_extra_stopwords_from_config() {
        let config = QuizConfig::default().with_extra_stopwords(["Appendix"]);
        let selector = TopicSelector::from_config(&config);
        let ranked = selector.rank(phrases(&[("Appendix", 4), ("Graphs", 1)]));
        assert_eq!(ranked, vec!["Graphs"]);
    }
}
