//! Raw candidate generation
//!
//! Walks the topic list in rank order. Every topic yields a templated
//! question and an alternating practice/failure question; every third topic
//! adds a multiple-choice item and the topic after it a fill-in-the-blank.

use crate::question::mcq::MultipleChoiceBuilder;
use crate::question::templates;
use crate::types::QuizConfig;
use rand::Rng;
use regex::{NoExpand, RegexBuilder};

/// Turns topics into raw question candidates
#[derive(Debug, Clone)]
pub struct QuestionSynthesizer {
    max_candidates: usize,
    soft_cap: usize,
}

impl Default for QuestionSynthesizer {
    fn default() -> Self {
        Self::from_config(&QuizConfig::default())
    }
}

impl QuestionSynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &QuizConfig) -> Self {
        Self {
            max_candidates: config.max_candidates,
            soft_cap: config.candidate_soft_cap,
        }
    }

    /// Generate candidates for `topics`.
    ///
    /// Iteration stops before a topic once the soft cap is reached; the
    /// result never exceeds the hard cap.
    pub fn synthesize<R: Rng, S: AsRef<str>>(
        &self,
        topics: &[String],
        segments: &[S],
        mcq: &mut MultipleChoiceBuilder<R>,
    ) -> Vec<String> {
        let mut candidates = Vec::with_capacity(self.max_candidates);

        for (i, topic) in topics.iter().enumerate() {
            if candidates.len() >= self.soft_cap {
                break;
            }

            candidates.push(templates::primary(i, topic));
            candidates.push(templates::alternating(i, topic));

            match i % 3 {
                0 => candidates.push(mcq.build(topic, topics).to_string()),
                1 => candidates.push(
                    fill_in_blank(topic, segments)
                        .unwrap_or_else(|| templates::explain_term(topic)),
                ),
                _ => {}
            }
        }

        candidates.truncate(self.max_candidates);
        candidates
    }
}

/// Fill-in-the-blank question from the first segment mentioning `topic` as
/// a whole word, ignoring case. Only the first match is blanked.
pub fn fill_in_blank<S: AsRef<str>>(topic: &str, segments: &[S]) -> Option<String> {
    let pattern = format!(r"\b{}\b", regex::escape(topic));
    let re = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .ok()?;

    segments
        .iter()
        .map(AsRef::as_ref)
        .find(|s| re.is_match(s))
        .map(|s| templates::fill_in_blank(&re.replace(s, NoExpand(templates::BLANK))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn builder() -> MultipleChoiceBuilder<StdRng> {
        MultipleChoiceBuilder::new(StdRng::seed_from_u64(3))
    }

    fn topics(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_fill_in_blank_first_match_only() {
        let segments = ["Nothing here.", "A heap is a tree; every Heap node is ordered."];
        let q = fill_in_blank("heap", &segments).unwrap();
        assert_eq!(
            q,
            "Fill in the blank: A ______ is a tree; every Heap node is ordered."
        );
    }

    #[test]
    fn test_fill_in_blank_whole_word() {
        let segments = ["Heaps are trees."];
        assert!(fill_in_blank("Heap", &segments).is_none());
    }

    #[test]
    fn test_fill_in_blank_escapes_topic() {
        let segments = ["Sorting (stable) keeps order of equal keys."];
        assert!(fill_in_blank("(stable", &segments).is_none());
        assert!(fill_in_blank("Sorting", &segments).is_some());
    }

    #[test]
    fn test_synthesize_pattern() {
        let all = topics(&["Heap", "Stack", "Queue"]);
        let segments = ["A Stack is LIFO."];
        let out = QuestionSynthesizer::new().synthesize(&all, &segments, &mut builder());

        assert_eq!(out.len(), 7);
        assert_eq!(out[0], "Define Heap.");
        assert_eq!(out[1], "How is Heap applied in practice?");
        assert!(out[2].starts_with("Which of the following best describes Heap?\nOptions: A. "));
        assert!(out[2].ends_with("\nAnswer: Heap"));
        assert_eq!(out[3], "What is Stack?");
        assert_eq!(out[4], "Why might Stack fail in certain situations?");
        assert_eq!(out[5], "Fill in the blank: A ______ is LIFO.");
        assert_eq!(out[6], "Explain the concept of Queue.");
    }

    #[test]
    fn test_explain_term_when_topic_absent() {
        let all = topics(&["Heap", "Stack"]);
        let out = QuestionSynthesizer::new().synthesize(&all, &["unrelated"], &mut builder());
        assert_eq!(out.last().unwrap(), "Explain the term: Stack");
    }

    #[test]
    fn test_soft_and_hard_caps() {
        let all: Vec<String> = (0..12).map(|i| format!("Topic{i}")).collect();
        let out = QuestionSynthesizer::new().synthesize(&all, &["none"], &mut builder());
        // Topics yield 3, 3, 2 candidates in turn: 16 after six topics, 19 after seven.
        assert_eq!(out.len(), 19);
    }

    #[test]
    fn test_empty_topics() {
        let out = QuestionSynthesizer::new().synthesize(&[], &["none"], &mut builder());
        assert!(out.is_empty());
    }
}
