//! Heuristic question scoring
//!
//! Keyword groups reward definitional, applied and comparative questions;
//! shorter questions get a small bonus. Matching is a case-insensitive
//! substring test.

use crate::types::ScoredQuestion;

/// A keyword group and the points it awards when any member matches
#[derive(Debug, Clone, Copy)]
pub struct KeywordGroup {
    pub keywords: &'static [&'static str],
    pub points: u32,
}

impl KeywordGroup {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

pub const DEFINITIONAL: KeywordGroup = KeywordGroup {
    keywords: &["define", "what is", "explain", "describe", "how does", "how is"],
    points: 5,
};

pub const APPLIED: KeywordGroup = KeywordGroup {
    keywords: &["example", "real world", "applied", "apply"],
    points: 3,
};

pub const COMPARATIVE: KeywordGroup = KeywordGroup {
    keywords: &["compare", "advantages", "disadvantages", "challenges", "fail"],
    points: 2,
};

/// Length bonus starts here and loses a point per `LENGTH_STEP` characters
pub const MAX_LENGTH_BONUS: u32 = 6;
pub const LENGTH_STEP: usize = 60;

/// Scores and ranks deduplicated candidates
#[derive(Debug, Clone)]
pub struct QuestionScorer {
    groups: Vec<KeywordGroup>,
}

impl Default for QuestionScorer {
    fn default() -> Self {
        Self {
            groups: vec![DEFINITIONAL, APPLIED, COMPARATIVE],
        }
    }
}

impl QuestionScorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score one question
    pub fn score(&self, question: &str) -> u32 {
        let lowered = question.to_lowercase();
        let keyword_points: u32 = self
            .groups
            .iter()
            .filter(|g| g.matches(&lowered))
            .map(|g| g.points)
            .sum();
        keyword_points + length_bonus(question)
    }

    /// Score every question, sort by score descending (stable), keep `top_k`
    pub fn rank(&self, questions: Vec<String>, top_k: usize) -> Vec<ScoredQuestion> {
        let mut scored: Vec<ScoredQuestion> = questions
            .into_iter()
            .map(|q| {
                let score = self.score(&q);
                ScoredQuestion::new(q, score)
            })
            .collect();
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(top_k);
        scored
    }
}

/// `max(0, 6 - floor(chars / 60))`
pub fn length_bonus(question: &str) -> u32 {
    let steps = question.chars().count() / LENGTH_STEP;
    MAX_LENGTH_BONUS.saturating_sub(steps as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_bonus() {
        assert_eq!(length_bonus("short"), 6);
        assert_eq!(length_bonus(&"x".repeat(59)), 6);
        assert_eq!(length_bonus(&"x".repeat(60)), 5);
        assert_eq!(length_bonus(&"x".repeat(1000)), 0);
    }

    #[test]
    fn test_keyword_groups() {
        let scorer = QuestionScorer::new();
        // define (5) + bonus 6
        assert_eq!(scorer.score("Define Heap."), 11);
        // how is (5) + applied (3) + bonus 6
        assert_eq!(scorer.score("How is Heap applied in practice?"), 14);
        // fail (2) + bonus 6
        assert_eq!(scorer.score("Why might Heap fail in certain situations?"), 8);
        // Case-insensitive.
        assert_eq!(scorer.score("WHAT IS A HEAP"), 11);
        assert_eq!(scorer.score("Why is Heap important?"), 6);
    }

    #[test]
    fn test_group_counts_once() {
        let scorer = QuestionScorer::new();
        // "define" and "explain" both belong to the same group.
        assert_eq!(scorer.score("Define and explain X"), 11);
    }

    #[test]
    fn test_rank_stable_and_truncated() {
        let scorer = QuestionScorer::new();
        let ranked = scorer.rank(
            vec![
                "Why is A important?".to_string(),
                "Define A.".to_string(),
                "Why is B important?".to_string(),
                "Define B.".to_string(),
            ],
            3,
        );
        let texts: Vec<_> = ranked.iter().map(|q| q.text.as_str()).collect();
        assert_eq!(texts, vec!["Define A.", "Define B.", "Why is A important?"]);
    }
}
