//! Core types for quizrank
//!
//! This module defines the data structures that flow between pipeline
//! stages: weighted candidate phrases, multiple-choice items, scored
//! questions, and the pipeline configuration.

use crate::errors::{QuizError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Weighted Phrase
// ============================================================================

/// A candidate phrase with its aggregated weight across all segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedPhrase {
    /// The phrase text as it appeared in the segment
    pub text: String,
    /// Sum of `phrase_weight` over every segment proposing this phrase
    pub weight: u32,
    /// Order in which the phrase was first proposed (0-indexed)
    pub first_seen: usize,
}

impl WeightedPhrase {
    /// Create a new phrase
    pub fn new(text: impl Into<String>, weight: u32, first_seen: usize) -> Self {
        Self {
            text: text.into(),
            weight,
            first_seen,
        }
    }

    /// Stable tie-breaker comparator for deterministic topic ranking.
    ///
    /// 1. **Weight** descending (primary)
    /// 2. **First occurrence** ascending
    /// 3. **Text** lexicographic ascending
    pub fn stable_cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| self.first_seen.cmp(&other.first_seen))
            .then_with(|| self.text.cmp(&other.text))
    }
}

// ============================================================================
// Multiple Choice
// ============================================================================

/// Letters used to label the four options.
pub const OPTION_LETTERS: [char; 4] = ['A', 'B', 'C', 'D'];

/// A structured multiple-choice item.
///
/// Only lives between the MCQ builder and the synthesizer; once emitted the
/// item is carried as its rendered text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultipleChoice {
    /// Question stem
    pub stem: String,
    /// Exactly four options, one of which equals `answer`
    pub options: [String; 4],
    /// The correct option text
    pub answer: String,
}

impl MultipleChoice {
    /// Index of the correct option, if present
    pub fn answer_index(&self) -> Option<usize> {
        self.options.iter().position(|o| *o == self.answer)
    }

    /// Letter of the correct option, if present
    pub fn answer_letter(&self) -> Option<char> {
        self.answer_index().map(|i| OPTION_LETTERS[i])
    }
}

impl fmt::Display for MultipleChoice {
    /// `<stem>\nOptions: A. <o0> | B. <o1> | C. <o2> | D. <o3>\nAnswer: <answer>`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\nOptions: ", self.stem)?;
        for (i, (letter, option)) in OPTION_LETTERS.iter().zip(&self.options).enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{}. {}", letter, option)?;
        }
        write!(f, "\nAnswer: {}", self.answer)
    }
}

// ============================================================================
// Scored Question
// ============================================================================

/// A deduplicated question paired with its heuristic score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredQuestion {
    pub text: String,
    pub score: u32,
}

impl ScoredQuestion {
    pub fn new(text: impl Into<String>, score: u32) -> Self {
        Self {
            text: text.into(),
            score,
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for question generation
///
/// Every field has a serde default so partial JSON files load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Number of questions in the final list
    pub target_count: usize,
    /// Raw trimmed input shorter than this is treated as an empty file
    pub min_raw_chars: usize,
    /// Cleaned text shorter than this halts generation
    pub min_clean_chars: usize,
    /// Segments must be strictly longer than this
    pub min_segment_chars: usize,
    /// Lower bound used when sizing the topic list
    pub min_topics: usize,
    /// Upper bound on the topic list
    pub max_topics: usize,
    /// Size of the long-word fallback topic list
    pub fallback_topics: usize,
    /// Hard cap on raw candidates
    pub max_candidates: usize,
    /// Synthesis stops once this many candidates accumulated
    pub candidate_soft_cap: usize,
    /// Questions must be strictly longer than this after normalization
    pub min_question_chars: usize,
    /// Segments considered for padding prompts
    pub padding_segments: usize,
    /// Truncation length for secondary fallback prompts
    pub fallback_prompt_chars: usize,
    /// A correction is accepted only with at least this many words
    pub min_corrected_words: usize,
    /// Maximum grammar corrections in flight
    pub correction_concurrency: usize,
    /// Seed for multiple-choice randomness (`None` = entropy)
    pub seed: Option<u64>,
    /// Additional topic stopwords (exact match)
    pub extra_stopwords: Vec<String>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            target_count: 10,
            min_raw_chars: 30,
            min_clean_chars: 50,
            min_segment_chars: 6,
            min_topics: 3,
            max_topics: 12,
            fallback_topics: 5,
            max_candidates: 20,
            candidate_soft_cap: 18,
            min_question_chars: 10,
            padding_segments: 10,
            fallback_prompt_chars: 120,
            min_corrected_words: 3,
            correction_concurrency: 4,
            seed: None,
            extra_stopwords: Vec::new(),
        }
    }
}

impl QuizConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.target_count == 0 {
            return Err(QuizError::invalid_config("target_count must be > 0"));
        }

        if self.max_topics == 0 {
            return Err(QuizError::invalid_config("max_topics must be > 0"));
        }

        if self.min_topics > self.max_topics {
            return Err(QuizError::invalid_config(format!(
                "min_topics ({}) must be <= max_topics ({})",
                self.min_topics, self.max_topics
            )));
        }

        if self.candidate_soft_cap > self.max_candidates {
            return Err(QuizError::invalid_config(
                "candidate_soft_cap must be <= max_candidates",
            ));
        }

        if self.correction_concurrency == 0 {
            return Err(QuizError::invalid_config(
                "correction_concurrency must be > 0",
            ));
        }

        Ok(())
    }

    /// Builder method: set the final list size
    pub fn with_target_count(mut self, target_count: usize) -> Self {
        self.target_count = target_count;
        self
    }

    /// Builder method: set topic bounds
    pub fn with_topic_bounds(mut self, min_topics: usize, max_topics: usize) -> Self {
        self.min_topics = min_topics;
        self.max_topics = max_topics;
        self
    }

    /// Builder method: set the MCQ seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder method: set correction concurrency
    pub fn with_correction_concurrency(mut self, concurrency: usize) -> Self {
        self.correction_concurrency = concurrency;
        self
    }

    /// Builder method: add topic stopwords
    pub fn with_extra_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_stopwords.extend(words.into_iter().map(Into::into));
        self
    }
}
