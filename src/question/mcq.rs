//! Multiple-choice construction
//!
//! Distractors are the other topics sharing the most words with the target.
//! When fewer than three exist, inflected copies of the target ("…s",
//! "…ing") fill the gap. The random source is injected so a seeded
//! generator reproduces the exact option order.

use crate::types::MultipleChoice;
use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashSet;

/// Number of incorrect options per item
pub const DISTRACTOR_COUNT: usize = 3;

/// Stem for a multiple-choice item about `target`
pub fn stem(target: &str) -> String {
    format!("Which of the following best describes {target}?")
}

/// Number of words of `candidate` (lowercased, duplicates counted) that
/// also occur in `target_words`
pub fn word_overlap(target_words: &FxHashSet<String>, candidate: &str) -> usize {
    candidate
        .split_whitespace()
        .filter(|w| target_words.contains(&w.to_lowercase()))
        .count()
}

/// Up to three other topics ranked by word overlap with `target`.
///
/// Topics equal to the target ignoring case are excluded; equal overlaps
/// keep topic order.
pub fn rank_distractors(target: &str, topics: &[String]) -> Vec<String> {
    let target_lower = target.to_lowercase();
    let target_words: FxHashSet<String> = target_lower
        .split_whitespace()
        .map(str::to_string)
        .collect();

    let mut scored: Vec<(usize, &String)> = topics
        .iter()
        .filter(|t| t.to_lowercase() != target_lower)
        .map(|t| (word_overlap(&target_words, t), t))
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    scored
        .into_iter()
        .take(DISTRACTOR_COUNT)
        .map(|(_, t)| t.clone())
        .collect()
}

/// Builds multiple-choice items with an injected random source
#[derive(Debug, Clone)]
pub struct MultipleChoiceBuilder<R: Rng> {
    rng: R,
}

impl<R: Rng> MultipleChoiceBuilder<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Build an item for `target`, drawing distractors from `topics`.
    ///
    /// Options are the target plus three distractors, shuffled uniformly.
    pub fn build(&mut self, target: &str, topics: &[String]) -> MultipleChoice {
        let rng = &mut self.rng;
        let mut ranked = rank_distractors(target, topics).into_iter();
        let distractors: [String; DISTRACTOR_COUNT] = std::array::from_fn(|_| {
            ranked.next().unwrap_or_else(|| {
                let suffix = if rng.gen_bool(0.5) { "s" } else { "ing" };
                format!("{target}{suffix}")
            })
        });

        let [d0, d1, d2] = distractors;
        let mut options = [target.to_string(), d0, d1, d2];
        options.shuffle(&mut self.rng);

        MultipleChoice {
            stem: stem(target),
            options,
            answer: target.to_string(),
        }
    }
}
