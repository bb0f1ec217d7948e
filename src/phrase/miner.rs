//! Candidate phrase mining
//!
//! Each segment is run through four extractors:
//!
//! - [`CapitalizedRuns`]: 1–5 consecutive capitalized words ("Binary Search Tree")
//! - [`TechnicalTokens`]: acronyms and camel-case tokens ("HTTP", "JavaScript")
//! - [`SlidingNgrams`]: every 1–4 token window of the segment
//! - [`LongWords`]: alphabetic words of six or more letters
//!
//! Proposals are deduplicated within the segment, then every distinct phrase
//! adds [`phrase_weight`] to its global total once per segment.

use crate::nlp::tokenizer::{
    has_alpha_word, is_alpha_word, is_capitalized_word, is_technical_token, strip_to_word_chars,
    word_spans,
};
use crate::types::WeightedPhrase;
use rustc_hash::{FxHashMap, FxHashSet};

/// Weight ceiling for a single phrase occurrence
pub const MAX_PHRASE_WEIGHT: u32 = 5;

/// Weight contributed by one segment proposing `phrase`:
/// `min(5, number of words)`. Longer phrases are preferred up to five words.
pub fn phrase_weight(phrase: &str) -> u32 {
    let words = phrase.split_whitespace().count() as u32;
    words.min(MAX_PHRASE_WEIGHT)
}

// ============================================================================
// Per-segment candidate set
// ============================================================================

/// Insertion-ordered set of phrases proposed for one segment
#[derive(Debug, Default)]
pub struct SegmentCandidates {
    seen: FxHashSet<String>,
    phrases: Vec<String>,
}

impl SegmentCandidates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a phrase unless it was already proposed for this segment
    pub fn insert(&mut self, phrase: &str) {
        let phrase = phrase.trim();
        if phrase.is_empty() || self.seen.contains(phrase) {
            return;
        }
        self.seen.insert(phrase.to_string());
        self.phrases.push(phrase.to_string());
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.phrases
    }
}

// ============================================================================
// Extractors
// ============================================================================

/// Proposes candidate phrases for a single segment.
///
/// # Contract
///
/// - **Input**: one trimmed segment of normalized text.
/// - **Output**: phrases pushed into the shared [`SegmentCandidates`]; the
///   set handles deduplication.
/// - **Deterministic**: same segment → same proposals in the same order.
pub trait CandidateExtractor {
    fn extract(&self, segment: &str, out: &mut SegmentCandidates);
}

/// Runs of capitalized words separated only by whitespace.
///
/// Runs longer than `max_words` are cut into consecutive pieces of at most
/// `max_words` words.
#[derive(Debug, Clone, Copy)]
pub struct CapitalizedRuns {
    pub max_words: usize,
}

impl Default for CapitalizedRuns {
    fn default() -> Self {
        Self { max_words: 5 }
    }
}

impl CandidateExtractor for CapitalizedRuns {
    fn extract(&self, segment: &str, out: &mut SegmentCandidates) {
        let spans = word_spans(segment);
        let mut run: Vec<(usize, usize)> = Vec::new();

        for span in &spans {
            let joins_run = match run.last() {
                Some(&(_, prev_end)) => {
                    let gap = &segment[prev_end..span.start];
                    !gap.is_empty() && gap.chars().all(char::is_whitespace)
                }
                None => true,
            };

            if !is_capitalized_word(span.text) {
                self.flush(segment, &mut run, out);
                continue;
            }
            if !joins_run || run.len() == self.max_words {
                self.flush(segment, &mut run, out);
            }
            run.push((span.start, span.end));
        }
        self.flush(segment, &mut run, out);
    }
}

impl CapitalizedRuns {
    fn flush(&self, segment: &str, run: &mut Vec<(usize, usize)>, out: &mut SegmentCandidates) {
        if let (Some(&(start, _)), Some(&(_, end))) = (run.first(), run.last()) {
            out.insert(&segment[start..end]);
        }
        run.clear();
    }
}

/// Acronyms and mixed-case identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct TechnicalTokens;

impl CandidateExtractor for TechnicalTokens {
    fn extract(&self, segment: &str, out: &mut SegmentCandidates) {
        for span in word_spans(segment) {
            if is_technical_token(span.text) {
                out.insert(span.text);
            }
        }
    }
}

/// Contiguous windows of 1..=`max_len` whitespace tokens.
///
/// Tokens are stripped to word characters and hyphens; a token that strips
/// to nothing ends the window at that position. A window is proposed only
/// when it is longer than three characters and contains a whole alphabetic
/// word of three or more letters.
#[derive(Debug, Clone, Copy)]
pub struct SlidingNgrams {
    pub max_len: usize,
}

impl Default for SlidingNgrams {
    fn default() -> Self {
        Self { max_len: 4 }
    }
}

impl CandidateExtractor for SlidingNgrams {
    fn extract(&self, segment: &str, out: &mut SegmentCandidates) {
        let tokens: Vec<String> = segment
            .split_whitespace()
            .map(strip_to_word_chars)
            .collect();

        for i in 0..tokens.len() {
            let mut phrase = String::new();
            for token in tokens.iter().skip(i).take(self.max_len) {
                if token.is_empty() {
                    break;
                }
                if !phrase.is_empty() {
                    phrase.push(' ');
                }
                phrase.push_str(token);

                if phrase.len() > 3 && has_alpha_word(&phrase, 3) {
                    out.insert(&phrase);
                }
            }
        }
    }
}

/// Purely alphabetic words of at least `min_len` letters.
#[derive(Debug, Clone, Copy)]
pub struct LongWords {
    pub min_len: usize,
}

impl Default for LongWords {
    fn default() -> Self {
        Self { min_len: 6 }
    }
}

impl CandidateExtractor for LongWords {
    fn extract(&self, segment: &str, out: &mut SegmentCandidates) {
        for span in word_spans(segment) {
            if is_alpha_word(span.text, self.min_len) {
                out.insert(span.text);
            }
        }
    }
}

// ============================================================================
// Miner
// ============================================================================

/// Phrase miner combining the four extractors
#[derive(Debug, Clone, Copy, Default)]
pub struct PhraseMiner {
    capitalized: CapitalizedRuns,
    technical: TechnicalTokens,
    ngrams: SlidingNgrams,
    long_words: LongWords,
}

impl PhraseMiner {
    /// Create a miner with the default extractor settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Candidate set for one segment, in extractor order
    pub fn segment_candidates(&self, segment: &str) -> SegmentCandidates {
        let mut out = SegmentCandidates::new();
        self.capitalized.extract(segment, &mut out);
        self.technical.extract(segment, &mut out);
        self.ngrams.extract(segment, &mut out);
        self.long_words.extract(segment, &mut out);
        out
    }

    /// Mine all segments and aggregate weights.
    ///
    /// Phrases are returned in first-seen order; ranking is left to the
    /// topic selector.
    pub fn mine<S: AsRef<str>>(&self, segments: &[S]) -> Vec<WeightedPhrase> {
        let mut index: FxHashMap<String, usize> = FxHashMap::default();
        let mut phrases: Vec<WeightedPhrase> = Vec::new();

        for segment in segments {
            for phrase in self.segment_candidates(segment.as_ref()).into_vec() {
                let weight = phrase_weight(&phrase);
                match index.get(&phrase) {
                    Some(&i) => phrases[i].weight += weight,
                    None => {
                        index.insert(phrase.clone(), phrases.len());
                        let first_seen = phrases.len();
                        phrases.push(WeightedPhrase::new(phrase, weight, first_seen));
                    }
                }
            }
        }

        phrases
    }
}
