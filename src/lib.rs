//! # quizrank
//!
//! Heuristic study-question generation from lecture notes and slides.
//!
//! Text is cleaned of page furniture, split into sentence-like segments and
//! mined for weighted candidate phrases. The strongest phrases become topics,
//! each topic is expanded through fixed templates (definitions, applications,
//! multiple choice, fill-in-the-blank), and the candidates are deduplicated,
//! scored, padded and optionally grammar-corrected into a list of at most
//! ten questions.
//!
//! ## Features
//!
//! - **Never fails**: every early exit maps to a one-line sentinel message
//! - **Reproducible**: multiple-choice randomness comes from a seedable RNG
//! - **Pluggable correction**: any [`GrammarCorrector`]; LanguageTool ships in
//!   the box and batches run concurrently without reordering output
//!
//! ```no_run
//! let questions = quizrank::generate("Binary Search Trees are a fundamental Data Structure \
//!     used in Computer Science. A Binary Search Tree allows efficient Lookup.");
//! assert!(!questions.is_empty() && questions.len() <= 10);
//! ```

pub mod correction;
pub mod errors;
pub mod extract;
pub mod nlp;
pub mod phrase;
pub mod pipeline;
pub mod question;
pub mod render;
pub mod types;

// Re-export commonly used types
pub use errors::{QuizError, Result};
pub use types::{MultipleChoice, QuizConfig, ScoredQuestion, WeightedPhrase};

// Re-export main functionality
pub use correction::{
    correct_batch, CorrectionError, GrammarCorrector, LanguageToolCorrector, NoopCorrector,
};
pub use extract::{extract_file, AutoExtractor, PlainTextExtractor, TextExtractor};
pub use nlp::{normalizer::Normalizer, segmenter::Segmenter, stopwords::Stoplist};
pub use phrase::{miner::PhraseMiner, topics::TopicSelector};
pub use pipeline::{OutputAssembler, Prepared, QuestionPipeline};
pub use question::{
    dedup::Deduplicator, mcq::MultipleChoiceBuilder, scorer::QuestionScorer,
    synthesizer::QuestionSynthesizer,
};
pub use render::{render, OutputFormat};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generate questions from raw text with default settings and no grammar
/// correction.
///
/// Always returns between 1 and 10 strings; when the text cannot support
/// questions the single element is a sentinel message.
pub fn generate(text: &str) -> Vec<String> {
    QuestionPipeline::default().run(text)
}

/// Generate questions with an explicit config and corrector
pub fn generate_with<C: GrammarCorrector>(
    text: &str,
    config: QuizConfig,
    corrector: C,
) -> Vec<String> {
    QuestionPipeline::with_corrector(config, corrector).run(text)
}
