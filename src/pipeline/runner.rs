//! Pipeline runner
//!
//! [`QuestionPipeline`] owns one instance of every stage and threads the
//! intermediate values through them in order:
//!
//! ```text
//! raw ─▶ normalize ─▶ segment ─▶ mine ─▶ select topics ─▶ synthesize
//!     ─▶ dedup ─▶ score ─▶ assemble (pad + correct) ─▶ questions
//! ```
//!
//! Every early exit is a [`QuizError`]; [`QuestionPipeline::run`] maps it to
//! its single-message sentinel list so callers always get 1..=10 strings.

use crate::correction::{GrammarCorrector, NoopCorrector};
use crate::errors::{QuizError, Result};
use crate::nlp::normalizer::Normalizer;
use crate::nlp::segmenter::Segmenter;
use crate::phrase::miner::PhraseMiner;
use crate::phrase::topics::TopicSelector;
use crate::pipeline::assembler::OutputAssembler;
use crate::question::dedup::Deduplicator;
use crate::question::mcq::MultipleChoiceBuilder;
use crate::question::scorer::QuestionScorer;
use crate::question::synthesizer::QuestionSynthesizer;
use crate::types::{QuizConfig, ScoredQuestion};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

pub const STAGE_NORMALIZE: &str = "normalize";
pub const STAGE_SEGMENT: &str = "segment";
pub const STAGE_MINE: &str = "mine";
pub const STAGE_TOPICS: &str = "topics";
pub const STAGE_SYNTHESIZE: &str = "synthesize";
pub const STAGE_RANK: &str = "rank";
pub const STAGE_ASSEMBLE: &str = "assemble";

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// Everything computed before the final assembly
#[derive(Debug, Clone, Serialize)]
pub struct Prepared {
    pub segments: Vec<String>,
    pub topics: Vec<String>,
    pub ranked: Vec<ScoredQuestion>,
}

/// Question generation pipeline
#[derive(Debug, Clone)]
pub struct QuestionPipeline<C = NoopCorrector> {
    config: QuizConfig,
    normalizer: Normalizer,
    segmenter: Segmenter,
    miner: PhraseMiner,
    selector: TopicSelector,
    synthesizer: QuestionSynthesizer,
    dedup: Deduplicator,
    scorer: QuestionScorer,
    assembler: OutputAssembler,
    corrector: C,
}

impl Default for QuestionPipeline<NoopCorrector> {
    fn default() -> Self {
        Self::new(QuizConfig::default())
    }
}

impl QuestionPipeline<NoopCorrector> {
    /// Pipeline without grammar correction
    pub fn new(config: QuizConfig) -> Self {
        Self::with_corrector(config, NoopCorrector)
    }
}

impl<C: GrammarCorrector> QuestionPipeline<C> {
    /// Pipeline using `corrector` for both correction passes
    pub fn with_corrector(config: QuizConfig, corrector: C) -> Self {
        Self {
            normalizer: Normalizer::new(),
            segmenter: Segmenter::new().with_min_chars(config.min_segment_chars),
            miner: PhraseMiner::new(),
            selector: TopicSelector::from_config(&config),
            synthesizer: QuestionSynthesizer::from_config(&config),
            dedup: Deduplicator::new(config.min_question_chars),
            scorer: QuestionScorer::new(),
            assembler: OutputAssembler::from_config(&config),
            corrector,
            config,
        }
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn corrector(&self) -> &C {
        &self.corrector
    }

    fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Run every stage up to and including scoring.
    pub fn prepare(&self, raw: &str) -> Result<Prepared> {
        self.config.validate()?;

        let raw_len = raw.trim().chars().count();
        if raw_len < self.config.min_raw_chars {
            return Err(QuizError::empty_input(format!(
                "{raw_len} characters after trimming"
            )));
        }

        let clean = {
            trace_stage!(STAGE_NORMALIZE);
            self.normalizer.normalize(raw)
        };
        let clean_len = clean.chars().count();
        debug!("normalized {} -> {} chars", raw.len(), clean_len);
        if clean_len < self.config.min_clean_chars {
            return Err(QuizError::insufficient_text(format!(
                "{clean_len} characters after cleanup"
            )));
        }

        let segments = {
            trace_stage!(STAGE_SEGMENT);
            self.segmenter.segment(&clean)
        };
        debug!("{} segments", segments.len());
        if segments.is_empty() {
            return Err(QuizError::no_segments("no segment with lexical content"));
        }

        let phrases = {
            trace_stage!(STAGE_MINE);
            self.miner.mine(&segments)
        };
        debug!("{} distinct candidate phrases", phrases.len());

        let topics = {
            trace_stage!(STAGE_TOPICS);
            self.selector.select(phrases, &segments)?
        };
        debug!("topics: {:?}", topics);

        let candidates = {
            trace_stage!(STAGE_SYNTHESIZE);
            let mut mcq = MultipleChoiceBuilder::new(self.rng());
            self.synthesizer.synthesize(&topics, &segments, &mut mcq)
        };
        debug!("{} raw candidates", candidates.len());

        let ranked = {
            trace_stage!(STAGE_RANK);
            let deduped = self.dedup.dedup(candidates);
            debug!("{} candidates after dedup", deduped.len());
            self.scorer.rank(deduped, self.config.target_count)
        };

        Ok(Prepared {
            segments,
            topics,
            ranked,
        })
    }

    /// Generate questions, surfacing the reason for an early exit.
    pub fn try_run(&self, raw: &str) -> Result<Vec<String>> {
        let prepared = self.prepare(raw)?;

        trace_stage!(STAGE_ASSEMBLE);
        let questions =
            self.assembler
                .assemble(prepared.ranked, &prepared.segments, &self.corrector)?;
        info!(
            "generated {} questions from {} topics ({})",
            questions.len(),
            prepared.topics.len(),
            self.corrector.name()
        );
        Ok(questions)
    }

    /// Generate questions; early exits become a one-element sentinel list.
    pub fn run(&self, raw: &str) -> Vec<String> {
        match self.try_run(raw) {
            Ok(questions) => questions,
            Err(e) => {
                info!("generation stopped: {e}");
                vec![e.sentinel().to_string()]
            }
        }
    }
}
