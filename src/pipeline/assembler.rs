//! Final list assembly
//!
//! Picks the top-ranked questions, pads from segments when too few survive,
//! runs two correction passes, and enforces the output size.

use crate::correction::{correct_batch, resolve_correction, GrammarCorrector};
use crate::errors::{QuizError, Result};
use crate::nlp::tokenizer::word_count;
use crate::types::{QuizConfig, ScoredQuestion};
use log::debug;
use unicode_segmentation::UnicodeSegmentation;

/// Padding prompt for the segment at `index` (even: summarize, odd: main idea)
pub fn padding_prompt(index: usize, segment: &str) -> String {
    if index % 2 == 0 {
        format!("Summarize the following: {segment}")
    } else {
        format!("What is the main idea of: {segment}")
    }
}

/// Secondary prompt with the segment cut to `max_chars` graphemes
pub fn main_point_prompt(segment: &str, max_chars: usize) -> String {
    let mut graphemes = segment.graphemes(true);
    let head: String = graphemes.by_ref().take(max_chars).collect();
    let ellipsis = if graphemes.next().is_some() { "..." } else { "" };
    format!("What is the main point of: {head}{ellipsis}")
}

/// Builds the final question list
#[derive(Debug, Clone)]
pub struct OutputAssembler {
    target_count: usize,
    padding_segments: usize,
    fallback_prompt_chars: usize,
    min_corrected_words: usize,
    concurrency: usize,
}

impl Default for OutputAssembler {
    fn default() -> Self {
        Self::from_config(&QuizConfig::default())
    }
}

impl OutputAssembler {
    pub fn from_config(config: &QuizConfig) -> Self {
        Self {
            target_count: config.target_count,
            padding_segments: config.padding_segments,
            fallback_prompt_chars: config.fallback_prompt_chars,
            min_corrected_words: config.min_corrected_words,
            concurrency: config.correction_concurrency,
        }
    }

    /// Top picks plus segment padding, before any correction
    pub fn pick<S: AsRef<str>>(&self, ranked: Vec<ScoredQuestion>, segments: &[S]) -> Vec<String> {
        let mut picked: Vec<String> = ranked
            .into_iter()
            .take(self.target_count)
            .map(|q| q.text)
            .collect();

        if picked.len() < self.target_count {
            for (i, segment) in segments.iter().take(self.padding_segments).enumerate() {
                if picked.len() >= self.target_count {
                    break;
                }
                let prompt = padding_prompt(i, segment.as_ref());
                if !picked.contains(&prompt) {
                    picked.push(prompt);
                }
            }
        }
        picked
    }

    /// Secondary prompts needed to reach the target, walking segments from
    /// the start and skipping prompts already present
    pub fn main_point_prompts<S: AsRef<str>>(
        &self,
        present: &[String],
        segments: &[S],
    ) -> Vec<String> {
        let needed = self.target_count.saturating_sub(present.len());
        let mut prompts: Vec<String> = Vec::with_capacity(needed);
        for segment in segments {
            if prompts.len() >= needed {
                break;
            }
            let prompt = main_point_prompt(segment.as_ref(), self.fallback_prompt_chars);
            if !present.contains(&prompt) && !prompts.contains(&prompt) {
                prompts.push(prompt);
            }
        }
        prompts
    }

    /// Assemble the final list.
    ///
    /// Primary picks keep a correction only when it has enough words;
    /// secondary prompts keep any non-empty correction. Each failed
    /// correction leaves its item as it was.
    pub fn assemble<C, S>(
        &self,
        ranked: Vec<ScoredQuestion>,
        segments: &[S],
        corrector: &C,
    ) -> Result<Vec<String>>
    where
        C: GrammarCorrector + ?Sized,
        S: AsRef<str>,
    {
        let picked = self.pick(ranked, segments);
        debug!("assembler picked {} items before correction", picked.len());

        let min_words = self.min_corrected_words;
        let mut output: Vec<String> = picked
            .iter()
            .zip(correct_batch(corrector, &picked, self.concurrency))
            .map(|(original, result)| {
                resolve_correction(original, result, |c| word_count(c) >= min_words)
            })
            .collect();

        if output.len() < self.target_count {
            let extra = self.main_point_prompts(&output, segments);
            debug!("assembler adding {} secondary prompts", extra.len());
            let corrected = correct_batch(corrector, &extra, self.concurrency);
            output.extend(
                extra
                    .iter()
                    .zip(corrected)
                    .map(|(original, result)| {
                        resolve_correction(original, result, |c| !c.is_empty())
                    }),
            );
        }

        output.truncate(self.target_count);
        if output.is_empty() {
            return Err(QuizError::no_questions("no candidates and no segments to pad from"));
        }
        Ok(output)
    }
}
