//! LanguageTool HTTP corrector
//!
//! Posts `text` and `language` as a form to a `/v2/check` endpoint and
//! applies the first suggested replacement of every match.

use super::{CorrectionError, GrammarCorrector};
use log::debug;
use reqwest::blocking::Client;
use serde::{Deserialize, Deserializer};
use std::time::Duration;

/// Public LanguageTool check endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.languagetool.org/v2/check";
pub const DEFAULT_LANGUAGE: &str = "en-US";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// ============================================================================
// Response model
// ============================================================================

/// Body of a check response; only the fields used for splicing are decoded
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub matches: Vec<Match>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Match {
    pub offset: Option<usize>,
    pub length: Option<usize>,
    pub context: Option<MatchContext>,
    #[serde(default)]
    pub replacements: Vec<Replacement>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchContext {
    pub offset: Option<usize>,
    pub length: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Replacement {
    pub value: Option<String>,
}

/// A single splice, offsets in UTF-16 code units
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub start: usize,
    pub length: usize,
    pub replacement: String,
}

impl Match {
    /// Edit for this match: the context span when it is complete, otherwise
    /// the top-level span. `None` without a non-empty first replacement.
    pub fn to_edit(&self) -> Option<Edit> {
        let replacement = self
            .replacements
            .first()
            .and_then(|r| r.value.as_deref())
            .filter(|v| !v.is_empty())?;

        let context = self
            .context
            .as_ref()
            .and_then(|ctx| Some((ctx.offset?, ctx.length?)));
        let (start, length) = match context {
            Some(span) => span,
            None => (self.offset?, self.length?),
        };

        Some(Edit {
            start,
            length,
            replacement: replacement.to_string(),
        })
    }
}

// ============================================================================
// Splicing
// ============================================================================

/// Byte index of a UTF-16 offset, `None` when past the end or inside a
/// character
fn utf16_to_byte(text: &str, offset: usize) -> Option<usize> {
    let mut units = 0;
    for (idx, c) in text.char_indices() {
        if units == offset {
            return Some(idx);
        }
        if units > offset {
            return None;
        }
        units += c.len_utf16();
    }
    (units == offset).then_some(text.len())
}

/// Apply every usable match to `sentence`, latest start first so earlier
/// offsets stay valid.
pub fn apply_matches(sentence: &str, matches: &[Match]) -> String {
    let mut edits: Vec<Edit> = matches.iter().filter_map(Match::to_edit).collect();
    edits.sort_by(|a, b| b.start.cmp(&a.start));

    let mut corrected = sentence.to_string();
    for edit in edits {
        let start = utf16_to_byte(&corrected, edit.start);
        let end = utf16_to_byte(&corrected, edit.start + edit.length);
        match (start, end) {
            (Some(start), Some(end)) => corrected.replace_range(start..end, &edit.replacement),
            _ => debug!(
                "skipping out-of-range edit at {}+{} in {:?}",
                edit.start, edit.length, corrected
            ),
        }
    }
    corrected
}

// ============================================================================
// Client
// ============================================================================

/// Blocking LanguageTool client
#[derive(Debug, Clone)]
pub struct LanguageToolCorrector {
    client: Client,
    endpoint: String,
    language: String,
}

impl LanguageToolCorrector {
    /// Client for the public endpoint with the default timeout
    pub fn new() -> Result<Self, CorrectionError> {
        Self::with_endpoint(DEFAULT_ENDPOINT, DEFAULT_TIMEOUT)
    }

    /// Client for a self-hosted or alternative endpoint
    pub fn with_endpoint(
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, CorrectionError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            language: DEFAULT_LANGUAGE.to_string(),
        })
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn check(&self, sentence: &str) -> Result<CheckResponse, CorrectionError> {
        let response = self
            .client
            .post(&self.endpoint)
            .form(&[("text", sentence), ("language", self.language.as_str())])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(CorrectionError::Status(status.as_u16()));
        }
        Ok(response.json()?)
    }
}

impl GrammarCorrector for LanguageToolCorrector {
    fn correct(&self, sentence: &str) -> Result<String, CorrectionError> {
        let body = self.check(sentence)?;
        Ok(apply_matches(sentence, &body.matches))
    }

    fn name(&self) -> &str {
        "languagetool"
    }
}
