//! Error types for quizrank
//!
//! Every early exit of the pipeline is an error variant here. The public
//! entry points never surface them: each variant that halts generation maps
//! to a fixed sentinel message via [`QuizError::sentinel`].

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, QuizError>;

/// Sentinel for input that is empty or too short to be a document.
pub const SENTINEL_EMPTY_FILE: &str = "File seems empty or unreadable.";
/// Sentinel for cleaned text below the minimum length.
pub const SENTINEL_NOT_ENOUGH_TEXT: &str = "Not enough readable text found.";
/// Sentinel for text with no usable segments.
pub const SENTINEL_NO_SEGMENTS: &str = "No readable content found to generate questions.";
/// Sentinel for text where neither ranking nor fallback yields a topic.
pub const SENTINEL_NO_TOPICS: &str =
    "Could not identify meaningful topics for question generation.";
/// Sentinel for an empty final list.
pub const SENTINEL_NO_QUESTIONS: &str = "No suitable content found to generate questions.";

/// Main error type for quizrank
#[derive(Error, Debug, Clone)]
pub enum QuizError {
    /// Raw input is empty or shorter than the minimum document length
    #[error("Empty input: {message}")]
    EmptyInput { message: String },

    /// Cleaned text is below the minimum readable length
    #[error("Insufficient text: {message}")]
    InsufficientText { message: String },

    /// No segment survived the lexical content filter
    #[error("No segments: {message}")]
    NoSegments { message: String },

    /// Neither phrase ranking nor the fallback produced a topic
    #[error("No topics: {message}")]
    NoTopics { message: String },

    /// Assembly produced an empty list
    #[error("No questions: {message}")]
    NoQuestions { message: String },

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl QuizError {
    /// Create an empty input error
    pub fn empty_input(message: impl Into<String>) -> Self {
        Self::EmptyInput {
            message: message.into(),
        }
    }

    /// Create an insufficient text error
    pub fn insufficient_text(message: impl Into<String>) -> Self {
        Self::InsufficientText {
            message: message.into(),
        }
    }

    /// Create a no segments error
    pub fn no_segments(message: impl Into<String>) -> Self {
        Self::NoSegments {
            message: message.into(),
        }
    }

    /// Create a no topics error
    pub fn no_topics(message: impl Into<String>) -> Self {
        Self::NoTopics {
            message: message.into(),
        }
    }

    /// Create a no questions error
    pub fn no_questions(message: impl Into<String>) -> Self {
        Self::NoQuestions {
            message: message.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// The user-facing message returned in place of questions.
    ///
    /// Configuration and serialization errors are not content
    /// problems; they fall back to the generic "no suitable content" message.
    pub fn sentinel(&self) -> &'static str {
        match self {
            Self::EmptyInput { .. } => SENTINEL_EMPTY_FILE,
            Self::InsufficientText { .. } => SENTINEL_NOT_ENOUGH_TEXT,
            Self::NoSegments { .. } => SENTINEL_NO_SEGMENTS,
            Self::NoTopics { .. } => SENTINEL_NO_TOPICS,
            Self::NoQuestions { .. }
            | Self::InvalidConfig { .. }
            | Self::Serialization { .. } => SENTINEL_NO_QUESTIONS,
        }
    }

    /// Check if this error halts the pipeline because of the input content
    /// (as opposed to a misconfiguration)
    pub fn is_content_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput { .. }
                | Self::InsufficientText { .. }
                | Self::NoSegments { .. }
                | Self::NoTopics { .. }
                | Self::NoQuestions { .. }
        )
    }
}

impl From<serde_json::Error> for QuizError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
