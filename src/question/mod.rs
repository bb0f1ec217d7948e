//! Question generation from topics
//!
//! - [`templates`]: fixed question phrasings
//! - [`mcq`]: multiple-choice items with injected randomness
//! - [`synthesizer`]: raw candidates per topic
//! - [`dedup`]: whitespace-normalized deduplication
//! - [`scorer`]: keyword and length heuristics

pub mod dedup;
pub mod mcq;
pub mod scorer;
pub mod synthesizer;
pub mod templates;
