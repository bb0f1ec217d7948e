//! Phrase mining and topic selection
//!
//! This module proposes weighted candidate phrases for every segment and
//! ranks them into the topic list that drives question synthesis.

pub mod miner;
pub mod topics;
