//! Pipeline orchestration
//!
//! - [`runner`]: stage sequencing, early exits and sentinel mapping
//! - [`assembler`]: final list padding and grammar correction passes

pub mod assembler;
pub mod runner;

pub use assembler::OutputAssembler;
pub use runner::{Prepared, QuestionPipeline};
