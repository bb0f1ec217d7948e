//! Natural Language Processing components
//!
//! This module provides text cleanup, segmentation, the word scanner and the
//! topic stoplist.

pub mod normalizer;
pub mod segmenter;
pub mod stopwords;
pub mod tokenizer;
