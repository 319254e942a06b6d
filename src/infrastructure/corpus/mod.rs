//! Corpus loading
//!
//! Reads plain-text corpora and splits them into paragraph chunks.

pub mod paragraph;

pub use paragraph::{split_paragraphs, ParagraphFileSource};
