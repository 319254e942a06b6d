//! Common test utilities for integration tests
//!
//! Provides shared corpora and fixtures used across multiple integration
//! test files.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use docchat::domain::models::Chunk;
use docchat::infrastructure::vector::CharHistogramEmbedder;
use docchat::services::KnowledgeBase;

/// A small corpus with uneven paragraph spacing
pub const SAMPLE_CORPUS: &str = "\
Apple pie is a classic dessert made with sliced apples and cinnamon.

Banana bread is a moist quick bread made from mashed ripe bananas.


Sourdough relies on a fermented starter of flour and water.
   \t
Espresso is brewed by forcing hot water through finely ground coffee.
";

/// Create a temporary directory for test isolation
///
/// Returns a TempDir that will be cleaned up when dropped.
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Write `contents` to `documents/sample.txt` inside a new temporary directory
pub fn corpus_dir(contents: &str) -> (TempDir, PathBuf) {
    let dir = temp_dir();
    let documents = dir.path().join("documents");
    fs::create_dir_all(&documents).expect("Failed to create documents dir");
    let path = documents.join("sample.txt");
    fs::write(&path, contents).expect("Failed to write corpus");
    (dir, path)
}

/// Build a knowledge base directly from chunk texts
pub fn knowledge_from(texts: &[&str], embedder: &CharHistogramEmbedder) -> KnowledgeBase {
    let chunks = texts
        .iter()
        .enumerate()
        .map(|(i, text)| Chunk::new(i, *text))
        .collect();
    KnowledgeBase::build("inline".to_string(), chunks, embedder)
        .expect("Failed to build knowledge base")
}
