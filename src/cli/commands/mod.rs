//! CLI command implementations.

pub mod ask;
pub mod chat;
pub mod chunks;
pub mod config;

use anyhow::{Context, Result};

use crate::domain::models::Config;
use crate::domain::ports::ChunkSource;
use crate::infrastructure::corpus::ParagraphFileSource;
use crate::infrastructure::vector::CharHistogramEmbedder;
use crate::services::{KnowledgeBase, TemplateResponseFormatter};

/// Vectorizer for the configured alphabet size.
pub fn build_embedder(config: &Config) -> Result<CharHistogramEmbedder> {
    CharHistogramEmbedder::new(config.embedding.dimensions)
        .context("Failed to create character-histogram embedder")
}

/// Formatter for the configured response template.
pub fn build_formatter(config: &Config) -> TemplateResponseFormatter {
    TemplateResponseFormatter::new(&config.retrieval.response_template)
}

/// Chunk source for the configured corpus file.
pub fn corpus_source(config: &Config) -> ParagraphFileSource {
    ParagraphFileSource::new(&config.corpus.path)
}

/// Load and embed the configured corpus without progress output.
pub fn load_knowledge(config: &Config, embedder: &CharHistogramEmbedder) -> Result<KnowledgeBase> {
    let source = corpus_source(config);
    let chunks = KnowledgeBase::load_chunks(&source);
    Ok(KnowledgeBase::build(source.describe(), chunks, embedder)?)
}
