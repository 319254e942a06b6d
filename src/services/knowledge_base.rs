//! Knowledge base: the loaded corpus and its embedding table
//!
//! Built once at startup and read-only afterwards. It is passed explicitly to
//! the retrieval pipeline rather than held as global state.

use tracing::{error, info, instrument};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::Chunk;
use crate::domain::ports::{ChunkSource, EmbeddingService};
use crate::infrastructure::vector::EmbeddingTable;

/// Loaded chunks plus one embedding per chunk
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    source: String,
    chunks: Vec<Chunk>,
    table: EmbeddingTable,
}

impl KnowledgeBase {
    /// Load chunks from a source, reporting failures as diagnostics
    ///
    /// An unreadable corpus yields an empty list; callers detect the
    /// emptiness and abort startup.
    pub fn load_chunks(source: &dyn ChunkSource) -> Vec<Chunk> {
        match source.load() {
            Ok(chunks) => chunks,
            Err(err) => {
                error!(source = %source.describe(), error = %err, "failed to load corpus");
                Vec::new()
            }
        }
    }

    /// Load chunks from a source and embed them
    pub fn load(source: &dyn ChunkSource, embedder: &dyn EmbeddingService) -> DomainResult<Self> {
        let chunks = Self::load_chunks(source);
        Self::build(source.describe(), chunks, embedder)
    }

    /// Embed already-loaded chunks
    ///
    /// Fails with [`DomainError::EmptyCorpus`] when there is nothing to retrieve.
    pub fn build(
        source: String,
        chunks: Vec<Chunk>,
        embedder: &dyn EmbeddingService,
    ) -> DomainResult<Self> {
        if chunks.is_empty() {
            return Err(DomainError::EmptyCorpus(source));
        }

        Self::index(source, chunks, embedder)
    }

    /// Embed chunks without the startup emptiness check
    ///
    /// An empty knowledge base retrieves nothing, so every answer falls back
    /// to the pipeline's no-match context.
    #[instrument(skip_all, fields(source = %source, chunks = chunks.len()))]
    pub fn index(
        source: String,
        chunks: Vec<Chunk>,
        embedder: &dyn EmbeddingService,
    ) -> DomainResult<Self> {
        let table = EmbeddingTable::build(embedder, &chunks)?;

        info!(
            chunks = chunks.len(),
            embedder = embedder.name(),
            dimensions = table.dimensions(),
            "knowledge base ready"
        );

        Ok(Self {
            source,
            chunks,
            table,
        })
    }

    /// Where the chunks came from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// All chunks in loading order
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Chunk by index
    pub fn chunk(&self, index: usize) -> Option<&Chunk> {
        self.chunks.get(index)
    }

    /// Embedding table for the chunks
    pub fn table(&self) -> &EmbeddingTable {
        &self.table
    }

    /// Number of chunks
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Returns true if there are no chunks (only possible via [`Self::index`])
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}
