//! Embedding provider port for vector generation.
//!
//! Defines the trait for embedders that convert text into fixed-length
//! normalized vectors. The retrieval core only depends on this contract, so
//! a model-backed embedder can replace the character histogram.

use crate::domain::errors::DomainResult;
use crate::domain::models::{Chunk, Embedding};

/// Trait for embedding providers
pub trait EmbeddingService: Send + Sync {
    /// Provider name (e.g., "char-histogram").
    fn name(&self) -> &'static str;

    /// Embedding dimension for this provider.
    fn dimensions(&self) -> usize;

    /// Generate an embedding for a single text.
    ///
    /// The result must have `dimensions()` coordinates and a norm of 0 or 1.
    fn embed(&self, text: &str) -> DomainResult<Embedding>;

    /// Generate embeddings for every chunk, in input order.
    fn embed_all(&self, chunks: &[Chunk]) -> DomainResult<Vec<Embedding>> {
        chunks.iter().map(|chunk| self.embed(chunk.content())).collect()
    }
}
