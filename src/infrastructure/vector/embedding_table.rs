//! In-memory embedding table with brute-force nearest-neighbor lookup
//!
//! Holds exactly one vector per chunk, stored positionally so the chunk index
//! is the slot. Lookup is a linear O(N·D) scan; there is no index structure.

use tracing::{debug, instrument};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Chunk, Embedding, Neighbor};
use crate::domain::ports::EmbeddingService;

/// Read-only mapping from chunk index to its embedding
#[derive(Debug, Clone)]
pub struct EmbeddingTable {
    dimensions: usize,
    entries: Vec<Embedding>,
}

impl EmbeddingTable {
    /// Embed every chunk and build the table
    ///
    /// Chunks must carry indices `0..n` in order.
    #[instrument(skip_all, fields(embedder = embedder.name(), chunks = chunks.len()))]
    pub fn build(embedder: &dyn EmbeddingService, chunks: &[Chunk]) -> DomainResult<Self> {
        for (expected, chunk) in chunks.iter().enumerate() {
            if chunk.index() != expected {
                return Err(DomainError::ChunkOrder {
                    expected,
                    actual: chunk.index(),
                });
            }
        }

        let dimensions = embedder.dimensions();
        let entries = embedder.embed_all(chunks)?;

        if entries.len() != chunks.len() {
            return Err(DomainError::EmbeddingFailed(format!(
                "{} returned {} embeddings for {} chunks",
                embedder.name(),
                entries.len(),
                chunks.len()
            )));
        }

        if let Some(bad) = entries.iter().find(|e| e.dimensions() != dimensions) {
            return Err(DomainError::DimensionMismatch {
                expected: dimensions,
                actual: bad.dimensions(),
            });
        }

        debug!(entries = entries.len(), dimensions, "embedding table built");
        Ok(Self {
            dimensions,
            entries,
        })
    }

    /// Cosine similarity between two unit-or-zero vectors
    ///
    /// Both inputs are already normalized, so this is the dot product. A zero
    /// vector scores 0 against everything.
    pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
        a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
    }

    /// Find the entry most similar to `query`
    ///
    /// Scans in index order and replaces the running best only on a strict
    /// improvement, so ties go to the lowest index. Returns `None` only for
    /// an empty table.
    pub fn nearest(&self, query: &Embedding) -> DomainResult<Option<Neighbor>> {
        if query.dimensions() != self.dimensions {
            return Err(DomainError::DimensionMismatch {
                expected: self.dimensions,
                actual: query.dimensions(),
            });
        }

        let mut best: Option<Neighbor> = None;
        let mut max_similarity = -1.0_f64;

        for (chunk_index, candidate) in self.entries.iter().enumerate() {
            let similarity = Self::cosine_similarity(query.as_slice(), candidate.as_slice());

            // The first entry always seeds the result, even at exactly -1
            if best.is_none() || similarity > max_similarity {
                max_similarity = similarity;
                best = Some(Neighbor {
                    chunk_index,
                    similarity,
                });
            }
        }

        Ok(best)
    }

    /// Embedding stored for a chunk index
    pub fn get(&self, chunk_index: usize) -> Option<&Embedding> {
        self.entries.get(chunk_index)
    }

    /// Vector dimension of every entry
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
