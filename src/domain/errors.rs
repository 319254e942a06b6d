//! Domain errors for the docchat retrieval core.

use std::path::PathBuf;

use thiserror::Error;

/// Domain-level errors that can occur while building or querying the corpus.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Error reading document file {}: {source}", .path.display())]
    CorpusUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No documents were loaded. Please check the '{0}' file.")]
    EmptyCorpus(String),

    #[error("Invalid embedding dimensions: {0}. Must be at least 1")]
    InvalidDimensions(usize),

    #[error("Embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Chunk out of order: expected index {expected}, got {actual}")]
    ChunkOrder { expected: usize, actual: usize },

    #[error("Embedding failed: {0}")]
    EmbeddingFailed(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
