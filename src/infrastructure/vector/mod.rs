//! Vector infrastructure components
//!
//! Provides the character-histogram embedder and the in-memory embedding
//! table used for nearest-chunk retrieval.

pub mod char_histogram;
pub mod embedding_table;

pub use char_histogram::CharHistogramEmbedder;
pub use embedding_table::EmbeddingTable;
