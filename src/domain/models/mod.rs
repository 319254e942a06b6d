//! Domain models

pub mod chunk;
pub mod config;
pub mod embedding;

pub use chunk::Chunk;
pub use config::{
    Config, CorpusConfig, EmbeddingConfig, LoggingConfig, RetrievalConfig,
    DEFAULT_NO_MATCH_MESSAGE, DEFAULT_RESPONSE_TEMPLATE,
};
pub use embedding::{Answer, Embedding, Neighbor};
