//! docchat - Document Analysis Chatbot
//!
//! docchat answers questions about a plain-text document. The document is
//! split into paragraph chunks, each chunk is embedded as an L2-normalized
//! character histogram, and each question is matched to its single most
//! similar chunk by cosine similarity. The retrieved chunk is rendered into a
//! response template in place of a language-model call.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Models, errors, and the ports
//!   (`EmbeddingService`, `ChunkSource`, `ResponseFormatter`)
//! - **Infrastructure Layer** (`infrastructure`): Corpus loading, the
//!   character-histogram vectorizer, the embedding table, configuration and logging
//! - **Service Layer** (`services`): Knowledge base construction and the
//!   retrieval pipeline
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```
//! use docchat::domain::models::Chunk;
//! use docchat::infrastructure::vector::CharHistogramEmbedder;
//! use docchat::services::{KnowledgeBase, RetrievalPipeline, TemplateResponseFormatter};
//!
//! # fn main() -> Result<(), docchat::DomainError> {
//! let embedder = CharHistogramEmbedder::default();
//! let chunks = vec![Chunk::new(0, "apple pie"), Chunk::new(1, "banana bread")];
//! let knowledge = KnowledgeBase::build("inline".to_string(), chunks, &embedder)?;
//!
//! let formatter = TemplateResponseFormatter::new("{context}");
//! let pipeline = RetrievalPipeline::new(&knowledge, &embedder, &formatter);
//! assert_eq!(pipeline.answer("apple pie")?, "apple pie");
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{Answer, Chunk, Config, Embedding, Neighbor};
pub use domain::ports::{ChunkSource, EmbeddingService, ResponseFormatter};
pub use domain::{DomainError, DomainResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::corpus::{split_paragraphs, ParagraphFileSource};
pub use infrastructure::vector::{CharHistogramEmbedder, EmbeddingTable};
pub use services::{KnowledgeBase, RetrievalPipeline, TemplateResponseFormatter};
