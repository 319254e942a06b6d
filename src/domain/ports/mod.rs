//! Domain ports (trait seams to infrastructure)

pub mod chunk_source;
pub mod embedding;
pub mod response_formatter;

pub use chunk_source::ChunkSource;
pub use embedding::EmbeddingService;
pub use response_formatter::ResponseFormatter;
