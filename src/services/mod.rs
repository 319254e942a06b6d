//! Service layer
//!
//! Startup and per-question orchestration over the domain ports.

pub mod knowledge_base;
pub mod response_formatter;
pub mod retrieval_pipeline;

pub use knowledge_base::KnowledgeBase;
pub use response_formatter::TemplateResponseFormatter;
pub use retrieval_pipeline::RetrievalPipeline;
