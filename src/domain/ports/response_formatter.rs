//! Response formatter port.
//!
//! Stands in for a generation backend: it receives the original question and
//! the full retrieved context and renders the reply.

/// Renders a reply from a question and its retrieved context.
pub trait ResponseFormatter: Send + Sync {
    /// Render a response. Must be deterministic and side-effect free.
    fn format(&self, question: &str, context: &str) -> String;
}
