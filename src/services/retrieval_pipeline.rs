//! Retrieval pipeline
//!
//! Embeds a question, finds the single most similar chunk, and hands the
//! chunk text to the response formatter. Each call is a fresh synchronous
//! computation with no caching and no retries.

use tracing::{debug, instrument};

use crate::domain::errors::DomainResult;
use crate::domain::models::{Answer, Neighbor, DEFAULT_NO_MATCH_MESSAGE};
use crate::domain::ports::{EmbeddingService, ResponseFormatter};
use crate::services::knowledge_base::KnowledgeBase;

/// Question answering over a borrowed knowledge base
///
/// `embedder` must be the embedder the knowledge base was built with (or one
/// producing the same dimension).
pub struct RetrievalPipeline<'a> {
    knowledge: &'a KnowledgeBase,
    embedder: &'a dyn EmbeddingService,
    formatter: &'a dyn ResponseFormatter,
    no_match_message: String,
}

impl<'a> RetrievalPipeline<'a> {
    /// Create a pipeline over the given collaborators
    pub fn new(
        knowledge: &'a KnowledgeBase,
        embedder: &'a dyn EmbeddingService,
        formatter: &'a dyn ResponseFormatter,
    ) -> Self {
        Self {
            knowledge,
            embedder,
            formatter,
            no_match_message: DEFAULT_NO_MATCH_MESSAGE.to_string(),
        }
    }

    /// Replace the context used when nothing is retrieved
    #[must_use]
    pub fn with_no_match_message(mut self, message: impl Into<String>) -> Self {
        self.no_match_message = message.into();
        self
    }

    /// The knowledge base this pipeline reads from
    pub fn knowledge(&self) -> &KnowledgeBase {
        self.knowledge
    }

    /// Embed the question and find its nearest chunk
    pub fn retrieve(&self, question: &str) -> DomainResult<Option<Neighbor>> {
        let query = self.embedder.embed(question)?;
        self.knowledge.table().nearest(&query)
    }

    /// Answer a question, keeping the intermediate retrieval results
    #[instrument(skip(self), fields(question_len = question.len()))]
    pub fn answer_with_details(&self, question: &str) -> DomainResult<Answer> {
        let neighbor = self.retrieve(question)?;

        let retrieved = neighbor.and_then(|n| {
            self.knowledge
                .chunk(n.chunk_index)
                .map(|chunk| (n, chunk.content()))
        });

        let context = retrieved.map_or(self.no_match_message.as_str(), |(_, text)| text);
        let response = self.formatter.format(question, context);

        debug!(
            chunk_index = ?retrieved.map(|(n, _)| n.chunk_index),
            similarity = ?retrieved.map(|(n, _)| n.similarity),
            "question answered"
        );

        Ok(Answer {
            question: question.to_string(),
            context: context.to_string(),
            chunk_index: retrieved.map(|(n, _)| n.chunk_index),
            similarity: retrieved.map(|(n, _)| n.similarity),
            response,
        })
    }

    /// Answer a question with the formatted response text
    pub fn answer(&self, question: &str) -> DomainResult<String> {
        self.answer_with_details(question)
            .map(|answer| answer.response)
    }
}
