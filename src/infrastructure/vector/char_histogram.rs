//! Character-histogram embedding service
//!
//! Maps text to a bag-of-characters frequency vector over a bounded alphabet
//! of character codes, then L2-normalizes it. This is not a semantic
//! embedding. It only provides the `text -> fixed-length unit vector`
//! contract, so a model-backed embedder can replace it later.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::Embedding;
use crate::domain::ports::EmbeddingService;

/// Character-frequency embedder
///
/// Dimension `D` doubles as the alphabet size: a character contributes to
/// coordinate `c` when its lower-cased code point `c` is in `[0, D)`.
/// Anything else is ignored.
#[derive(Debug, Clone, Copy)]
pub struct CharHistogramEmbedder {
    dimensions: usize,
}

impl CharHistogramEmbedder {
    /// Dimension used when none is configured (the 8-bit code range)
    pub const DEFAULT_DIMENSIONS: usize = 256;

    /// Create a new embedder over an alphabet of `dimensions` character codes
    pub fn new(dimensions: usize) -> DomainResult<Self> {
        if dimensions == 0 {
            return Err(DomainError::InvalidDimensions(dimensions));
        }

        tracing::debug!(dimensions, "character histogram embedder created");
        Ok(Self { dimensions })
    }

    /// Raw per-character counts for the lower-cased text
    pub fn histogram(&self, text: &str) -> Vec<f64> {
        let mut counts = vec![0.0_f64; self.dimensions];

        for c in text.to_lowercase().chars() {
            if let Some(slot) = counts.get_mut(u32::from(c) as usize) {
                *slot += 1.0;
            }
        }

        counts
    }

    /// Normalized embedding for the text
    pub fn generate(&self, text: &str) -> Embedding {
        Embedding::normalized(self.histogram(text))
    }
}

impl Default for CharHistogramEmbedder {
    fn default() -> Self {
        Self {
            dimensions: Self::DEFAULT_DIMENSIONS,
        }
    }
}

impl EmbeddingService for CharHistogramEmbedder {
    fn name(&self) -> &'static str {
        "char-histogram"
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn embed(&self, text: &str) -> DomainResult<Embedding> {
        Ok(self.generate(text))
    }
}
