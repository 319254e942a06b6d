//! Embedding domain models
//!
//! Vectors, nearest-neighbor results, and answers for retrieval-augmented
//! responses. These models are independent of how vectors are produced.

use serde::{Deserialize, Serialize};

/// A fixed-length embedding vector
///
/// The L2 norm is always either exactly 0 (degenerate input) or 1 within
/// float tolerance. The constructors are the only way to build one, so every
/// `Embedding` in the system satisfies this.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Embedding(Vec<f64>);

impl Embedding {
    /// The all-zero vector of the given dimension
    pub fn zeros(dimensions: usize) -> Self {
        Self(vec![0.0; dimensions])
    }

    /// Build a unit vector from raw coordinates
    ///
    /// A zero-norm input is kept as the zero vector.
    pub fn normalized(mut values: Vec<f64>) -> Self {
        let magnitude = values.iter().map(|x| x * x).sum::<f64>().sqrt();

        if magnitude > 0.0 {
            for val in &mut values {
                *val /= magnitude;
            }
        }

        Self(values)
    }

    /// Number of coordinates
    pub fn dimensions(&self) -> usize {
        self.0.len()
    }

    /// Raw coordinates
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// L2 norm
    pub fn norm(&self) -> f64 {
        self.0.iter().map(|x| x * x).sum::<f64>().sqrt()
    }

    /// Returns true if every coordinate is zero
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|x| *x == 0.0)
    }
}

/// The chunk selected for a query, with its similarity score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    /// Index of the winning chunk
    pub chunk_index: usize,

    /// Cosine similarity to the query, in [-1, 1]
    pub similarity: f64,
}

/// Everything produced while answering a single question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    /// The original, unmodified question
    pub question: String,

    /// Context handed to the formatter (chunk text or the no-match message)
    pub context: String,

    /// Index of the retrieved chunk, if any
    pub chunk_index: Option<usize>,

    /// Similarity of the retrieved chunk, if any
    pub similarity: Option<f64>,

    /// Formatted response
    pub response: String,
}

impl Answer {
    /// Returns true if a chunk was retrieved for this question
    pub fn is_grounded(&self) -> bool {
        self.chunk_index.is_some()
    }
}
