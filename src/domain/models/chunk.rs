//! Corpus chunk model
//!
//! A chunk is one unit of retrievable text, produced by splitting the corpus
//! on blank-line boundaries.

use serde::{Deserialize, Serialize};

/// A chunk of text extracted from the corpus
///
/// Immutable after creation; `index` is the position in loading order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    index: usize,
    content: String,
}

impl Chunk {
    /// Create a new chunk
    pub fn new(index: usize, content: impl Into<String>) -> Self {
        Self {
            index,
            content: content.into(),
        }
    }

    /// Position of this chunk in loading order (0-based)
    pub fn index(&self) -> usize {
        self.index
    }

    /// The text content of this chunk
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Number of characters in this chunk
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Returns true if this is the first chunk
    pub fn is_first(&self) -> bool {
        self.index == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_new() {
        let chunk = Chunk::new(3, "banana bread");
        assert_eq!(chunk.index(), 3);
        assert_eq!(chunk.content(), "banana bread");
        assert!(!chunk.is_first());
    }

    #[test]
    fn test_char_count_counts_chars_not_bytes() {
        let chunk = Chunk::new(0, "café");
        assert_eq!(chunk.char_count(), 4);
        assert!(chunk.is_first());
    }

    #[test]
    fn test_chunk_serializes_fields() {
        let chunk = Chunk::new(1, "apple pie");
        let json = serde_json::to_value(&chunk).unwrap();
        assert_eq!(json["index"], 1);
        assert_eq!(json["content"], "apple pie");
    }
}
