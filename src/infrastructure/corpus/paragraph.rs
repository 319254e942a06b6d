//! Paragraph chunking for plain-text corpora
//!
//! A chunk boundary is one or more blank lines, where a blank line may hold
//! whitespace. Blocks are trimmed; all-whitespace blocks are dropped and do
//! not consume an index.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, instrument};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::Chunk;
use crate::domain::ports::ChunkSource;

static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("paragraph break pattern is valid"));

/// Split text into trimmed, non-empty paragraph chunks
pub fn split_paragraphs(text: &str) -> Vec<Chunk> {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .enumerate()
        .map(|(index, paragraph)| Chunk::new(index, paragraph))
        .collect()
}

/// Chunk source reading a single plain-text file
#[derive(Debug, Clone)]
pub struct ParagraphFileSource {
    path: PathBuf,
}

impl ParagraphFileSource {
    /// Create a source for the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the corpus file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ChunkSource for ParagraphFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> DomainResult<Vec<Chunk>> {
        let bytes = std::fs::read(&self.path).map_err(|source| DomainError::CorpusUnreadable {
            path: self.path.clone(),
            source,
        })?;

        // Binary or mis-encoded input is treated as text
        let content = String::from_utf8_lossy(&bytes);
        let chunks = split_paragraphs(&content);

        debug!(bytes = bytes.len(), chunks = chunks.len(), "corpus loaded");
        Ok(chunks)
    }
}
