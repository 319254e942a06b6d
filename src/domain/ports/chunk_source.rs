//! Chunk source port.

use crate::domain::errors::DomainResult;
use crate::domain::models::Chunk;

/// Supplies the ordered chunks of a corpus.
///
/// Chunk indices must be `0..n` in the returned order.
pub trait ChunkSource {
    /// Human-readable location of the corpus, used in diagnostics.
    fn describe(&self) -> String;

    /// Load every chunk of the corpus.
    fn load(&self) -> DomainResult<Vec<Chunk>>;
}
