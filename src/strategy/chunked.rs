use std::num::NonZeroUsize;

use crate::{
    error::{Result, SimilarityError},
    strategy::pacing::ScanContext,
};

/// Default chunk length in characters.
pub const DEFAULT_CHUNK_SIZE: usize = 25;

/// "Round Robin": compare the texts in fixed-size character chunks.
///
/// The i-th chunk of A is paired with the i-th chunk of B; pairing stops at
/// the shorter chunk list. A pair counts as a match when both chunks are
/// identical character for character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkedScan {
    chunk_size: NonZeroUsize,
}

impl ChunkedScan {
    /// Fails with `InvalidParameter` when `chunk_size` is 0.
    pub fn new(chunk_size: usize) -> Result<Self> {
        NonZeroUsize::new(chunk_size)
            .map(|chunk_size| Self { chunk_size })
            .ok_or_else(|| SimilarityError::InvalidParameter {
                name: "chunk_size",
                reason: "must be a positive integer".to_string(),
            })
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size.get()
    }

    /// Contiguous chunks of `chunk_size` characters; the last may be shorter.
    pub fn chunks(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        chars
            .chunks(self.chunk_size.get())
            .map(|chunk| chunk.iter().collect())
            .collect()
    }

    pub fn count_matches(&self, a: &str, b: &str, ctx: &ScanContext) -> Result<usize> {
        let chunks_a = self.chunks(a);
        let chunks_b = self.chunks(b);
        let mut matches = 0;
        for (chunk_a, chunk_b) in chunks_a.iter().zip(chunks_b.iter()) {
            if chunk_a == chunk_b {
                matches += 1;
            }
            ctx.step()?;
        }
        Ok(matches)
    }
}

impl Default for ChunkedScan {
    fn default() -> Self {
        Self {
            chunk_size: NonZeroUsize::new(DEFAULT_CHUNK_SIZE).unwrap_or(NonZeroUsize::MIN),
        }
    }
}
