//! Dataset construction parameters.

use serde::{Deserialize, Serialize};

/// Configuration for a [`ParallelDataset`](crate::ParallelDataset).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Number of examples per batch.
    pub batch_size: usize,
    /// Fixed width every sequence is padded or truncated to.
    pub max_seq_len: usize,
    /// When true (the default), a window is emitted only while
    /// `offset + batch_size < partition_len`, dropping the trailing
    /// partial window and the exact-multiple final window — compatible
    /// with prior batch streams. When false, every remaining window is
    /// emitted, including a trailing partial one.
    pub strict_boundary: bool,
    /// Seed for the mixed-mode coin flips, making interleaved
    /// traversals reproducible.
    pub mix_seed: u64,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            batch_size: 64,
            max_seq_len: 50,
            strict_boundary: true,
            mix_seed: 0,
        }
    }
}

impl DatasetConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the batch size.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Set the fixed sequence width.
    pub fn with_max_seq_len(mut self, max_seq_len: usize) -> Self {
        self.max_seq_len = max_seq_len.max(1);
        self
    }

    /// Choose between the strict (drop-trailing) and corrected
    /// (emit-trailing) partition boundary.
    pub fn with_strict_boundary(mut self, strict: bool) -> Self {
        self.strict_boundary = strict;
        self
    }

    /// Set the mixed-mode RNG seed.
    pub fn with_mix_seed(mut self, seed: u64) -> Self {
        self.mix_seed = seed;
        self
    }
}
