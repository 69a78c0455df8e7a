//! Deterministic train/validation/test partitioning.

use std::fmt;

/// Selects which partition an iterator walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Split {
    Train,
    Validation,
    Test,
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Split::Train => write!(f, "train"),
            Split::Validation => write!(f, "validation"),
            Split::Test => write!(f, "test"),
        }
    }
}

/// The three index partitions over a corpus of length `n`.
///
/// Partitions are contiguous, non-overlapping, keep the original corpus
/// order, and together cover exactly `[0, n)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partitions {
    pub train: Vec<usize>,
    pub validation: Vec<usize>,
    pub test: Vec<usize>,
}

impl Partitions {
    /// Partition `[0, n)` into train/validation/test.
    ///
    /// With `chunk = n / 8`: train takes `[0, n - 2*chunk)`, validation
    /// `[n - 2*chunk, n - chunk)`, test `[n - chunk, n)` — roughly
    /// 75% / 12.5% / 12.5%, integer-division remainder absorbed by train.
    /// For `n < 8` the chunk is 0 and validation/test come out empty;
    /// that is not an error.
    pub fn split(n: usize) -> Self {
        let chunk = n / 8;

        Self {
            train: (0..n - 2 * chunk).collect(),
            validation: (n - 2 * chunk..n - chunk).collect(),
            test: (n - chunk..n).collect(),
        }
    }

    /// Indices of the named partition.
    pub fn get(&self, split: Split) -> &[usize] {
        match split {
            Split::Train => &self.train,
            Split::Validation => &self.validation,
            Split::Test => &self.test,
        }
    }
}
