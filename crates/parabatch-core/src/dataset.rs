//! # Parallel Dataset
//!
//! Assembles the vocabulary, the four encoded corpora, and the
//! train/validation/test partitions behind one facade, and hands out
//! batch cursors over any partition.

use std::io::BufRead;
use std::path::Path;

use crate::batch::{MixedBatches, PairedBatches};
use crate::config::DatasetConfig;
use crate::corpus::{encode_file, encode_reader, EncodedCorpus};
use crate::error::{DatasetError, Result};
use crate::split::{Partitions, Split};
use crate::vocab::Vocab;

/// Two domains of parallel source/target corpora, encoded, partitioned,
/// and ready for batch iteration.
///
/// The corpora, vocabulary, and partitions are immutable after
/// construction; batch cursors borrow them, so any number of traversals
/// may run side by side.
#[derive(Debug, Clone)]
pub struct ParallelDataset {
    vocab: Vocab,
    first_source: EncodedCorpus,
    first_target: EncodedCorpus,
    second_source: EncodedCorpus,
    second_target: EncodedCorpus,
    partitions: Partitions,
    config: DatasetConfig,
}

impl ParallelDataset {
    /// Load a dataset from a vocabulary file and four corpus files.
    ///
    /// Line `i` of a source file and line `i` of the matching target
    /// file form a translation pair; all four files must have the same
    /// line count.
    ///
    /// # Errors
    /// [`DatasetError::MissingUnknownToken`] if the vocabulary lacks
    /// `<unk>`; [`DatasetError::CorpusMismatch`] if the corpora differ
    /// in length; I/O failures are surfaced directly.
    #[allow(clippy::too_many_arguments)]
    pub fn from_files<P: AsRef<Path>>(
        vocab: P,
        first_source: P,
        first_target: P,
        second_source: P,
        second_target: P,
        config: DatasetConfig,
    ) -> Result<Self> {
        let vocab = Vocab::from_file(vocab)?;

        let first_source = encode_file(first_source, &vocab)?;
        let first_target = encode_file(first_target, &vocab)?;
        let second_source = encode_file(second_source, &vocab)?;
        let second_target = encode_file(second_target, &vocab)?;

        Self::from_parts(
            vocab,
            first_source,
            first_target,
            second_source,
            second_target,
            config,
        )
    }

    /// Build a dataset from in-memory readers, one per file of
    /// [`from_files`](Self::from_files).
    #[allow(clippy::too_many_arguments)]
    pub fn from_readers<R: BufRead>(
        vocab: R,
        first_source: R,
        first_target: R,
        second_source: R,
        second_target: R,
        config: DatasetConfig,
    ) -> Result<Self> {
        let vocab = Vocab::from_reader(vocab)?;

        let first_source = encode_reader(first_source, &vocab)?;
        let first_target = encode_reader(first_target, &vocab)?;
        let second_source = encode_reader(second_source, &vocab)?;
        let second_target = encode_reader(second_target, &vocab)?;

        Self::from_parts(
            vocab,
            first_source,
            first_target,
            second_source,
            second_target,
            config,
        )
    }

    fn from_parts(
        vocab: Vocab,
        first_source: EncodedCorpus,
        first_target: EncodedCorpus,
        second_source: EncodedCorpus,
        second_target: EncodedCorpus,
        config: DatasetConfig,
    ) -> Result<Self> {
        let expected = first_source.len();
        for (corpus, found) in [
            ("domain-1 target", first_target.len()),
            ("domain-2 source", second_source.len()),
            ("domain-2 target", second_target.len()),
        ] {
            if found != expected {
                return Err(DatasetError::CorpusMismatch {
                    corpus: corpus.to_string(),
                    expected,
                    found,
                });
            }
        }

        let partitions = Partitions::split(expected);

        tracing::info!(
            examples = expected,
            vocab = vocab.len(),
            train = partitions.train.len(),
            validation = partitions.validation.len(),
            test = partitions.test.len(),
            "parallel dataset constructed"
        );

        Ok(Self {
            vocab,
            first_source,
            first_target,
            second_source,
            second_target,
            partitions,
            config,
        })
    }

    /// The vocabulary the corpora were encoded with.
    pub fn vocab(&self) -> &Vocab {
        &self.vocab
    }

    /// Number of distinct vocabulary entries.
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    /// Number of example pairs per corpus.
    pub fn len(&self) -> usize {
        self.first_source.len()
    }

    /// Check if the dataset holds no examples.
    pub fn is_empty(&self) -> bool {
        self.first_source.is_empty()
    }

    /// The construction parameters in effect.
    pub fn config(&self) -> &DatasetConfig {
        &self.config
    }

    /// Indices of the named partition, in original corpus order.
    pub fn partition(&self, split: Split) -> &[usize] {
        self.partitions.get(split)
    }

    /// Paired-mode cursor over a partition: each step yields both
    /// domains' batch for the same window.
    pub fn paired_batches(&self, split: Split) -> PairedBatches<'_> {
        PairedBatches::new(
            &self.first_source,
            &self.first_target,
            &self.second_source,
            &self.second_target,
            self.partitions.get(split),
            &self.config,
        )
    }

    /// Mixed-mode cursor over a partition: each step yields one batch
    /// whose elements are coin-flipped between the two domains.
    pub fn mixed_batches(&self, split: Split) -> MixedBatches<'_> {
        MixedBatches::new(
            &self.first_source,
            &self.first_target,
            &self.second_source,
            &self.second_target,
            self.partitions.get(split),
            &self.config,
        )
    }
}
