//! # Parabatch Core
//!
//! Prepares parallel text corpora (two domains, each with source/target
//! pairs) for sequence-to-sequence training: encodes raw token streams
//! against a flat vocabulary file, partitions examples into
//! train/validation/test, and iterates fixed-width zero-padded batches
//! in paired or mixed (domain-interleaved) mode.
//!
//! ## Quick Start
//!
//! ```rust
//! use parabatch_core::{DatasetConfig, ParallelDataset, Split};
//!
//! let vocab = "the\ncat\nsat\ndown\n<unk>\n";
//! let formal = "the cat sat\n".repeat(16);
//! let casual = "cat sat down\n".repeat(16);
//!
//! let dataset = ParallelDataset::from_readers(
//!     vocab.as_bytes(),
//!     formal.as_bytes(),
//!     formal.as_bytes(),
//!     casual.as_bytes(),
//!     casual.as_bytes(),
//!     DatasetConfig::new().with_batch_size(4),
//! )
//! .unwrap();
//!
//! assert_eq!(dataset.vocab_size(), 6);
//! assert_eq!(dataset.partition(Split::Train).len(), 12);
//!
//! for batch in dataset.paired_batches(Split::Train) {
//!     assert_eq!(batch.first.source[0].len(), 50);
//! }
//! ```
pub mod batch;
pub mod config;
pub mod corpus;
pub mod dataset;
pub mod error;
pub mod pad;
pub mod split;
pub mod vocab;

// Re-export primary API
pub use batch::{Domain, DomainBatch, MixedBatch, MixedBatches, PairedBatch, PairedBatches};
pub use config::DatasetConfig;
pub use corpus::{encode_file, encode_reader, EncodedCorpus};
pub use dataset::ParallelDataset;
pub use error::{DatasetError, Result};
pub use pad::pad_to;
pub use split::{Partitions, Split};
pub use vocab::{Vocab, PAD_ID, PAD_TOKEN, UNK_TOKEN};
