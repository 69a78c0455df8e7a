//! # Batch Iteration
//!
//! Cursor iterators over a partition of a parallel dataset, in two
//! modes: paired (both domains, same window per step) and mixed (one
//! window with a per-element coin flip between domains).
//!
//! Every call to [`ParallelDataset::paired_batches`] or
//! [`ParallelDataset::mixed_batches`] constructs a fresh cursor that
//! owns its offset, so concurrent traversals over one dataset never
//! interfere.
//!
//! [`ParallelDataset::paired_batches`]: crate::ParallelDataset::paired_batches
//! [`ParallelDataset::mixed_batches`]: crate::ParallelDataset::mixed_batches

use oorandom::Rand64;

use crate::config::DatasetConfig;
use crate::corpus::EncodedCorpus;
use crate::pad::pad_to;
use crate::vocab::PAD_ID;

/// Which domain a mixed-batch element was drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    First,
    Second,
}

impl Domain {
    /// Numeric tag: 0 for the first domain, 1 for the second.
    pub fn index(&self) -> usize {
        match self {
            Domain::First => 0,
            Domain::Second => 1,
        }
    }
}

/// One domain's slice of a batch: padded sequences plus effective lengths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainBatch {
    pub source: Vec<Vec<u32>>,
    pub source_lens: Vec<usize>,
    pub target: Vec<Vec<u32>>,
    pub target_lens: Vec<usize>,
}

impl DomainBatch {
    fn with_capacity(n: usize) -> Self {
        Self {
            source: Vec::with_capacity(n),
            source_lens: Vec::with_capacity(n),
            target: Vec::with_capacity(n),
            target_lens: Vec::with_capacity(n),
        }
    }

    fn push(&mut self, source: &[u32], target: &[u32], max_len: usize) {
        let (src, src_len) = pad_to(source, max_len, PAD_ID);
        let (tgt, tgt_len) = pad_to(target, max_len, PAD_ID);
        self.source.push(src);
        self.source_lens.push(src_len);
        self.target.push(tgt);
        self.target_lens.push(tgt_len);
    }

    /// Number of examples in this batch.
    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }
}

/// One paired-mode step: the same partition window for both domains.
///
/// The two halves are index-aligned — element `i` of `first` and element
/// `i` of `second` come from the same partition position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairedBatch {
    pub first: DomainBatch,
    pub second: DomainBatch,
}

/// One mixed-mode step: a single window with per-element domain tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MixedBatch {
    pub domains: Vec<Domain>,
    pub source: Vec<Vec<u32>>,
    pub source_lens: Vec<usize>,
    pub target: Vec<Vec<u32>>,
    pub target_lens: Vec<usize>,
}

impl MixedBatch {
    /// Number of examples in this batch.
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

/// Next window `[start, end)` over a partition of length `len`, or
/// `None` when the traversal is complete.
///
/// The strict rule emits only while `offset + batch_size < len` — a
/// deliberate strict `<` that drops the trailing partial window and the
/// exact-multiple final window, matching prior batch streams. The
/// corrected rule emits every remaining window.
fn next_window(
    offset: usize,
    batch_size: usize,
    len: usize,
    strict: bool,
) -> Option<(usize, usize)> {
    let emit = if strict {
        offset + batch_size < len
    } else {
        offset < len
    };

    if !emit {
        return None;
    }

    Some((offset, (offset + batch_size).min(len)))
}

/// Borrowed view of the four corpora shared by both cursor modes.
#[derive(Clone, Copy)]
struct Corpora<'a> {
    first_source: &'a EncodedCorpus,
    first_target: &'a EncodedCorpus,
    second_source: &'a EncodedCorpus,
    second_target: &'a EncodedCorpus,
}

/// Paired-mode cursor: each step yields one [`PairedBatch`] built from
/// the window `[offset, offset + batch_size)` of the active partition,
/// then advances the offset.
pub struct PairedBatches<'a> {
    corpora: Corpora<'a>,
    indices: &'a [usize],
    offset: usize,
    batch_size: usize,
    max_seq_len: usize,
    strict: bool,
}

impl<'a> PairedBatches<'a> {
    pub(crate) fn new(
        first_source: &'a EncodedCorpus,
        first_target: &'a EncodedCorpus,
        second_source: &'a EncodedCorpus,
        second_target: &'a EncodedCorpus,
        indices: &'a [usize],
        config: &DatasetConfig,
    ) -> Self {
        Self {
            corpora: Corpora {
                first_source,
                first_target,
                second_source,
                second_target,
            },
            indices,
            offset: 0,
            batch_size: config.batch_size,
            max_seq_len: config.max_seq_len,
            strict: config.strict_boundary,
        }
    }
}

impl Iterator for PairedBatches<'_> {
    type Item = PairedBatch;

    fn next(&mut self) -> Option<Self::Item> {
        let (start, end) =
            next_window(self.offset, self.batch_size, self.indices.len(), self.strict)?;
        let window = &self.indices[start..end];

        let mut first = DomainBatch::with_capacity(window.len());
        let mut second = DomainBatch::with_capacity(window.len());

        // Both domains consume the same window; examples are parallel
        // per line, not resampled.
        for &idx in window {
            first.push(
                &self.corpora.first_source[idx],
                &self.corpora.first_target[idx],
                self.max_seq_len,
            );
            second.push(
                &self.corpora.second_source[idx],
                &self.corpora.second_target[idx],
                self.max_seq_len,
            );
        }

        tracing::trace!(start, end, "paired batch emitted");
        self.offset = end;

        Some(PairedBatch { first, second })
    }
}

/// Mixed-mode cursor: each step yields one [`MixedBatch`] where element
/// `i` is drawn with a fair coin flip from either domain's example at
/// partition position `offset + i`.
pub struct MixedBatches<'a> {
    corpora: Corpora<'a>,
    indices: &'a [usize],
    offset: usize,
    batch_size: usize,
    max_seq_len: usize,
    strict: bool,
    rng: Rand64,
}

impl<'a> MixedBatches<'a> {
    pub(crate) fn new(
        first_source: &'a EncodedCorpus,
        first_target: &'a EncodedCorpus,
        second_source: &'a EncodedCorpus,
        second_target: &'a EncodedCorpus,
        indices: &'a [usize],
        config: &DatasetConfig,
    ) -> Self {
        Self {
            corpora: Corpora {
                first_source,
                first_target,
                second_source,
                second_target,
            },
            indices,
            offset: 0,
            batch_size: config.batch_size,
            max_seq_len: config.max_seq_len,
            strict: config.strict_boundary,
            rng: Rand64::new(config.mix_seed as u128),
        }
    }
}

impl Iterator for MixedBatches<'_> {
    type Item = MixedBatch;

    fn next(&mut self) -> Option<Self::Item> {
        let (start, end) =
            next_window(self.offset, self.batch_size, self.indices.len(), self.strict)?;
        let window = &self.indices[start..end];

        let mut batch = MixedBatch {
            domains: Vec::with_capacity(window.len()),
            source: Vec::with_capacity(window.len()),
            source_lens: Vec::with_capacity(window.len()),
            target: Vec::with_capacity(window.len()),
            target_lens: Vec::with_capacity(window.len()),
        };

        for &idx in window {
            let (source, target, domain) = if self.rng.rand_float() < 0.5 {
                (
                    &self.corpora.first_source[idx],
                    &self.corpora.first_target[idx],
                    Domain::First,
                )
            } else {
                (
                    &self.corpora.second_source[idx],
                    &self.corpora.second_target[idx],
                    Domain::Second,
                )
            };

            let (src, src_len) = pad_to(source, self.max_seq_len, PAD_ID);
            let (tgt, tgt_len) = pad_to(target, self.max_seq_len, PAD_ID);
            batch.domains.push(domain);
            batch.source.push(src);
            batch.source_lens.push(src_len);
            batch.target.push(tgt);
            batch.target_lens.push(tgt_len);
        }

        tracing::trace!(start, end, "mixed batch emitted");
        self.offset = end;

        Some(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Corpora where every domain-1 id sequence is `[1, row]` and every
    /// domain-2 sequence is `[2, row]`, so batch contents identify both
    /// the domain and the corpus row they came from.
    fn tagged_corpora(n: usize) -> (EncodedCorpus, EncodedCorpus, EncodedCorpus, EncodedCorpus) {
        let d1: EncodedCorpus = (0..n).map(|i| vec![1, 100 + i as u32]).collect();
        let d2: EncodedCorpus = (0..n).map(|i| vec![2, 200 + i as u32]).collect();
        (d1.clone(), d1, d2.clone(), d2)
    }

    fn config(batch_size: usize) -> DatasetConfig {
        DatasetConfig::new().with_batch_size(batch_size).with_max_seq_len(5)
    }

    #[test]
    fn test_strict_boundary_drops_trailing_examples() {
        // Partition of 9 with batch_size 4: windows at 0 and 4 only;
        // offset 8 fails 8 + 4 < 9 and the ninth example is dropped.
        let (d1s, d1t, d2s, d2t) = tagged_corpora(9);
        let indices: Vec<usize> = (0..9).collect();

        let batches: Vec<_> =
            PairedBatches::new(&d1s, &d1t, &d2s, &d2t, &indices, &config(4)).collect();

        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].first.len(), 4);
        assert_eq!(batches[1].first.len(), 4);
    }

    #[test]
    fn test_strict_boundary_drops_exact_multiple_final_window() {
        // Partition of 8 with batch_size 4: the second window would end
        // exactly at the boundary, and strict `<` drops it.
        let (d1s, d1t, d2s, d2t) = tagged_corpora(8);
        let indices: Vec<usize> = (0..8).collect();

        let batches: Vec<_> =
            PairedBatches::new(&d1s, &d1t, &d2s, &d2t, &indices, &config(4)).collect();

        assert_eq!(batches.len(), 1);
    }

    #[test]
    fn test_corrected_boundary_emits_trailing_partial() {
        let (d1s, d1t, d2s, d2t) = tagged_corpora(9);
        let indices: Vec<usize> = (0..9).collect();
        let config = config(4).with_strict_boundary(false);

        let batches: Vec<_> =
            PairedBatches::new(&d1s, &d1t, &d2s, &d2t, &indices, &config).collect();

        assert_eq!(batches.len(), 3);
        assert_eq!(batches[2].first.len(), 1);
        assert_eq!(batches[2].second.len(), 1);
    }

    #[test]
    fn test_paired_windows_are_index_aligned() {
        let (d1s, d1t, d2s, d2t) = tagged_corpora(12);
        let indices: Vec<usize> = (0..12).collect();

        let batches: Vec<_> =
            PairedBatches::new(&d1s, &d1t, &d2s, &d2t, &indices, &config(4)).collect();

        // Second batch covers rows 4..8 in both domains.
        let batch = &batches[1];
        for (i, row) in (4..8).enumerate() {
            assert_eq!(batch.first.source[i][1], 100 + row);
            assert_eq!(batch.second.source[i][1], 200 + row);
        }
    }

    #[test]
    fn test_paired_batches_are_padded_with_lengths() {
        let (d1s, d1t, d2s, d2t) = tagged_corpora(12);
        let indices: Vec<usize> = (0..12).collect();

        let batch = PairedBatches::new(&d1s, &d1t, &d2s, &d2t, &indices, &config(4))
            .next()
            .unwrap();

        for (seq, &len) in batch.first.source.iter().zip(&batch.first.source_lens) {
            assert_eq!(seq.len(), 5);
            assert_eq!(len, 2);
        }
    }

    #[test]
    fn test_mixed_elements_route_through_partition() {
        let (d1s, d1t, d2s, d2t) = tagged_corpora(20);
        // A partition that does not start at row 0.
        let indices: Vec<usize> = (10..20).collect();

        let batch = MixedBatches::new(&d1s, &d1t, &d2s, &d2t, &indices, &config(4))
            .next()
            .unwrap();

        for (i, domain) in batch.domains.iter().enumerate() {
            let row = (10 + i) as u32;
            match domain {
                Domain::First => {
                    assert_eq!(batch.source[i][0], 1);
                    assert_eq!(batch.source[i][1], 100 + row);
                }
                Domain::Second => {
                    assert_eq!(batch.source[i][0], 2);
                    assert_eq!(batch.source[i][1], 200 + row);
                }
            }
        }
    }

    #[test]
    fn test_mixed_traversal_is_reproducible() {
        let (d1s, d1t, d2s, d2t) = tagged_corpora(20);
        let indices: Vec<usize> = (0..20).collect();
        let config = config(4).with_mix_seed(7);

        let first: Vec<_> =
            MixedBatches::new(&d1s, &d1t, &d2s, &d2t, &indices, &config).collect();
        let second: Vec<_> =
            MixedBatches::new(&d1s, &d1t, &d2s, &d2t, &indices, &config).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_mixed_uses_both_domains_eventually() {
        let (d1s, d1t, d2s, d2t) = tagged_corpora(64);
        let indices: Vec<usize> = (0..64).collect();

        let domains: Vec<Domain> = MixedBatches::new(&d1s, &d1t, &d2s, &d2t, &indices, &config(8))
            .flat_map(|b| b.domains)
            .collect();

        assert!(domains.contains(&Domain::First));
        assert!(domains.contains(&Domain::Second));
    }

    #[test]
    fn test_empty_partition_yields_nothing() {
        let (d1s, d1t, d2s, d2t) = tagged_corpora(4);
        let indices: Vec<usize> = Vec::new();

        let mut paired = PairedBatches::new(&d1s, &d1t, &d2s, &d2t, &indices, &config(4));
        assert!(paired.next().is_none());

        let mut mixed = MixedBatches::new(&d1s, &d1t, &d2s, &d2t, &indices, &config(4));
        assert!(mixed.next().is_none());
    }

    #[test]
    fn test_domain_index() {
        assert_eq!(Domain::First.index(), 0);
        assert_eq!(Domain::Second.index(), 1);
    }
}
