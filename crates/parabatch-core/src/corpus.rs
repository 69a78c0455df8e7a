//! Corpus encoding: raw text lines to integer id sequences.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Result;
use crate::vocab::Vocab;

/// An encoded corpus: one id sequence per input line, in file order.
pub type EncodedCorpus = Vec<Vec<u32>>;

/// Encode a corpus file line by line.
///
/// Each line is split on whitespace and every token mapped through
/// [`Vocab::index_of`]. Blank lines produce empty sequences. The whole
/// corpus is materialized in memory; no length limit is applied here —
/// truncation happens at padding time.
pub fn encode_file<P: AsRef<Path>>(path: P, vocab: &Vocab) -> Result<EncodedCorpus> {
    let file = File::open(path)?;
    encode_reader(BufReader::new(file), vocab)
}

/// Encode corpus lines from any buffered reader.
pub fn encode_reader<R: BufRead>(reader: R, vocab: &Vocab) -> Result<EncodedCorpus> {
    let mut corpus = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let ids: Vec<u32> = line
            .split_whitespace()
            .map(|token| vocab.index_of(token))
            .collect();
        corpus.push(ids);
    }

    tracing::debug!(lines = corpus.len(), "corpus encoded");

    Ok(corpus)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_vocab() -> Vocab {
        Vocab::from_reader("the\ncat\n<unk>\n".as_bytes()).unwrap()
    }

    #[test]
    fn test_encode_known_and_unknown_tokens() {
        let vocab = sample_vocab();
        let corpus = encode_reader("the dog\n".as_bytes(), &vocab).unwrap();
        assert_eq!(corpus, vec![vec![1, 3]]);
    }

    #[test]
    fn test_line_order_is_preserved() {
        let vocab = sample_vocab();
        let corpus = encode_reader("cat\nthe\ncat the\n".as_bytes(), &vocab).unwrap();
        assert_eq!(corpus, vec![vec![2], vec![1], vec![2, 1]]);
    }

    #[test]
    fn test_blank_line_encodes_empty() {
        let vocab = sample_vocab();
        let corpus = encode_reader("the\n\ncat\n".as_bytes(), &vocab).unwrap();
        assert_eq!(corpus.len(), 3);
        assert!(corpus[1].is_empty());
    }

    #[test]
    fn test_no_truncation_at_encoding_time() {
        let vocab = sample_vocab();
        let line = "the ".repeat(200);
        let corpus = encode_reader(line.as_bytes(), &vocab).unwrap();
        assert_eq!(corpus[0].len(), 200);
    }

    #[test]
    fn test_empty_input() {
        let vocab = sample_vocab();
        let corpus = encode_reader("".as_bytes(), &vocab).unwrap();
        assert!(corpus.is_empty());
    }
}
