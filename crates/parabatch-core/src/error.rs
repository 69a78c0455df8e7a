use thiserror::Error;

/// Errors that can occur while building or iterating a parallel dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The vocabulary file has no `<unk>` entry, so unknown tokens
    /// would have nothing to fall back to.
    #[error("vocabulary has no <unk> entry")]
    MissingUnknownToken,

    /// The four corpus files do not share a common line count.
    #[error("corpus length mismatch: {corpus} has {found} lines, expected {expected}")]
    CorpusMismatch {
        /// Which corpus disagreed (e.g. "domain-2 source").
        corpus: String,
        /// Line count of the first corpus read.
        expected: usize,
        /// Line count of the mismatched corpus.
        found: usize,
    },

    /// A vocabulary or corpus file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for parabatch operations.
pub type Result<T> = std::result::Result<T, DatasetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = DatasetError::MissingUnknownToken;
        assert_eq!(err.to_string(), "vocabulary has no <unk> entry");

        let err = DatasetError::CorpusMismatch {
            corpus: "domain-2 source".into(),
            expected: 10,
            found: 7,
        };
        assert!(err.to_string().contains("domain-2 source"));
        assert!(err.to_string().contains("expected 10"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DatasetError>();
    }
}
