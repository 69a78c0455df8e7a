//! # Vocabulary Mapping
//!
//! Maps token strings to integer ids for corpus encoding.
//! Id 0 is reserved for `<pad>`; every other entry gets its
//! vocabulary-file line number plus one.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{DatasetError, Result};

/// Reserved padding token.
pub const PAD_TOKEN: &str = "<pad>";

/// Reserved fallback token for words outside the vocabulary.
pub const UNK_TOKEN: &str = "<unk>";

/// Id of the padding token, fixed by construction.
pub const PAD_ID: u32 = 0;

/// Immutable token → id mapping built from a vocabulary file.
#[derive(Debug, Clone)]
pub struct Vocab {
    map: HashMap<String, u32>,
    unk_id: u32,
}

impl Vocab {
    /// Build a vocabulary from a file.
    ///
    /// Each line's first whitespace-delimited token becomes an entry
    /// mapped to `line number + 1`. `<pad>` is forced to id 0 afterwards,
    /// overriding a `<pad>` line in the file if one exists.
    ///
    /// # Errors
    /// [`DatasetError::MissingUnknownToken`] if the file has no `<unk>`
    /// entry; I/O failures are surfaced directly.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Build a vocabulary from any buffered reader.
    ///
    /// # Examples
    /// ```
    /// use parabatch_core::Vocab;
    ///
    /// let vocab = Vocab::from_reader("the\ncat\n<unk>\n".as_bytes()).unwrap();
    /// assert_eq!(vocab.index_of("the"), 1);
    /// assert_eq!(vocab.index_of("<pad>"), 0);
    /// ```
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut map = HashMap::new();

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            if let Some(word) = line.split_whitespace().next() {
                map.insert(word.to_string(), i as u32 + 1);
            }
        }

        // The reserved pad id wins over any <pad> line in the file.
        map.insert(PAD_TOKEN.to_string(), PAD_ID);

        let unk_id = *map
            .get(UNK_TOKEN)
            .ok_or(DatasetError::MissingUnknownToken)?;

        tracing::debug!(entries = map.len(), unk_id, "vocabulary built");

        Ok(Self { map, unk_id })
    }

    /// Look up a token's id, falling back to the `<unk>` id for
    /// tokens outside the vocabulary.
    pub fn index_of(&self, token: &str) -> u32 {
        self.map.get(token).copied().unwrap_or(self.unk_id)
    }

    /// Number of distinct entries, `<pad>` included.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the vocabulary is empty (never true after construction,
    /// since `<pad>` and `<unk>` are always present).
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Id of the padding token.
    pub fn pad_id(&self) -> u32 {
        PAD_ID
    }

    /// Id of the unknown-token fallback.
    pub fn unk_id(&self) -> u32 {
        self.unk_id
    }
}
