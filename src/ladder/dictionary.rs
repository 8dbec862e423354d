use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use ahash::AHashSet;
use tracing::info;

use crate::error::{Error, Result};

/// Set of lowercase words a ladder may step through.
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    words: AHashSet<String>,
}

impl Dictionary {
    pub fn new() -> Dictionary {
        Dictionary::default()
    }

    /// Reads every whitespace separated token of the file at `path`.
    pub fn from_file(path: &Path) -> Result<Dictionary> {
        let file = File::open(path).map_err(|source| Error::io(path, source))?;
        let dictionary = Self::from_reader(BufReader::new(file), path)?;

        info!(path = %path.display(), words = dictionary.len(), "read dictionary");
        Ok(dictionary)
    }

    /// Same as [`Dictionary::from_file`], `path` only labels errors.
    pub fn from_reader(reader: impl BufRead, path: &Path) -> Result<Dictionary> {
        let mut dictionary = Dictionary::new();
        for line in reader.lines() {
            let line = line.map_err(|source| Error::io(path, source))?;
            line.split_whitespace().for_each(|word| {
                dictionary.insert(word);
            });
        }
        Ok(dictionary)
    }

    /// Inserts the lowercase form of `word`. Returns `false` if it was
    /// already present.
    pub fn insert(&mut self, word: &str) -> bool {
        self.words.insert(word.to_lowercase())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut dictionary = Dictionary::new();
        for word in iter {
            dictionary.insert(word.as_ref());
        }
        dictionary
    }
}
