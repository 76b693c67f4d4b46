//! Dictionary index: word list, precomputed letter-count vectors, a
//! `(first letter, length) -> indices` index, and a Zipf frequency map.
//!
//! Loaded once at process start and immutable thereafter (see the
//! "Lifecycle" note in the data model: the dictionary never changes while
//! the process runs, so every lookup here is a plain borrow, never a lock).
mod fallback;

use classboard_core::LetterCounts;
use classboard_core::Zipf;
use std::collections::HashMap;
use std::path::Path;

/// One dictionary entry: the word itself and its precomputed count vector.
#[derive(Debug, Clone)]
struct Entry {
    word: String,
    counts: LetterCounts,
}

/// Immutable, process-wide word list with the indices the construction
/// engine and temporal fusion need to stay off the O(dictionary) path.
pub struct Dictionary {
    entries: Vec<Entry>,
    index_by_word: HashMap<String, usize>,
    by_first_and_len: HashMap<(u8, usize), Vec<usize>>,
    frequencies: HashMap<String, Zipf>,
    frequencies_loaded: bool,
    max_length: usize,
}

impl Dictionary {
    /// Loads `words.txt` and `word_frequencies.json` from `data_dir`. Falls
    /// back to a small embedded word list if `words.txt` is missing or
    /// empty, logging once. A missing frequency table is not an error —
    /// scoring degrades to no-sort, no-filter, also logged once.
    pub fn load(data_dir: &Path) -> Self {
        let words = Self::load_words(&data_dir.join("words.txt"));
        let frequencies = Self::load_frequencies(&data_dir.join("word_frequencies.json"));
        Self::build(words, frequencies)
    }

    fn load_words(path: &Path) -> Vec<String> {
        match std::fs::read_to_string(path) {
            Ok(contents) => {
                let words: Vec<String> = contents
                    .lines()
                    .map(|l| l.trim().to_lowercase())
                    .filter(|w| w.len() >= 2 && w.bytes().all(|b| b.is_ascii_lowercase()))
                    .collect();
                if words.is_empty() {
                    log::warn!("{} contained no usable words, using fallback list", path.display());
                    fallback::FALLBACK_WORDS.iter().map(|s| s.to_string()).collect()
                } else {
                    words
                }
            }
            Err(e) => {
                log::warn!("could not read {}: {}, using fallback word list", path.display(), e);
                fallback::FALLBACK_WORDS.iter().map(|s| s.to_string()).collect()
            }
        }
    }

    fn load_frequencies(path: &Path) -> Option<HashMap<String, Zipf>> {
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(map) => Some(map),
                Err(e) => {
                    log::warn!("malformed {}: {}, scoring will not sort or filter", path.display(), e);
                    None
                }
            },
            Err(e) => {
                log::warn!("could not read {}: {}, scoring will not sort or filter", path.display(), e);
                None
            }
        }
    }

    fn build(words: Vec<String>, frequencies: Option<HashMap<String, Zipf>>) -> Self {
        let mut entries = Vec::with_capacity(words.len());
        let mut index_by_word = HashMap::with_capacity(words.len());
        let mut by_first_and_len: HashMap<(u8, usize), Vec<usize>> = HashMap::new();
        let mut max_length = 0;

        for word in words {
            if index_by_word.contains_key(&word) {
                continue;
            }
            let counts = LetterCounts::from_word(&word);
            let idx = entries.len();
            max_length = max_length.max(word.len());
            if let Some(first) = word.as_bytes().first().copied() {
                by_first_and_len.entry((first, word.len())).or_default().push(idx);
            }
            index_by_word.insert(word.clone(), idx);
            entries.push(Entry { word, counts });
        }

        let frequencies_loaded = frequencies.is_some();
        Self {
            entries,
            index_by_word,
            by_first_and_len,
            frequencies: frequencies.unwrap_or_default(),
            frequencies_loaded,
            max_length,
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index_by_word.contains_key(word)
    }

    pub fn counts_of(&self, word: &str) -> Option<&LetterCounts> {
        self.index_by_word.get(word).map(|&i| &self.entries[i].counts)
    }

    pub fn frequency(&self, word: &str) -> Option<Zipf> {
        self.frequencies.get(word).copied()
    }

    pub fn frequencies_loaded(&self) -> bool {
        self.frequencies_loaded
    }

    /// Indices of dictionary words starting with `first` and of length `len`.
    pub fn candidates(&self, first: u8, len: usize) -> &[usize] {
        self.by_first_and_len
            .get(&(first, len))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn word(&self, index: usize) -> &str {
        &self.entries[index].word
    }

    pub fn counts(&self, index: usize) -> &LetterCounts {
        &self.entries[index].counts
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn dict_with_words(words: &[&str]) -> Dictionary {
        let dir = tempfile::tempdir().unwrap();
        let mut f = std::fs::File::create(dir.path().join("words.txt")).unwrap();
        for w in words {
            writeln!(f, "{}", w).unwrap();
        }
        Dictionary::load(dir.path())
    }

    #[test]
    fn loads_words_and_builds_index() {
        let dict = dict_with_words(&["cat", "car", "act"]);
        assert!(dict.contains("cat"));
        assert!(!dict.contains("dog"));
        assert_eq!(dict.candidates(b'c', 3).len(), 2);
    }

    #[test]
    fn falls_back_when_words_file_absent() {
        let dir = tempfile::tempdir().unwrap();
        let dict = Dictionary::load(dir.path());
        assert!(!dict.is_empty());
        assert!(!dict.frequencies_loaded());
    }

    #[test]
    fn deduplicates_repeated_words() {
        let dict = dict_with_words(&["cat", "cat", "cat"]);
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn missing_frequency_table_is_not_an_error() {
        let dict = dict_with_words(&["cat"]);
        assert!(!dict.frequencies_loaded());
        assert_eq!(dict.frequency("cat"), None);
    }
}
