//! Construction Engine: enumerates every dictionary word buildable, by
//! addition, from the current snapshot's player words and loose letters.
mod cache;
mod scoring;
mod search;

pub use cache::{SubsetCache, SubsetEntry};
pub use scoring::{ScoreWeights, Scored};
pub use search::{Construction, enumerate};

use classboard_core::LetterCounts;
use classboard_dictionary::Dictionary;

/// Builds or extends a [`SubsetCache`] for `unique_words`, reusing `prior`
/// when it is exactly `unique_words` minus its last entry (the common case
/// of one newly observed word since the last snapshot).
pub fn cache_for(
    prior: Option<&SubsetCache>,
    unique_words: &[String],
    unique_counts: &[LetterCounts],
) -> SubsetCache {
    if let Some(prior) = prior {
        if unique_words.len() == prior.words().len() + 1
            && prior.words() == &unique_words[..prior.words().len()]
        {
            let new_word = unique_words.last().unwrap().clone();
            let new_counts = unique_counts.last().unwrap();
            return prior.extend_with(new_word, new_counts);
        }
    }
    SubsetCache::build(unique_words.to_vec(), unique_counts)
}

/// Runs the full construction pipeline for one snapshot: enumerate, score,
/// filter below the floor, and sort descending.
pub fn recommend(
    dict: &Dictionary,
    unique_words: &[String],
    unique_counts: &[LetterCounts],
    loose: &LetterCounts,
    cache: &SubsetCache,
    weights: &ScoreWeights,
) -> Vec<(String, Construction)> {
    let raw = enumerate(dict, unique_words, unique_counts, loose, cache);
    scoring::rank(dict, raw, weights)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_for_extends_when_one_word_added() {
        let words = vec!["cat".to_string(), "dog".to_string()];
        let counts: Vec<LetterCounts> = words.iter().map(|w| LetterCounts::from_word(w)).collect();
        let cold = cache_for(None, &words, &counts);

        let extended_words = vec!["cat".to_string(), "dog".to_string(), "rat".to_string()];
        let extended_counts: Vec<LetterCounts> =
            extended_words.iter().map(|w| LetterCounts::from_word(w)).collect();
        let warm = cache_for(Some(&cold), &extended_words, &extended_counts);

        assert_eq!(warm.len(), 8);
        for m in 0..cold.len() {
            assert!(cold.shares_entry_with(&warm, m));
        }
    }

    #[test]
    fn cache_for_rebuilds_when_shape_changes_more_than_one_word() {
        let words = vec!["cat".to_string()];
        let counts: Vec<LetterCounts> = words.iter().map(|w| LetterCounts::from_word(w)).collect();
        let cold = cache_for(None, &words, &counts);

        let different = vec!["dog".to_string(), "rat".to_string()];
        let different_counts: Vec<LetterCounts> =
            different.iter().map(|w| LetterCounts::from_word(w)).collect();
        let rebuilt = cache_for(Some(&cold), &different, &different_counts);
        assert_eq!(rebuilt.len(), 4);
    }
}
