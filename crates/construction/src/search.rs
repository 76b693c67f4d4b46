//! Per-snapshot construction search: candidate enumeration, the letters-only
//! fast path, and the high-to-low subset mask scan.
use crate::cache::SubsetCache;
use classboard_core::LetterCounts;
use classboard_dictionary::Dictionary;
use classboard_dto::Block;

/// A single chosen construction for one target word.
#[derive(Debug, Clone)]
pub struct Construction {
    pub blocks: Vec<Block>,
}

impl Construction {
    pub fn letters_to_steal(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_letter()).count()
    }
}

/// Enumerates every constructible target word for one snapshot. `unique_words`
/// must be the same words (same order) the `cache` was built over.
pub fn enumerate(
    dict: &Dictionary,
    unique_words: &[String],
    unique_counts: &[LetterCounts],
    loose: &LetterCounts,
    cache: &SubsetCache,
) -> Vec<(String, Construction)> {
    let pool: LetterCounts = unique_counts.iter().copied().sum::<LetterCounts>() + *loose;
    let total_pool = pool.total() as usize;
    let max_len = dict.max_length().min(total_pool);

    let mut out = Vec::new();
    for first in pool.distinct_letters() {
        for len in classboard_core::MIN_WORD_LEN..=max_len {
            for &idx in dict.candidates(first, len) {
                let tc = *dict.counts(idx);
                if !pool.contains_all(&tc) {
                    continue;
                }
                if let Some(construction) = construct(&tc, loose, unique_counts, cache) {
                    out.push((dict.word(idx).to_string(), construction));
                }
            }
        }
    }
    out
}

fn construct(
    target: &LetterCounts,
    loose: &LetterCounts,
    unique_counts: &[LetterCounts],
    cache: &SubsetCache,
) -> Option<Construction> {
    // (a) letters-only fast path
    if loose.contains_all(target) && target.total() >= 2 && !unique_counts.contains(target) {
        return Some(Construction { blocks: letter_blocks(target) });
    }

    // (b) mask scan, high to low: prefer constructions using more player words
    for mask in (0..cache.len()).rev() {
        let entry = cache.entry(mask);
        let Some(remainder) = target.checked_sub(&entry.counts) else { continue };
        if !loose.contains_all(&remainder) {
            continue;
        }
        let block_count = entry.indices.len() + remainder.total() as usize;
        if block_count < 2 {
            continue;
        }
        if entry.indices.is_empty() && unique_counts.contains(&remainder) {
            continue; // C4: pure anagram of a single player word
        }
        let mut blocks: Vec<Block> = entry
            .indices
            .iter()
            .map(|&i| Block::Word(cache.words()[i].clone()))
            .collect();
        blocks.extend(letter_blocks(&remainder));
        return Some(Construction { blocks });
    }
    None
}

fn letter_blocks(counts: &LetterCounts) -> Vec<Block> {
    counts.to_sorted_chars().into_iter().map(Block::Letter).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict_in(dir: &std::path::Path, words: &[&str]) {
        use std::io::Write;
        let mut f = std::fs::File::create(dir.join("words.txt")).unwrap();
        for w in words {
            writeln!(f, "{}", w).unwrap();
        }
    }

    fn setup(player_words: &[&str], dict_words: &[&str]) -> (Dictionary, Vec<String>, Vec<LetterCounts>, SubsetCache) {
        let dir = tempfile::tempdir().unwrap();
        dict_in(dir.path(), dict_words);
        let dict = Dictionary::load(dir.path());
        let words: Vec<String> = player_words.iter().map(|s| s.to_string()).collect();
        let counts: Vec<LetterCounts> = words.iter().map(|w| LetterCounts::from_word(w)).collect();
        let cache = SubsetCache::build(words.clone(), &counts);
        (dict, words, counts, cache)
    }

    #[test]
    fn actor_recommended_from_cat_plus_or() {
        let (dict, words, counts, cache) = setup(&["cat"], &["cat", "actor", "act"]);
        let loose = LetterCounts::from_word("or");
        let results = enumerate(&dict, &words, &counts, &loose, &cache);
        let actor = results.iter().find(|(w, _)| w == "actor");
        assert!(actor.is_some());
        let (_, construction) = actor.unwrap();
        assert!(construction.blocks.contains(&Block::Word("cat".to_string())));
        assert!(construction.letters_to_steal() == 2);

        // "act" requires only a subset of "cat"'s letters with no addition -
        // not constructible under additivity rules from whole-word "cat".
        assert!(results.iter().all(|(w, _)| w != "act"));
    }

    #[test]
    fn single_word_no_loose_letters_yields_nothing() {
        let (dict, words, counts, cache) = setup(&["cat"], &["cat", "cats"]);
        let loose = LetterCounts::zero();
        let results = enumerate(&dict, &words, &counts, &loose, &cache);
        assert!(results.is_empty());
    }

    #[test]
    fn aboard_not_recommended_from_cat_boat_or() {
        let (dict, words, counts, cache) = setup(&["cat", "boat"], &["cat", "boat", "actor", "aboard"]);
        let loose = LetterCounts::from_word("or");
        let results = enumerate(&dict, &words, &counts, &loose, &cache);
        assert!(results.iter().all(|(w, _)| w != "aboard"));
        assert!(results.iter().any(|(w, _)| w == "actor"));
    }

    #[test]
    fn pure_anagram_of_single_player_word_is_rejected() {
        // loose letters alone spell exactly "cat"'s multiset -> C4 forbids it
        let (dict, words, counts, cache) = setup(&["cat"], &["cat", "act"]);
        let loose = LetterCounts::from_word("act");
        let results = enumerate(&dict, &words, &counts, &loose, &cache);
        assert!(results.iter().all(|(w, _)| w != "act"));
    }

    #[test]
    fn empty_snapshot_yields_empty_recommendations() {
        let (dict, words, counts, cache) = setup(&[], &["cat", "dog"]);
        let loose = LetterCounts::zero();
        let results = enumerate(&dict, &words, &counts, &loose, &cache);
        assert!(results.is_empty());
    }
}
