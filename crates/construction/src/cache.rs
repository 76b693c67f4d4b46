//! Subset cache over the current unique player words.
//!
//! Every bitmask over the `n` unique words maps to a precomputed letter-count
//! vector and the subset's word indices. Built in Gray-code order so each
//! step is one add/subtract of a single word's count vector rather than a
//! fresh sum (O(26) per mask instead of O(n*26)).
use classboard_core::LetterCounts;
use std::rc::Rc;

/// One bitmask's precomputed subset: its combined letter counts and the
/// (ascending) indices of the words it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsetEntry {
    pub counts: LetterCounts,
    pub indices: Vec<usize>,
}

impl SubsetEntry {
    fn empty() -> Self {
        Self { counts: LetterCounts::zero(), indices: Vec::new() }
    }
}

/// Cache of all `2^n` subset entries over a fixed word list, keyed by mask.
pub struct SubsetCache {
    words: Vec<String>,
    masks: Vec<Rc<SubsetEntry>>,
}

impl SubsetCache {
    /// Builds the cache from scratch for `words` (unique, stable order) with
    /// matching per-word `counts`.
    pub fn build(words: Vec<String>, counts: &[LetterCounts]) -> Self {
        debug_assert_eq!(words.len(), counts.len());
        let n = words.len();
        let size = 1usize << n;
        let mut masks: Vec<Rc<SubsetEntry>> = vec![Rc::new(SubsetEntry::empty()); size];

        let mut current = SubsetEntry::empty();
        let mut prev_gray = 0usize;
        for i in 1..size {
            let gray = i ^ (i >> 1);
            let changed_bit = (gray ^ prev_gray).trailing_zeros() as usize;
            if (gray >> changed_bit) & 1 == 1 {
                current.counts = current.counts + counts[changed_bit];
                let pos = current.indices.partition_point(|&x| x < changed_bit);
                current.indices.insert(pos, changed_bit);
            } else {
                current.counts = current.counts.checked_sub(&counts[changed_bit]).expect(
                    "removing a bit that was added by a prior Gray-code step can't underflow",
                );
                current.indices.retain(|&x| x != changed_bit);
            }
            masks[gray] = Rc::new(current.clone());
            prev_gray = gray;
        }
        Self { words, masks }
    }

    /// Extends the cache with one newly observed word, reusing every
    /// existing `Rc<SubsetEntry>` by pointer rather than recomputing it.
    pub fn extend_with(&self, word: String, counts: &LetterCounts) -> Self {
        let n = self.words.len();
        let old_size = 1usize << n;
        let mut masks = Vec::with_capacity(old_size * 2);
        masks.extend(self.masks.iter().cloned());
        for old in &self.masks {
            let mut indices = old.indices.clone();
            indices.push(n);
            masks.push(Rc::new(SubsetEntry { counts: old.counts + *counts, indices }));
        }
        let mut words = self.words.clone();
        words.push(word);
        Self { words, masks }
    }

    pub fn len(&self) -> usize {
        self.masks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }

    pub fn entry(&self, mask: usize) -> &SubsetEntry {
        &self.masks[mask]
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// True if `self`'s mask `m` and `other`'s mask `m` share the same
    /// allocation (used by tests to assert the "no copy" extension property).
    pub fn shares_entry_with(&self, other: &Self, mask: usize) -> bool {
        Rc::ptr_eq(&self.masks[mask], &other.masks[mask])
    }
}
