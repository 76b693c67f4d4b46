//! Tracks the last two raw snapshots so fusion can tell whether a word
//! absent from the current snapshot was still plausibly on the table a
//! moment ago.
use classboard_core::VISIBILITY_RING_LEN;
use classboard_dto::RawSnapshot;
use std::collections::VecDeque;

#[derive(Debug, Default)]
pub struct VisibilityRing {
    ring: VecDeque<RawSnapshot>,
}

impl VisibilityRing {
    pub fn new() -> Self {
        Self { ring: VecDeque::with_capacity(VISIBILITY_RING_LEN) }
    }

    pub fn push(&mut self, snapshot: RawSnapshot) {
        if self.ring.len() == VISIBILITY_RING_LEN {
            self.ring.pop_front();
        }
        self.ring.push_back(snapshot);
    }

    /// True if `word` appears in any player's word list of any remembered
    /// raw snapshot.
    pub fn contains_word(&self, word: &str) -> bool {
        self.ring.iter().any(|s| s.players_words.iter().any(|p| p.iter().any(|w| w == word)))
    }
}
