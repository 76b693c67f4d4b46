//! Per-player word-set diffing: compares this round's fused, attributed
//! words against the previous round's per-player sets and emits the
//! add/remove events the difference implies.
use crate::event::Event;
use crate::event::EventType;
use classboard_core::LetterCounts;
use classboard_dictionary::Dictionary;
use classboard_fusion::FusedSnapshot;
use std::collections::HashSet;

/// Stable per-player word-set state, carried round to round.
#[derive(Debug, Clone, Default)]
pub struct PlayerWordSets {
    pub words_by_player: Vec<HashSet<String>>,
}

impl PlayerWordSets {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_len(&mut self, n: usize) {
        if self.words_by_player.len() < n {
            self.words_by_player.resize(n, HashSet::new());
        }
    }

    /// Diffs `fused` against the stored previous sets, returning the
    /// `word_added`/`word_removed` events implied by the difference, and
    /// updates the stored sets to `fused`'s attribution.
    pub fn diff(
        &mut self,
        dict: &Dictionary,
        session_id: &str,
        monotonic_timestamp: u64,
        fused: &FusedSnapshot,
    ) -> Vec<Event> {
        let player_count = fused.attribution.values().copied().map(|p| p + 1).max().unwrap_or(0);
        self.ensure_len(player_count);

        let mut curr: Vec<HashSet<String>> = vec![HashSet::new(); self.words_by_player.len().max(player_count)];
        for word in &fused.words {
            let player = fused.attribution.get(word).copied().unwrap_or(0);
            if player >= curr.len() {
                curr.resize(player + 1, HashSet::new());
            }
            curr[player].insert(word.clone());
        }
        self.ensure_len(curr.len());

        let mut events = Vec::new();
        for (player_index, curr_words) in curr.iter().enumerate() {
            let prev_words = &self.words_by_player[player_index];
            for word in curr_words.difference(prev_words) {
                events.push(make_event(
                    dict,
                    session_id,
                    monotonic_timestamp,
                    EventType::WordAdded,
                    player_index,
                    word,
                ));
            }
            for word in prev_words.difference(curr_words) {
                events.push(make_event(
                    dict,
                    session_id,
                    monotonic_timestamp,
                    EventType::WordRemoved,
                    player_index,
                    word,
                ));
            }
        }

        for (player_index, curr_words) in curr.into_iter().enumerate() {
            self.words_by_player[player_index] = curr_words;
        }
        events
    }
}

fn make_event(
    dict: &Dictionary,
    session_id: &str,
    monotonic_timestamp: u64,
    event_type: EventType,
    player_index: usize,
    word: &str,
) -> Event {
    let frequency = dict.frequency(word).unwrap_or(0.0);
    let letters = LetterCounts::from_word(word).to_sorted_chars();
    Event::new(session_id, monotonic_timestamp, event_type, player_index, word, frequency, letters)
}
