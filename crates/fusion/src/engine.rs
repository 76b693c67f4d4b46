//! Stateful temporal fusion filter: owns the fused word list, the
//! confidence tracker, and the visibility ring, and runs the full
//! correction pipeline plus its post-correction pass each snapshot.
use crate::confidence::ConfidenceTracker;
use crate::rules::Correction;
use crate::rules::correct_word;
use crate::rules::has_close_dictionary_neighbour;
use crate::visibility::VisibilityRing;
use classboard_dictionary::Dictionary;
use classboard_dto::RawSnapshot;
use std::collections::HashMap;
use std::collections::HashSet;

/// Result of fusing one snapshot: the flat pseudo-player word list plus a
/// per-word hint for which raw player index it should be re-attributed to.
#[derive(Debug, Clone, Default)]
pub struct FusedSnapshot {
    pub words: Vec<String>,
    pub available_letters: String,
    pub attribution: HashMap<String, usize>,
}

impl FusedSnapshot {
    /// Regroups the flat, attributed word list back into per-player lists
    /// for the broadcast payload's `players` echo.
    pub fn players(&self) -> Vec<classboard_dto::PlayerWordsShape> {
        let player_count = self.attribution.values().copied().map(|p| p + 1).max().unwrap_or(0);
        let mut players = vec![classboard_dto::PlayerWordsShape::default(); player_count];
        for word in &self.words {
            let player = self.attribution.get(word).copied().unwrap_or(0);
            players[player].words.push(word.clone());
        }
        players
    }
}

pub struct FusionEngine {
    fused_words: Vec<String>,
    attribution: HashMap<String, usize>,
    confidence: ConfidenceTracker,
    visibility: VisibilityRing,
    prev_available_letters: String,
}

impl FusionEngine {
    pub fn new() -> Self {
        Self {
            fused_words: Vec::new(),
            attribution: HashMap::new(),
            confidence: ConfidenceTracker::new(),
            visibility: VisibilityRing::new(),
            prev_available_letters: String::new(),
        }
    }

    pub fn fused_words(&self) -> &[String] {
        &self.fused_words
    }

    /// Runs the full fusion pipeline for one raw snapshot, mutating all
    /// trackers, and returns the new fused state.
    pub fn process(&mut self, dict: &Dictionary, raw: &RawSnapshot) -> FusedSnapshot {
        let raw_flat: HashSet<&str> =
            raw.players_words.iter().flat_map(|p| p.iter()).map(String::as_str).collect();
        let disappeared: Vec<String> =
            self.fused_words.iter().filter(|w| !raw_flat.contains(w.as_str())).cloned().collect();

        let mut corrected: Vec<(String, usize, bool)> = Vec::new();
        for (player_idx, words) in raw.players_words.iter().enumerate() {
            for w in words {
                match correct_word(w, dict, &self.fused_words, &disappeared, &self.prev_available_letters) {
                    Correction::Accepted(word) => corrected.push((word, player_idx, false)),
                    Correction::Corrected(parts) => {
                        for part in parts {
                            corrected.push((part, player_idx, true));
                        }
                    }
                    Correction::Dropped => {}
                }
            }
        }

        // Confidence veto: a modified word loses to a directly observed
        // dictionary word one edit away from it.
        let directly_observed: Vec<String> =
            corrected.iter().filter(|(_, _, modified)| !modified).map(|(w, _, _)| w.clone()).collect();
        let directly_observed: Vec<&str> = directly_observed.iter().map(String::as_str).collect();
        corrected.retain(|(word, _, modified)| {
            !*modified || !has_close_dictionary_neighbour(word, &directly_observed, dict)
        });

        let mut final_words: Vec<String> = Vec::new();
        let mut attribution: HashMap<String, usize> = HashMap::new();
        let mut modified_words: HashSet<String> = HashSet::new();
        for (word, player, modified) in &corrected {
            if *modified {
                modified_words.insert(word.clone());
            }
            match attribution.get(word).copied() {
                None => {
                    final_words.push(word.clone());
                    attribution.insert(word.clone(), *player);
                }
                Some(existing) if *player < existing => {
                    attribution.insert(word.clone(), *player);
                }
                _ => {}
            }
        }

        // Disappeared-word restoration checks the visibility window that
        // includes the snapshot just received, so push it first.
        self.visibility.push(raw.clone());
        for prev_word in &disappeared {
            if final_words.iter().any(|f| f.contains(prev_word.as_str()) || prev_word.contains(f.as_str())) {
                continue;
            }
            if !self.visibility.contains_word(prev_word) {
                continue;
            }
            let raw_words: Vec<&str> = raw_flat.iter().copied().collect();
            if has_close_dictionary_neighbour(prev_word, &raw_words, dict) {
                continue;
            }
            final_words.push(prev_word.clone());
            let origin = self.attribution.get(prev_word).copied().unwrap_or(0);
            attribution.insert(prev_word.clone(), origin);
        }

        self.confidence.advance(&final_words, &modified_words);
        self.fused_words = final_words.clone();
        self.attribution = attribution.clone();
        self.prev_available_letters = raw.available_letters.clone();

        FusedSnapshot { words: final_words, available_letters: raw.available_letters.clone(), attribution }
    }
}

impl Default for FusionEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn dict_with(words: &[&str]) -> Dictionary {
        let dir = tempfile::tempdir().unwrap();
        let mut f = std::fs::File::create(dir.path().join("words.txt")).unwrap();
        for w in words {
            writeln!(f, "{}", w).unwrap();
        }
        Dictionary::load(dir.path())
    }

    fn raw(players: &[&[&str]], letters: &str) -> RawSnapshot {
        RawSnapshot {
            players_words: players.iter().map(|p| p.iter().map(|s| s.to_string()).collect()).collect(),
            available_letters: letters.to_string(),
        }
    }

    #[test]
    fn scenario_single_letter_added_to_prior_word() {
        let dict = dict_with(&["cat", "car"]);
        let mut engine = FusionEngine::new();
        engine.process(&dict, &raw(&[&["cat"]], "or"));
        let fused = engine.process(&dict, &raw(&[&["car"]], ""));
        assert_eq!(fused.words, vec!["car".to_string()]);
    }

    #[test]
    fn scenario_ocr_merged_pair_resplits() {
        let dict = dict_with(&["cat", "act"]);
        let mut engine = FusionEngine::new();
        engine.process(&dict, &raw(&[&["cat", "act"]], ""));
        let fused = engine.process(&dict, &raw(&[&["catact"]], ""));
        let mut words = fused.words.clone();
        words.sort();
        assert_eq!(words, vec!["act".to_string(), "cat".to_string()]);
    }

    #[test]
    fn scenario_transient_disappearance_then_drop() {
        let dict = dict_with(&["dog"]);
        let mut engine = FusionEngine::new();
        engine.process(&dict, &raw(&[&["dog"]], ""));
        let fused = engine.process(&dict, &raw(&[&[]], ""));
        assert_eq!(fused.words, vec!["dog".to_string()]);
        let fused = engine.process(&dict, &raw(&[&[]], ""));
        assert!(fused.words.is_empty());
    }

    #[test]
    fn players_regroups_flat_words_by_attribution() {
        let fused = FusedSnapshot {
            words: vec!["cat".to_string(), "dog".to_string()],
            available_letters: String::new(),
            attribution: [("cat".to_string(), 0usize), ("dog".to_string(), 1usize)].into_iter().collect(),
        };
        let players = fused.players();
        assert_eq!(players.len(), 2);
        assert_eq!(players[0].words, vec!["cat".to_string()]);
        assert_eq!(players[1].words, vec!["dog".to_string()]);
    }

    #[test]
    fn identical_snapshot_is_idempotent() {
        let dict = dict_with(&["cat", "dog"]);
        let mut engine = FusionEngine::new();
        let first = engine.process(&dict, &raw(&[&["cat", "dog"]], "xy"));
        let second = engine.process(&dict, &raw(&[&["cat", "dog"]], "xy"));
        let mut a = first.words.clone();
        let mut b = second.words.clone();
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }
}
