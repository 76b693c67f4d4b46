//! Per-word confidence tracking: starts at 1.0 for direct observations,
//! drops to 0.5 on correction, steps back up on re-observation, decays and
//! is dropped on absence.
use classboard_core::CONFIDENCE_CORRECTED;
use classboard_core::CONFIDENCE_STEP_DOWN;
use classboard_core::CONFIDENCE_STEP_UP;
use classboard_core::Confidence;
use std::collections::HashMap;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceEntry {
    pub confidence: Confidence,
    pub was_modified: bool,
}

#[derive(Debug, Default)]
pub struct ConfidenceTracker {
    entries: HashMap<String, ConfidenceEntry>,
}

impl ConfidenceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, word: &str) -> Option<&ConfidenceEntry> {
        self.entries.get(word)
    }

    /// Advances every tracked word by one fused step: `final_words` is this
    /// round's fused word set, `modified` is the subset produced by a
    /// correction rule rather than direct observation.
    pub fn advance(&mut self, final_words: &[String], modified: &HashSet<String>) {
        let mut next = HashMap::with_capacity(final_words.len());
        for word in final_words {
            let entry = if modified.contains(word) {
                ConfidenceEntry { confidence: CONFIDENCE_CORRECTED, was_modified: true }
            } else {
                let prior = self.entries.get(word).map(|e| e.confidence).unwrap_or(1.0);
                ConfidenceEntry { confidence: (prior + CONFIDENCE_STEP_UP).min(1.0), was_modified: false }
            };
            next.insert(word.clone(), entry);
        }
        for (word, entry) in &self.entries {
            if next.contains_key(word) {
                continue;
            }
            let decayed = entry.confidence - CONFIDENCE_STEP_DOWN;
            if decayed > 0.0 {
                next.insert(word.clone(), ConfidenceEntry { confidence: decayed, was_modified: entry.was_modified });
            }
        }
        self.entries = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_direct_observation_starts_at_one() {
        let mut tracker = ConfidenceTracker::new();
        tracker.advance(&["cat".to_string()], &HashSet::new());
        assert_eq!(tracker.get("cat").unwrap().confidence, 1.0);
    }

    #[test]
    fn corrected_word_drops_to_half() {
        let mut tracker = ConfidenceTracker::new();
        let modified: HashSet<String> = ["cat".to_string()].into_iter().collect();
        tracker.advance(&["cat".to_string()], &modified);
        assert_eq!(tracker.get("cat").unwrap().confidence, CONFIDENCE_CORRECTED);
        assert!(tracker.get("cat").unwrap().was_modified);
    }

    #[test]
    fn absent_word_decays_and_eventually_drops() {
        let mut tracker = ConfidenceTracker::new();
        tracker.advance(&["cat".to_string()], &HashSet::new());
        tracker.advance(&[], &HashSet::new());
        assert!((tracker.get("cat").unwrap().confidence - 0.9).abs() < 1e-6);
        for _ in 0..20 {
            tracker.advance(&[], &HashSet::new());
        }
        assert!(tracker.get("cat").is_none());
    }
}
