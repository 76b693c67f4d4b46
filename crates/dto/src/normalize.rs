use crate::LettersField;
use crate::UpdateDataRequest;

/// Canonical internal snapshot shape every `/update-data` variant normalizes
/// into before fusion runs: lowercased, non-alphabetic stripped, player
/// boundaries preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSnapshot {
    pub players_words: Vec<Vec<String>>,
    pub available_letters: String,
}

impl RawSnapshot {
    pub fn normalize_word(raw: &str) -> String {
        raw.chars().filter(|c| c.is_ascii_alphabetic()).map(|c| c.to_ascii_lowercase()).collect()
    }

    fn normalize_words(words: &[String]) -> Vec<String> {
        words.iter().map(|w| Self::normalize_word(w)).filter(|w| !w.is_empty()).collect()
    }

    fn normalize_letters(field: Option<LettersField>) -> Option<String> {
        field.map(LettersField::into_string).map(|s| Self::normalize_word(&s))
    }

    /// Normalizes one `/update-data` request. `prior` is the last normalized
    /// snapshot the caller (the `Board`) is holding, used to resolve delta
    /// requests and to carry forward `availableLetters` when a delta omits it.
    pub fn from_request(req: UpdateDataRequest, prior: Option<&RawSnapshot>) -> Self {
        match req {
            UpdateDataRequest::Full(full) => Self {
                players_words: full.players.into_iter().map(|p| Self::normalize_words(&p.words)).collect(),
                available_letters: Self::normalize_letters(full.available_letters).unwrap_or_default(),
            },
            UpdateDataRequest::Flat(flat) => Self {
                players_words: flat.words_per_player.into_iter().map(|w| Self::normalize_words(&w)).collect(),
                available_letters: Self::normalize_letters(flat.available).unwrap_or_default(),
            },
            UpdateDataRequest::Delta(delta) => Self::from_delta(delta, prior),
        }
    }

    fn from_delta(delta: crate::DeltaUpdateRequest, prior: Option<&RawSnapshot>) -> Self {
        let available_letters = Self::normalize_letters(delta.available_letters)
            .unwrap_or_else(|| prior.map(|p| p.available_letters.clone()).unwrap_or_default());

        let Some(prior) = prior else {
            // No prior snapshot: treat as the full shape, addedWords standing
            // in directly for the per-player word lists.
            return Self {
                players_words: delta.added_words.into_iter().map(|w| Self::normalize_words(&w)).collect(),
                available_letters,
            };
        };

        let players = prior.players_words.len().max(delta.added_words.len()).max(delta.removed_words.len());
        let mut players_words = Vec::with_capacity(players);
        for i in 0..players {
            let mut words = prior.players_words.get(i).cloned().unwrap_or_default();
            if let Some(removed) = delta.removed_words.get(i) {
                for r in Self::normalize_words(removed) {
                    if let Some(pos) = words.iter().position(|w| *w == r) {
                        words.remove(pos);
                    }
                }
            }
            if let Some(added) = delta.added_words.get(i) {
                words.extend(Self::normalize_words(added));
            }
            players_words.push(words);
        }
        Self { players_words, available_letters }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_shape_normalizes_case_and_strips_punctuation() {
        let req = UpdateDataRequest::Full(crate::FullUpdateRequest {
            players: vec![crate::PlayerWordsShape { words: vec!["Ca-t!".to_string()] }],
            available_letters: Some(LettersField::Joined("O-R".to_string())),
        });
        let snap = RawSnapshot::from_request(req, None);
        assert_eq!(snap.players_words, vec![vec!["cat".to_string()]]);
        assert_eq!(snap.available_letters, "or");
    }

    #[test]
    fn delta_with_no_prior_uses_added_words_as_players() {
        let req = UpdateDataRequest::Delta(crate::DeltaUpdateRequest {
            added_words: vec![vec!["cat".to_string()], vec!["dog".to_string()]],
            removed_words: vec![],
            available_letters: None,
        });
        let snap = RawSnapshot::from_request(req, None);
        assert_eq!(snap.players_words, vec![vec!["cat".to_string()], vec!["dog".to_string()]]);
    }

    #[test]
    fn delta_applies_add_and_remove_against_prior() {
        let prior = RawSnapshot {
            players_words: vec![vec!["cat".to_string(), "dog".to_string()]],
            available_letters: "xyz".to_string(),
        };
        let req = UpdateDataRequest::Delta(crate::DeltaUpdateRequest {
            added_words: vec![vec!["rat".to_string()]],
            removed_words: vec![vec!["dog".to_string()]],
            available_letters: None,
        });
        let snap = RawSnapshot::from_request(req, Some(&prior));
        assert_eq!(snap.players_words, vec![vec!["cat".to_string(), "rat".to_string()]]);
        assert_eq!(snap.available_letters, "xyz");
    }
}
