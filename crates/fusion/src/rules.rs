//! The six correction rules, tried in order; the first to fire wins.
use crate::editing::edit_distance_at_most_one;
use crate::editing::insert_at;
use crate::editing::one_deletion_apart;
use crate::editing::positions_by_center;
use classboard_core::MIN_WORD_LEN;
use classboard_core::RECURSIVE_SPLIT_DEPTH;
use classboard_core::RECURSIVE_SPLIT_MIN_LEN;
use classboard_dictionary::Dictionary;

/// Common English letters by descending frequency, used as rule 6's last
/// resort when no loose letter produces a dictionary word.
const FALLBACK_LETTERS: &str = "etaoinshrdlcumwfgypbvkjxqz";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Correction {
    /// W was already a dictionary word.
    Accepted(String),
    /// One or more replacement words, all flagged as modified.
    Corrected(Vec<String>),
    Dropped,
}

/// Runs the per-word correction pipeline for one raw word `w`.
pub fn correct_word(
    w: &str,
    dict: &Dictionary,
    prev_fused: &[String],
    disappeared: &[String],
    prev_available_letters: &str,
) -> Correction {
    if w.chars().count() < MIN_WORD_LEN {
        return match rule6_insert_letter(w, prev_available_letters, dict) {
            Some(rescued) => Correction::Corrected(vec![rescued]),
            None => Correction::Dropped,
        };
    }
    if dict.contains(w) {
        return Correction::Accepted(w.to_string());
    }
    if let Some(parts) = rule2_resplit_against_disappeared(w, disappeared, dict) {
        return Correction::Corrected(parts);
    }
    if let Some(parts) = rule3_split_into_two_words(w, disappeared, dict) {
        return Correction::Corrected(parts);
    }
    if w.len() >= RECURSIVE_SPLIT_MIN_LEN {
        if let Some(parts) = rule4_recursive_split(w, dict, RECURSIVE_SPLIT_DEPTH) {
            return Correction::Corrected(parts);
        }
    }
    if let Some(candidate) = rule5_single_edit(w, prev_fused, dict) {
        return Correction::Corrected(vec![candidate]);
    }
    if let Some(candidate) = rule6_insert_letter(w, prev_available_letters, dict) {
        return Correction::Corrected(vec![candidate]);
    }
    Correction::Dropped
}

fn rule2_resplit_against_disappeared(w: &str, disappeared: &[String], dict: &Dictionary) -> Option<Vec<String>> {
    let mut candidates: Vec<&String> = disappeared.iter().filter(|d| d.len() >= 3).collect();
    candidates.sort_by_key(|d| std::cmp::Reverse(d.len()));

    let valid_or_disappeared = |s: &str, disappeared: &[String]| dict.contains(s) || disappeared.iter().any(|d| d == s);

    for d in &candidates {
        if let Some(suffix) = w.strip_prefix(d.as_str()) {
            if suffix.len() >= 3 && valid_or_disappeared(suffix, disappeared) {
                return Some(vec![d.to_string(), suffix.to_string()]);
            }
        }
        if let Some(prefix) = w.strip_suffix(d.as_str()) {
            if prefix.len() >= 3 && valid_or_disappeared(prefix, disappeared) {
                return Some(vec![prefix.to_string(), d.to_string()]);
            }
        }
        let mut search_from = 0;
        while let Some(rel) = w[search_from..].find(d.as_str()) {
            let idx = search_from + rel;
            let prefix = &w[..idx];
            let suffix = &w[idx + d.len()..];
            if !prefix.is_empty()
                && !suffix.is_empty()
                && prefix.len() >= 3
                && suffix.len() >= 3
                && valid_or_disappeared(prefix, disappeared)
                && valid_or_disappeared(suffix, disappeared)
            {
                return Some(vec![prefix.to_string(), d.to_string(), suffix.to_string()]);
            }
            search_from = idx + 1;
        }
    }
    None
}

fn rule3_split_into_two_words(w: &str, disappeared: &[String], dict: &Dictionary) -> Option<Vec<String>> {
    if w.len() < 6 {
        return None;
    }
    let mut first_valid: Option<(String, String)> = None;
    for i in 3..=(w.len() - 3) {
        let (left, right) = (&w[..i], &w[i..]);
        if dict.contains(left) && dict.contains(right) {
            if disappeared.iter().any(|d| d == left || d == right) {
                return Some(vec![left.to_string(), right.to_string()]);
            }
            if first_valid.is_none() {
                first_valid = Some((left.to_string(), right.to_string()));
            }
        }
    }
    first_valid.map(|(l, r)| vec![l, r])
}

fn rule4_recursive_split(w: &str, dict: &Dictionary, depth: usize) -> Option<Vec<String>> {
    if dict.contains(w) {
        return Some(vec![w.to_string()]);
    }
    if depth == 0 || w.len() < 6 {
        return None;
    }
    for i in 3..=(w.len() - 3) {
        let (left, right) = (&w[..i], &w[i..]);
        if dict.contains(left) {
            if let Some(mut rest) = rule4_recursive_split(right, dict, depth - 1) {
                let mut out = vec![left.to_string()];
                out.append(&mut rest);
                return Some(out);
            }
        }
        if dict.contains(right) {
            if let Some(mut rest) = rule4_recursive_split(left, dict, depth - 1) {
                rest.push(right.to_string());
                return Some(rest);
            }
        }
    }
    None
}

fn rule5_single_edit(w: &str, prev_fused: &[String], dict: &Dictionary) -> Option<String> {
    for p in prev_fused {
        if (w.len() as i64 - p.len() as i64).abs() != 1 {
            continue;
        }
        let apart = if w.len() > p.len() { one_deletion_apart(w, p) } else { one_deletion_apart(p, w) };
        if !apart {
            continue;
        }
        if dict.contains(p) {
            return Some(p.clone());
        }
        if dict.contains(w) {
            return Some(w.to_string());
        }
    }
    None
}

fn rule6_insert_letter(w: &str, prev_available_letters: &str, dict: &Dictionary) -> Option<String> {
    let positions = positions_by_center(w.len());
    for letter in prev_available_letters.chars() {
        for &pos in &positions {
            let candidate = insert_at(w, pos, letter);
            if dict.contains(&candidate) {
                return Some(candidate);
            }
        }
    }
    for letter in FALLBACK_LETTERS.chars() {
        for &pos in &positions {
            let candidate = insert_at(w, pos, letter);
            if dict.contains(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

/// Used by the post-correction confidence veto and disappeared-word
/// restoration checks.
pub fn has_close_dictionary_neighbour(word: &str, candidates: &[&str], dict: &Dictionary) -> bool {
    candidates.iter().any(|c| dict.contains(c) && edit_distance_at_most_one(word, c))
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

    #[test]
    fn rule1_accepts_dictionary_word() {
        let dict = dict_with(&["cat"]);
        assert_eq!(correct_word("cat", &dict, &[], &[], ""), Correction::Accepted("cat".to_string()));
    }

    #[test]
    fn rule2_resplits_ocr_merged_pair() {
        let dict = dict_with(&["cat", "act"]);
        let disappeared = vec!["cat".to_string(), "act".to_string()];
        let result = correct_word("catact", &dict, &[], &disappeared, "");
        assert_eq!(result, Correction::Corrected(vec!["cat".to_string(), "act".to_string()]));
    }

    #[test]
    fn rule3_splits_into_two_dictionary_words() {
        let dict = dict_with(&["cat", "nap"]);
        let result = correct_word("catnap", &dict, &[], &[], "");
        assert_eq!(result, Correction::Corrected(vec!["cat".to_string(), "nap".to_string()]));
    }

    #[test]
    fn rule5_restores_prior_word_over_dropped_letter() {
        let dict = dict_with(&["cats"]);
        let prev = vec!["cats".to_string()];
        let result = correct_word("cat", &dict, &prev, &[], "");
        // "cat" (3) vs "cats" (4): one deletion apart, but "cat" itself would
        // have been accepted directly if in the dictionary; here it isn't,
        // and "cats" is, so "cats" wins via dict preference... except we only
        // reach rule 5 when rule1 (dict.contains) already failed for "cat".
        // "cats" is the dict-valid side so it wins.
        assert_eq!(result, Correction::Corrected(vec!["cats".to_string()]));
    }

    #[test]
    fn rule6_inserts_available_letter() {
        let dict = dict_with(&["cat"]);
        let result = correct_word("ct", &dict, &[], &[], "a");
        assert_eq!(result, Correction::Corrected(vec!["cat".to_string()]));
    }

    #[test]
    fn short_word_without_rescue_is_dropped() {
        let dict = dict_with(&["cat"]);
        assert_eq!(correct_word("xy", &dict, &[], &[], "z"), Correction::Dropped);
    }

    #[test]
    fn unrecognizable_word_is_dropped() {
        let dict = dict_with(&["cat"]);
        assert_eq!(correct_word("zzzzzz", &dict, &[], &[], ""), Correction::Dropped);
    }
}
