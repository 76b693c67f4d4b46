//! Ranks and filters enumerated constructions. When the dictionary has no
//! frequency table loaded, scoring degrades to a no-op: no sort, no filter.
use crate::search::Construction;
use classboard_core::DEFAULT_SCORE_FLOOR;
use classboard_core::DEFAULT_WEIGHT_FREQUENCY;
use classboard_core::DEFAULT_WEIGHT_LENGTH;
use classboard_core::Zipf;
use classboard_dictionary::Dictionary;

#[derive(Debug, Clone, Copy)]
pub struct ScoreWeights {
    pub floor: Zipf,
    pub frequency: f32,
    pub length: f32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            floor: DEFAULT_SCORE_FLOOR,
            frequency: DEFAULT_WEIGHT_FREQUENCY,
            length: DEFAULT_WEIGHT_LENGTH,
        }
    }
}

/// A target word with its chosen construction and resolved score.
#[derive(Debug, Clone)]
pub struct Scored {
    pub word: String,
    pub construction: Construction,
    pub score: f32,
}

const ZIPF_MAX: f32 = 8.0;
const LENGTH_NORM: usize = 15;

pub fn rank(
    dict: &Dictionary,
    candidates: Vec<(String, Construction)>,
    weights: &ScoreWeights,
) -> Vec<(String, Construction)> {
    if !dict.frequencies_loaded() {
        return candidates;
    }

    let mut scored: Vec<Scored> = candidates
        .into_iter()
        .filter_map(|(word, construction)| {
            let zipf = dict.frequency(&word).unwrap_or(0.0);
            if zipf < weights.floor {
                return None;
            }
            let norm_zipf = (zipf / ZIPF_MAX).clamp(0.0, 1.0);
            let norm_len = (word.len() as f32 / LENGTH_NORM as f32).clamp(0.0, 1.0);
            let score = weights.frequency * norm_zipf + weights.length * norm_len;
            Some(Scored { word, construction, score })
        })
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    scored.into_iter().map(|s| (s.word, s.construction)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use classboard_dto::Block;

    fn construction(blocks: Vec<Block>) -> Construction {
        Construction { blocks }
    }

    fn dict_with_frequencies(words_freqs: &[(&str, f32)]) -> Dictionary {
        use std::io::Write;
        let dir = tempfile::tempdir().unwrap();
        let mut words = std::fs::File::create(dir.path().join("words.txt")).unwrap();
        for (w, _) in words_freqs {
            writeln!(words, "{}", w).unwrap();
        }
        let map: std::collections::HashMap<&str, f32> =
            words_freqs.iter().map(|&(w, f)| (w, f)).collect();
        std::fs::write(
            dir.path().join("word_frequencies.json"),
            serde_json::to_string(&map).unwrap(),
        )
        .unwrap();
        Dictionary::load(dir.path())
    }

    #[test]
    fn hello_outranks_hex() {
        let dict = dict_with_frequencies(&[("hello", 6.0), ("hex", 3.0)]);
        let candidates = vec![
            ("hex".to_string(), construction(vec![Block::Letter('h')])),
            ("hello".to_string(), construction(vec![Block::Letter('h')])),
        ];
        let ranked = rank(&dict, candidates, &ScoreWeights::default());
        assert_eq!(ranked[0].0, "hello");
        assert_eq!(ranked[1].0, "hex");
    }

    #[test]
    fn below_floor_is_dropped() {
        let dict = dict_with_frequencies(&[("rare", 0.2)]);
        let candidates = vec![("rare".to_string(), construction(vec![Block::Letter('r')]))];
        let ranked = rank(&dict, candidates, &ScoreWeights::default());
        assert!(ranked.is_empty());
    }

    #[test]
    fn missing_frequency_table_skips_sort_and_filter() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("words.txt"), "hex\nhello\n").unwrap();
        let dict = Dictionary::load(dir.path());
        let candidates = vec![
            ("hex".to_string(), construction(vec![Block::Letter('h')])),
            ("hello".to_string(), construction(vec![Block::Letter('h')])),
        ];
        let ranked = rank(&dict, candidates.clone(), &ScoreWeights::default());
        assert_eq!(ranked.len(), candidates.len());
        assert_eq!(ranked[0].0, "hex");
    }
}
