//! Per-player vocabulary aggregator: rolling counters updated from journal
//! events, persisted to a single JSON file and reloaded on restart.
use crate::event::Event;
use crate::event::EventType;
use anyhow::Context;
use anyhow::Result;
use classboard_core::FREQUENCY_BAND_COMMON;
use classboard_core::FREQUENCY_BAND_MEDIUM;
use classboard_core::Zipf;
use serde::Deserialize;
use serde::Serialize;
use std::collections::HashMap;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrequencyBands {
    pub common: usize,
    pub medium: usize,
    pub rare: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerAggregate {
    pub player_id: String,
    pub total_words: usize,
    pub unique_words: HashSet<String>,
    pub words_by_length: HashMap<usize, usize>,
    pub words_by_frequency: FrequencyBands,
    pub first_seen_at: Option<u64>,
    pub last_seen_at: Option<u64>,
    pub sessions_participated: HashSet<String>,
}

/// Derived view computed on demand rather than stored.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerAggregateSnapshot {
    pub player_id: String,
    pub total_words: usize,
    pub unique_count: usize,
    pub diversity: f32,
    pub avg_word_length: f32,
    pub avg_word_frequency: f32,
    pub words_by_length: HashMap<usize, usize>,
    pub words_by_frequency: FrequencyBands,
    pub first_seen_at: Option<u64>,
    pub last_seen_at: Option<u64>,
    pub session_duration: u64,
    pub sessions_participated: usize,
}

impl PlayerAggregate {
    fn bin_frequency(&mut self, freq: Zipf, delta: i64) {
        let bucket = if freq >= FREQUENCY_BAND_COMMON {
            &mut self.words_by_frequency.common
        } else if freq >= FREQUENCY_BAND_MEDIUM {
            &mut self.words_by_frequency.medium
        } else {
            &mut self.words_by_frequency.rare
        };
        *bucket = (*bucket as i64 + delta).max(0) as usize;
    }

    fn apply_added(&mut self, event: &Event) {
        self.total_words += 1;
        self.unique_words.insert(event.word.clone());
        *self.words_by_length.entry(event.word_length).or_insert(0) += 1;
        self.bin_frequency(event.frequency_score, 1);
        self.sessions_participated.insert(event.session_id.clone());
        self.first_seen_at.get_or_insert(event.monotonic_timestamp);
        self.last_seen_at = Some(event.monotonic_timestamp);
    }

    pub fn snapshot(&self, word_frequency: &HashMap<String, usize>) -> PlayerAggregateSnapshot {
        let unique_count = self.unique_words.len();
        let total = self.total_words.max(1);
        let avg_word_length = if self.unique_words.is_empty() {
            0.0
        } else {
            self.unique_words.iter().map(|w| w.chars().count()).sum::<usize>() as f32
                / self.unique_words.len() as f32
        };
        let avg_word_frequency = if self.unique_words.is_empty() {
            0.0
        } else {
            self.unique_words.iter().filter_map(|w| word_frequency.get(w)).sum::<usize>() as f32
                / self.unique_words.len() as f32
        };
        let session_duration = match (self.first_seen_at, self.last_seen_at) {
            (Some(a), Some(b)) => b.saturating_sub(a),
            _ => 0,
        };
        PlayerAggregateSnapshot {
            player_id: self.player_id.clone(),
            total_words: self.total_words,
            unique_count,
            diversity: unique_count as f32 / total as f32,
            avg_word_length,
            avg_word_frequency,
            words_by_length: self.words_by_length.clone(),
            words_by_frequency: self.words_by_frequency.clone(),
            first_seen_at: self.first_seen_at,
            last_seen_at: self.last_seen_at,
            session_duration,
            sessions_participated: self.sessions_participated.len(),
        }
    }
}

impl From<&PlayerAggregateSnapshot> for classboard_dto::PlayerAggregateDto {
    fn from(snap: &PlayerAggregateSnapshot) -> Self {
        classboard_dto::PlayerAggregateDto {
            player_id: snap.player_id.clone(),
            total_words: snap.total_words,
            unique_count: snap.unique_count,
            diversity: snap.diversity,
            avg_word_length: snap.avg_word_length,
            avg_word_frequency: snap.avg_word_frequency,
            words_by_length: snap.words_by_length.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            words_by_frequency: classboard_dto::FrequencyBandsDto {
                common: snap.words_by_frequency.common,
                medium: snap.words_by_frequency.medium,
                rare: snap.words_by_frequency.rare,
            },
            first_seen_at: snap.first_seen_at,
            last_seen_at: snap.last_seen_at,
            sessions_participated: snap.sessions_participated,
            session_duration_secs: snap.session_duration,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Aggregator {
    players: HashMap<String, PlayerAggregate>,
    word_frequency: HashMap<String, usize>,
    #[serde(skip)]
    path: Option<PathBuf>,
}

impl Aggregator {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { players: HashMap::new(), word_frequency: HashMap::new(), path: Some(path.into()) }
    }

    /// Reloads persisted state if `path` exists; malformed content is
    /// ignored with a warning rather than treated as an error.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<Aggregator>(&contents) {
                Ok(mut loaded) => {
                    loaded.path = Some(path);
                    loaded
                }
                Err(e) => {
                    log::warn!("discarding malformed aggregate file {}: {e}", path.display());
                    Self::new(path)
                }
            },
            Err(_) => Self::new(path),
        }
    }

    pub fn apply(&mut self, events: &[Event]) {
        for event in events {
            match event.event_type {
                EventType::WordAdded => {
                    self.players
                        .entry(event.player_id.clone())
                        .or_insert_with(|| PlayerAggregate {
                            player_id: event.player_id.clone(),
                            ..Default::default()
                        })
                        .apply_added(event);
                    *self.word_frequency.entry(event.word.clone()).or_insert(0) += 1;
                }
                EventType::WordRemoved => {
                    // uniqueWords/totalWords are cumulative history, not a
                    // live set, so removal leaves counters untouched.
                }
            }
        }
    }

    pub fn player(&self, player_id: &str) -> Option<&PlayerAggregate> {
        self.players.get(player_id)
    }

    pub fn snapshot(&self, player_id: &str) -> Option<PlayerAggregateSnapshot> {
        self.players.get(player_id).map(|p| p.snapshot(&self.word_frequency))
    }

    /// Snapshots of every player seen so far, ordered by player id.
    pub fn all_snapshots(&self) -> Vec<PlayerAggregateSnapshot> {
        let mut ids: Vec<&String> = self.players.keys().collect();
        ids.sort();
        ids.into_iter().map(|id| self.players[id].snapshot(&self.word_frequency)).collect()
    }

    /// Atomically rewrites the aggregate file: write to a temp file in the
    /// same directory, then rename over the target.
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else { return Ok(()) };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("create aggregate directory")?;
        }
        let tmp = tmp_path(path);
        let json = serde_json::to_vec_pretty(self).context("serialize aggregate")?;
        std::fs::write(&tmp, json).context("write aggregate temp file")?;
        std::fs::rename(&tmp, path).context("rename aggregate temp file into place")?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().and_then(|n| n.to_str()).unwrap_or("aggregate").to_string();
    name.push_str(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn added(player: usize, word: &str, freq: Zipf, ts: u64) -> Event {
        Event::new("s1", ts, EventType::WordAdded, player, word, freq, word.chars().collect())
    }

    #[test]
    fn added_event_updates_counters() {
        let mut agg = Aggregator::new("/tmp/unused-aggregate.json");
        agg.apply(&[added(0, "cat", 6.0, 1)]);
        let snap = agg.snapshot("player_0").unwrap();
        assert_eq!(snap.total_words, 1);
        assert_eq!(snap.unique_count, 1);
        assert_eq!(snap.words_by_frequency.common, 1);
    }

    #[test]
    fn frequency_bands_split_correctly() {
        let mut agg = Aggregator::new("/tmp/unused-aggregate.json");
        agg.apply(&[added(0, "hi", 6.0, 1), added(0, "ok", 4.0, 1), added(0, "um", 1.0, 1)]);
        let snap = agg.snapshot("player_0").unwrap();
        assert_eq!(snap.words_by_frequency.common, 1);
        assert_eq!(snap.words_by_frequency.medium, 1);
        assert_eq!(snap.words_by_frequency.rare, 1);
    }

    #[test]
    fn diversity_is_unique_over_total() {
        let mut agg = Aggregator::new("/tmp/unused-aggregate.json");
        agg.apply(&[added(0, "cat", 6.0, 1), added(0, "cat", 6.0, 2)]);
        let snap = agg.snapshot("player_0").unwrap();
        assert_eq!(snap.total_words, 2);
        assert_eq!(snap.unique_count, 1);
        assert!((snap.diversity - 0.5).abs() < 1e-6);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aggregate.json");
        let mut agg = Aggregator::new(&path);
        agg.apply(&[added(0, "cat", 6.0, 1)]);
        agg.save().unwrap();
        assert!(!dir.path().join("aggregate.json.tmp").exists());
        let reloaded = Aggregator::load(&path);
        assert_eq!(reloaded.snapshot("player_0").unwrap().total_words, 1);
    }

    #[test]
    fn malformed_file_is_ignored_with_fresh_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aggregate.json");
        std::fs::write(&path, b"not json").unwrap();
        let agg = Aggregator::load(&path);
        assert!(agg.player("player_0").is_none());
    }

    #[test]
    fn missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let agg = Aggregator::load(&path);
        assert!(agg.player("player_0").is_none());
    }
}
