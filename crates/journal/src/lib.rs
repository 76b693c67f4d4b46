//! Move journal: diffs fused snapshots into add/remove events, appends them
//! to a crash-tolerant event log, and rolls them into per-player vocabulary
//! aggregates.
mod aggregate;
mod diff;
mod event;
mod log;

pub use aggregate::Aggregator;
pub use aggregate::FrequencyBands;
pub use aggregate::PlayerAggregate;
pub use aggregate::PlayerAggregateSnapshot;
pub use diff::PlayerWordSets;
pub use event::Event;
pub use event::EventType;
pub use event::MoveEvent;
pub use log::EventLog;
pub use log::read_all as read_event_log;

use anyhow::Result;
use classboard_dictionary::Dictionary;
use classboard_fusion::FusedSnapshot;
use std::path::Path;

/// Ties the diff, event log, and aggregator together behind one call per
/// solved snapshot.
pub struct Journal {
    word_sets: PlayerWordSets,
    event_log: EventLog,
    aggregator: Aggregator,
    history: Vec<Event>,
}

impl Journal {
    pub fn open(log_dir: &Path) -> Self {
        let log_path = log_dir.join("player_vocabulary.jsonl");
        let history = log::read_all(&log_path).unwrap_or_default();
        Self {
            word_sets: PlayerWordSets::new(),
            event_log: EventLog::open(log_path),
            aggregator: Aggregator::load(log_dir.join("vocabulary_aggregate.json")),
            history,
        }
    }

    /// Diffs `fused` against the stored previous words, appends the
    /// resulting events to the log, and folds them into the aggregator.
    pub fn record(
        &mut self,
        dict: &Dictionary,
        session_id: &str,
        monotonic_timestamp: u64,
        fused: &FusedSnapshot,
    ) -> Result<Vec<Event>> {
        let events = self.word_sets.diff(dict, session_id, monotonic_timestamp, fused);
        self.aggregator.apply(&events);
        self.event_log.append(events.clone())?;
        self.history.extend(events.iter().cloned());
        Ok(events)
    }

    pub fn aggregate(&self, player_id: &str) -> Option<PlayerAggregateSnapshot> {
        self.aggregator.snapshot(player_id)
    }

    pub fn all_aggregates(&self) -> Vec<PlayerAggregateSnapshot> {
        self.aggregator.all_snapshots()
    }

    /// Full event history in chronological order (oldest first, newest
    /// last), including events not yet flushed to disk.
    pub fn history(&self) -> &[Event] {
        &self.history
    }

    /// Flushes the event log buffer and rewrites the aggregate file. Called
    /// on the periodic save tick and on orderly shutdown.
    pub fn flush(&mut self) -> Result<()> {
        self.event_log.flush()?;
        self.aggregator.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict_with(words: &[&str]) -> Dictionary {
        let dir = tempfile::tempdir().unwrap();
        let mut f = std::fs::File::create(dir.path().join("words.txt")).unwrap();
        for w in words {
            use std::io::Write;
            writeln!(f, "{}", w).unwrap();
        }
        Dictionary::load(dir.path())
    }

    #[test]
    fn record_persists_events_and_updates_aggregate() {
        let dir = tempfile::tempdir().unwrap();
        let dict = dict_with(&["cat"]);
        let mut journal = Journal::open(dir.path());
        let fused = FusedSnapshot {
            words: vec!["cat".to_string()],
            available_letters: String::new(),
            attribution: [("cat".to_string(), 0usize)].into_iter().collect(),
        };
        let events = journal.record(&dict, "s1", 1, &fused).unwrap();
        assert_eq!(events.len(), 1);
        journal.flush().unwrap();
        assert!(dir.path().join("vocabulary_aggregate.json").exists());
        let snap = journal.aggregate("player_0").unwrap();
        assert_eq!(snap.total_words, 1);
    }
}
