//! Single-threaded solver loop: owns every piece of state that the
//! construction engine's subset cache and the fusion trackers require to be
//! touched without locks, and drains a FIFO queue one request at a time.
use crate::request::Job;
use crate::response::SolveResponse;
use classboard_construction::ScoreWeights;
use classboard_construction::SubsetCache;
use classboard_core::LetterCounts;
use classboard_core::MAX_UNIQUE_WORDS;
use classboard_core::Sequence;
use classboard_dictionary::Dictionary;
use classboard_dto::RawSnapshot;
use classboard_fusion::FusionEngine;
use classboard_journal::Event;
use classboard_journal::Journal;
use classboard_journal::PlayerAggregateSnapshot;
use std::path::Path;
use std::sync::mpsc::Receiver;
use std::sync::mpsc::Sender;
use std::sync::mpsc::channel;
use tokio::sync::oneshot;

pub struct Solver {
    dict: Dictionary,
    fusion: FusionEngine,
    journal: Journal,
    cache: Option<SubsetCache>,
    weights: ScoreWeights,
    sequence: Sequence,
}

impl Solver {
    pub fn new(dict: Dictionary, log_dir: &Path, weights: ScoreWeights) -> Self {
        Self {
            dict,
            fusion: FusionEngine::new(),
            journal: Journal::open(log_dir),
            cache: None,
            weights,
            sequence: 0,
        }
    }

    fn solve(&mut self, session_id: &str, raw: &RawSnapshot) -> anyhow::Result<SolveResponse> {
        let fused = self.fusion.process(&self.dict, raw);

        self.sequence += 1;
        let events = self.journal.record(&self.dict, session_id, self.sequence, &fused)?;

        let (unique_words, unique_counts) = unique_words_and_counts(&fused.words);
        let loose = LetterCounts::from_word(&fused.available_letters);
        let cache = classboard_construction::cache_for(self.cache.as_ref(), &unique_words, &unique_counts);
        let recommended = classboard_construction::recommend(
            &self.dict,
            &unique_words,
            &unique_counts,
            &loose,
            &cache,
            &self.weights,
        );
        let letters_to_steal =
            recommended.iter().map(|(word, c)| (word.clone(), c.letters_to_steal())).collect();
        self.cache = Some(cache);

        Ok(SolveResponse { fused, recommended, letters_to_steal, events })
    }

    fn run(mut self, rx: Receiver<Job>) {
        for job in rx {
            match job {
                Job::Solve { session_id, raw, respond_to } => {
                    let result = self.solve(&session_id, &raw);
                    let _ = respond_to.send(result);
                }
                Job::PlayerAggregate { player_id, respond_to } => {
                    let _ = respond_to.send(self.journal.aggregate(&player_id));
                }
                Job::AllAggregates { respond_to } => {
                    let _ = respond_to.send(self.journal.all_aggregates());
                }
                Job::History { respond_to } => {
                    let _ = respond_to.send(self.journal.history().to_vec());
                }
                Job::Flush { respond_to } => {
                    let _ = respond_to.send(self.journal.flush());
                }
            }
        }
    }
}

/// Caps the unique-word set fed into the subset cache at the longest
/// `MAX_UNIQUE_WORDS` words, so `2^n` never exceeds `2^MAX_UNIQUE_WORDS`
/// while keeping the words most likely to matter for construction.
fn unique_words_and_counts(words: &[String]) -> (Vec<String>, Vec<LetterCounts>) {
    let mut seen = std::collections::HashSet::new();
    let mut unique_words: Vec<String> = Vec::new();
    for w in words {
        if seen.insert(w.clone()) {
            unique_words.push(w.clone());
        }
    }
    unique_words.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    unique_words.truncate(MAX_UNIQUE_WORDS);
    let unique_counts = unique_words.iter().map(|w| LetterCounts::from_word(w)).collect();
    (unique_words, unique_counts)
}

/// Sender half of the solver's paired channel; cheap to clone and hand to
/// every HTTP worker thread.
#[derive(Clone)]
pub struct SolverHandle {
    tx: Sender<Job>,
}

impl SolverHandle {
    pub async fn solve(&self, session_id: String, raw: RawSnapshot) -> anyhow::Result<SolveResponse> {
        let (respond_to, rx) = oneshot::channel();
        self.send(Job::Solve { session_id, raw, respond_to })?;
        rx.await.map_err(|_| anyhow::anyhow!("solver dropped response channel"))?
    }

    pub async fn player_aggregate(&self, player_id: String) -> anyhow::Result<Option<PlayerAggregateSnapshot>> {
        let (respond_to, rx) = oneshot::channel();
        self.send(Job::PlayerAggregate { player_id, respond_to })?;
        rx.await.map_err(|_| anyhow::anyhow!("solver dropped response channel"))
    }

    pub async fn all_aggregates(&self) -> anyhow::Result<Vec<PlayerAggregateSnapshot>> {
        let (respond_to, rx) = oneshot::channel();
        self.send(Job::AllAggregates { respond_to })?;
        rx.await.map_err(|_| anyhow::anyhow!("solver dropped response channel"))
    }

    pub async fn history(&self) -> anyhow::Result<Vec<Event>> {
        let (respond_to, rx) = oneshot::channel();
        self.send(Job::History { respond_to })?;
        rx.await.map_err(|_| anyhow::anyhow!("solver dropped response channel"))
    }

    pub async fn flush(&self) -> anyhow::Result<()> {
        let (respond_to, rx) = oneshot::channel();
        self.send(Job::Flush { respond_to })?;
        rx.await.map_err(|_| anyhow::anyhow!("solver dropped response channel"))?
    }

    fn send(&self, job: Job) -> anyhow::Result<()> {
        self.tx.send(job).map_err(|_| anyhow::anyhow!("solver thread is not running"))
    }
}

/// Spawns the solver's dedicated OS thread and returns a handle to its
/// inbox. The loop is plain `std::thread::spawn`, not a `tokio` task: the
/// work is CPU-bound enumeration over dictionary candidates, and mixing
/// that into the async runtime would starve connection accept.
pub fn spawn(dict: Dictionary, log_dir: std::path::PathBuf, weights: ScoreWeights) -> SolverHandle {
    let (tx, rx): (Sender<Job>, Receiver<Job>) = channel();
    std::thread::spawn(move || {
        let solver = Solver::new(dict, &log_dir, weights);
        solver.run(rx);
    });
    SolverHandle { tx }
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
    fn unique_words_are_deduped_and_capped() {
        let words = vec!["cat".to_string(), "cat".to_string(), "dog".to_string()];
        let (unique, counts) = unique_words_and_counts(&words);
        assert_eq!(unique, vec!["cat".to_string(), "dog".to_string()]);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn cap_keeps_longest_words_not_first_occurrence() {
        let mut words: Vec<String> = (0..(MAX_UNIQUE_WORDS + 1)).map(|i| format!("a{i}")).collect();
        words.push("extraordinarily".to_string());
        let (unique, _) = unique_words_and_counts(&words);
        assert_eq!(unique.len(), MAX_UNIQUE_WORDS);
        assert!(unique.contains(&"extraordinarily".to_string()));
    }

    #[tokio::test]
    async fn solve_returns_recommendations_for_enqueued_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let dict = dict_with(&["cat", "act"]);
        let handle = spawn(dict, dir.path().to_path_buf(), ScoreWeights::default());

        let raw = RawSnapshot {
            players_words: vec![vec!["cat".to_string(), "act".to_string()]],
            available_letters: String::new(),
        };
        let response = handle.solve("s1".to_string(), raw).await.unwrap();
        assert_eq!(response.fused.words.len(), 2);
    }

    #[tokio::test]
    async fn aggregate_query_reflects_prior_solve() {
        let dir = tempfile::tempdir().unwrap();
        let dict = dict_with(&["cat"]);
        let handle = spawn(dict, dir.path().to_path_buf(), ScoreWeights::default());

        let raw =
            RawSnapshot { players_words: vec![vec!["cat".to_string()]], available_letters: String::new() };
        handle.solve("s1".to_string(), raw).await.unwrap();
        let snap = handle.player_aggregate("player_0".to_string()).await.unwrap().unwrap();
        assert_eq!(snap.total_words, 1);

        let history = handle.history().await.unwrap();
        assert_eq!(history.len(), 1);
    }
}
