//! Process-wide board state: the single solver handle every HTTP worker
//! submits snapshots to, the three broadcast topics observers subscribe to,
//! the definitions cache, and the last normalized snapshot delta requests
//! merge against.
use crate::definitions::Definitions;
use classboard_dictionary::Dictionary;
use classboard_dto::RawSnapshot;
use classboard_dto::UpdateDataRequest;
use classboard_workers::SolverHandle;
use std::path::Path;
use std::sync::Mutex;
use tokio::sync::broadcast;

const BROADCAST_CAPACITY: usize = 64;

pub struct Board {
    pub session_id: String,
    pub solver: SolverHandle,
    pub definitions: Definitions,
    prior_snapshot: Mutex<Option<RawSnapshot>>,
    data_topic: broadcast::Sender<String>,
    move_log_topic: broadcast::Sender<String>,
    image_topic: broadcast::Sender<String>,
}

impl Board {
    pub fn new(dict: Dictionary, data_dir: &Path, log_dir: &Path, weights: classboard_construction::ScoreWeights) -> Self {
        let solver = classboard_workers::spawn(dict, log_dir.to_path_buf(), weights);
        Self {
            session_id: uuid::Uuid::now_v7().to_string(),
            solver,
            definitions: Definitions::new(data_dir),
            prior_snapshot: Mutex::new(None),
            data_topic: broadcast::Sender::new(BROADCAST_CAPACITY),
            move_log_topic: broadcast::Sender::new(BROADCAST_CAPACITY),
            image_topic: broadcast::Sender::new(BROADCAST_CAPACITY),
        }
    }

    /// Normalizes an incoming `/update-data` payload against the last
    /// stored snapshot (for delta requests) and stores the result as the
    /// new "last normalized snapshot".
    pub fn normalize(&self, req: UpdateDataRequest) -> RawSnapshot {
        let mut prior = self.prior_snapshot.lock().unwrap();
        let normalized = RawSnapshot::from_request(req, prior.as_ref());
        *prior = Some(normalized.clone());
        normalized
    }

    pub fn subscribe_data(&self) -> broadcast::Receiver<String> {
        self.data_topic.subscribe()
    }
    pub fn subscribe_move_log(&self) -> broadcast::Receiver<String> {
        self.move_log_topic.subscribe()
    }
    pub fn subscribe_image(&self) -> broadcast::Receiver<String> {
        self.image_topic.subscribe()
    }

    /// Publishes to the `data` topic, returning the number of observers the
    /// message reached.
    pub fn publish_data(&self, payload: &str) -> usize {
        self.data_topic.send(payload.to_string()).unwrap_or(0)
    }
    pub fn publish_move_log(&self, payload: &str) -> usize {
        self.move_log_topic.send(payload.to_string()).unwrap_or(0)
    }
    pub fn publish_image(&self, payload: &str) -> usize {
        self.image_topic.send(payload.to_string()).unwrap_or(0)
    }
}
