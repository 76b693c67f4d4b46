use classboard_core::ID;
use classboard_core::PlayerIndex;
use classboard_core::Zipf;
use serde::Deserialize;
use serde::Serialize;

/// Marker type for [`ID<MoveEvent>`]; move events never hold a back-pointer
/// to this type, it exists purely so `ID` is distinguishable by use site.
pub struct MoveEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    WordAdded,
    WordRemoved,
}

/// One append-only journal record: a word appearing or disappearing from a
/// player's set between two consecutive fused states.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: ID<MoveEvent>,
    pub session_id: String,
    pub monotonic_timestamp: u64,
    pub event_type: EventType,
    pub player_id: String,
    pub player_index: PlayerIndex,
    pub word: String,
    pub word_length: usize,
    pub frequency_score: Zipf,
    pub letters_used: Vec<char>,
}

impl From<&Event> for classboard_dto::MoveEventDto {
    fn from(event: &Event) -> Self {
        let event_type = match event.event_type {
            EventType::WordAdded => "word_added",
            EventType::WordRemoved => "word_removed",
        };
        classboard_dto::MoveEventDto {
            id: event.id.to_string(),
            session_id: event.session_id.clone(),
            monotonic_timestamp: event.monotonic_timestamp,
            event_type: event_type.to_string(),
            player_id: event.player_id.clone(),
            player_index: event.player_index,
            word: event.word.clone(),
            word_length: event.word_length,
            frequency_score: event.frequency_score,
            letters_used: event.letters_used.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Event {
    pub fn new(
        session_id: &str,
        monotonic_timestamp: u64,
        event_type: EventType,
        player_index: PlayerIndex,
        word: &str,
        frequency_score: Zipf,
        letters_used: Vec<char>,
    ) -> Self {
        Self {
            id: ID::default(),
            session_id: session_id.to_string(),
            monotonic_timestamp,
            event_type,
            player_id: format!("player_{player_index}"),
            player_index,
            word: word.to_string(),
            word_length: word.chars().count(),
            frequency_score,
            letters_used,
        }
    }
}
