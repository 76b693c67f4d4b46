use crate::Block;
use serde::Serialize;
use std::collections::HashMap;

/// Response to `/update-data` and `/update-image`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateResponse {
    pub ok: bool,
    pub broadcast: usize,
}

/// Response to `GET /definition/:word`.
#[derive(Debug, Clone, Serialize)]
pub struct DefinitionResponse {
    pub ok: bool,
    pub word: String,
    pub definition: Option<String>,
}

/// `recommended_words` preserves score-descending insertion order, which a
/// `BTreeMap` (alphabetical) or a `HashMap` (unspecified) cannot express.
#[derive(Debug, Clone, Default)]
pub struct RecommendedWords(pub Vec<(String, Vec<Block>)>);

impl Serialize for RecommendedWords {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (word, blocks) in &self.0 {
            map.serialize_entry(word, blocks)?;
        }
        map.end()
    }
}

/// Full per-snapshot broadcast payload on the `data` topic.
#[derive(Debug, Clone, Serialize)]
pub struct BroadcastData {
    pub players: Vec<crate::PlayerWordsShape>,
    #[serde(rename = "availableLetters")]
    pub available_letters: String,
    pub recommended_words: RecommendedWords,
    #[serde(rename = "lettersToSteal")]
    pub letters_to_steal: HashMap<String, usize>,
    #[serde(rename = "_analytics", skip_serializing_if = "Option::is_none")]
    pub analytics: Option<AnalyticsSummary>,
}

/// Optional analytics summary embedded in the broadcast payload for the
/// teacher view.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsSummary {
    pub changes: Vec<MoveEventDto>,
    #[serde(rename = "vocabularyStats")]
    pub vocabulary_stats: Vec<PlayerAggregateDto>,
}

/// Wire shape of one move event, for the `move-log` topic and
/// `/analytics/move-log`.
#[derive(Debug, Clone, Serialize)]
pub struct MoveEventDto {
    pub id: String,
    #[serde(rename = "sessionId")]
    pub session_id: String,
    #[serde(rename = "monotonicTimestamp")]
    pub monotonic_timestamp: u64,
    #[serde(rename = "eventType")]
    pub event_type: String,
    #[serde(rename = "playerId")]
    pub player_id: String,
    #[serde(rename = "playerIndex")]
    pub player_index: usize,
    pub word: String,
    #[serde(rename = "wordLength")]
    pub word_length: usize,
    #[serde(rename = "frequencyScore")]
    pub frequency_score: f32,
    #[serde(rename = "lettersUsed")]
    pub letters_used: Vec<String>,
}

/// Wire shape of one player's rolling vocabulary aggregate.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerAggregateDto {
    #[serde(rename = "playerId")]
    pub player_id: String,
    #[serde(rename = "totalWords")]
    pub total_words: usize,
    #[serde(rename = "uniqueCount")]
    pub unique_count: usize,
    pub diversity: f32,
    #[serde(rename = "avgWordLength")]
    pub avg_word_length: f32,
    #[serde(rename = "avgWordFrequency")]
    pub avg_word_frequency: f32,
    #[serde(rename = "wordsByLength")]
    pub words_by_length: HashMap<String, usize>,
    #[serde(rename = "wordsByFrequency")]
    pub words_by_frequency: FrequencyBandsDto,
    #[serde(rename = "firstSeenAt", skip_serializing_if = "Option::is_none")]
    pub first_seen_at: Option<u64>,
    #[serde(rename = "lastSeenAt", skip_serializing_if = "Option::is_none")]
    pub last_seen_at: Option<u64>,
    #[serde(rename = "sessionsParticipated")]
    pub sessions_participated: usize,
    #[serde(rename = "sessionDuration")]
    pub session_duration_secs: u64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FrequencyBandsDto {
    pub common: usize,
    pub medium: usize,
    pub rare: usize,
}

/// Response to `GET /analytics/move-log`.
#[derive(Debug, Clone, Serialize)]
pub struct MoveLogResponse {
    pub ok: bool,
    pub data: MoveLogData,
}

#[derive(Debug, Clone, Serialize)]
pub struct MoveLogData {
    pub events: Vec<MoveEventDto>,
}

/// Wire shape published on the `image` topic.
#[derive(Debug, Clone, Serialize)]
pub struct ImageUpdateMessage {
    #[serde(rename = "type")]
    pub kind: String,
    pub timestamp: u64,
    pub data: ImagePayload,
    pub processed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImagePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base64: Option<String>,
}
