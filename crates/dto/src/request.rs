use serde::Deserialize;
use serde::Serialize;

/// `availableLetters` (or `available`) may arrive as a joined string or as
/// an array of single characters; both normalize to the same string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LettersField {
    Joined(String),
    Chars(Vec<char>),
}

impl LettersField {
    pub fn into_string(self) -> String {
        match self {
            LettersField::Joined(s) => s,
            LettersField::Chars(cs) => cs.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerWordsShape {
    #[serde(default)]
    pub words: Vec<String>,
}

/// `{ players: [{words:[...]}, ...], availableLetters: "..." }`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct FullUpdateRequest {
    pub players: Vec<PlayerWordsShape>,
    #[serde(rename = "availableLetters")]
    pub available_letters: Option<LettersField>,
}

/// `{ wordsPerPlayer: [[...]], available: "..." }`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlatUpdateRequest {
    #[serde(rename = "wordsPerPlayer")]
    pub words_per_player: Vec<Vec<String>>,
    #[serde(default)]
    pub available: Option<LettersField>,
}

/// `{ addedWords, removedWords, availableLetters }`, applied against the
/// last normalized snapshot held by the caller (see `classboard-fusion`'s
/// `normalize`). Both word lists are per-player, parallel to the prior
/// snapshot's player list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct DeltaUpdateRequest {
    #[serde(rename = "addedWords")]
    pub added_words: Vec<Vec<String>>,
    #[serde(rename = "removedWords")]
    pub removed_words: Vec<Vec<String>>,
    #[serde(rename = "availableLetters")]
    pub available_letters: Option<LettersField>,
}

/// The three equivalent shapes `/update-data` accepts. Tried in this order
/// so that a shape's foreign fields (rejected by `deny_unknown_fields`)
/// fall through to the next candidate rather than silently dropping data.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum UpdateDataRequest {
    Full(FullUpdateRequest),
    Flat(FlatUpdateRequest),
    Delta(DeltaUpdateRequest),
}

impl Default for UpdateDataRequest {
    fn default() -> Self {
        UpdateDataRequest::Full(FullUpdateRequest::default())
    }
}
