use serde::{Deserialize, Serialize};

/// A finished game as it is stored on disk.
///
/// Records are written once and never change afterwards. The `id` is assigned
/// by the store on insertion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub id: i64,
    pub player_black: String,
    pub player_white: String,
    /// Free-form, no particular format is enforced.
    pub date: String,
    /// The serialized move list. Opaque to the store.
    pub moves: String,
    /// Free-form, e.g. "Black wins".
    pub game_result: String,
}
