use serde::Serialize;

/// One opponent's head-to-head record, ready for reporting.
///
/// Serializes with the wire field names of the persisted artifact.
///
/// # Fields
///
/// * `opponent_id` - The opponent's account id.
/// * `username` - The opponent's display name.
/// * `games_played` - Total ranked duels against this opponent.
/// * `wins` - Duels won by the queried account.
/// * `losses` - Duels won by anyone else; `wins + losses == games_played`.
/// * `win_rate` - Percentage of duels won, rounded to one decimal place.
#[derive(Debug, Serialize)]
pub struct OpponentRecord {
    #[serde(rename = "_id")]
    pub opponent_id: String,
    #[serde(rename = "opponentUsername")]
    pub username: String,
    #[serde(rename = "gamesPlayed")]
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub win_rate: f64,
}
