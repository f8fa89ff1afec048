use serde::Deserialize;

/// Per-opponent aggregate counts for one queried account.
///
/// Deserialized from one grouped result document of the match query; the
/// field renames follow the wire names the store emits.
///
/// # Fields
///
/// * `opponent_id` - The opponent's account id, unique across the result set.
/// * `username` - The opponent's display name, first seen in the matches.
/// * `games_played` - Total qualifying matches against this opponent.
/// * `wins` - Matches whose declared winner is the queried account.
/// * `losses` - Matches whose declared winner is anyone else.
#[derive(Debug, Deserialize)]
pub struct OpponentGroup {
    #[serde(rename = "_id")]
    pub(crate) opponent_id: String,
    #[serde(rename = "opponentUsername")]
    pub(crate) username: String,
    #[serde(rename = "gamesPlayed")]
    pub(crate) games_played: u32,
    pub(crate) wins: u32,
    pub(crate) losses: u32,
}
