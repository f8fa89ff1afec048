use crate::insights::opponent_record::OpponentRecord;
use crate::insights::ranking::win_rate_percentage;

/// Aggregate totals across all opponents.
///
/// # Fields
///
/// * `total_games` - Sum of games played across every opponent.
/// * `total_wins` - Sum of wins across every opponent.
/// * `total_losses` - Games that were not wins.
/// * `overall_win_rate` - Total wins over total games, rounded to one decimal
///   place; 0 for an empty opponent set.
#[derive(Debug)]
pub struct OverallStats {
    pub total_games: u32,
    pub total_wins: u32,
    pub total_losses: u32,
    pub overall_win_rate: f64,
}

impl OverallStats {
    /// Computes the totals across the given record set.
    pub fn across(records: &[OpponentRecord]) -> Self {
        let total_games = records.iter().map(|record| record.games_played).sum();
        let total_wins = records.iter().map(|record| record.wins).sum();

        OverallStats {
            total_games,
            total_wins,
            total_losses: total_games - total_wins,
            overall_win_rate: win_rate_percentage(total_wins, total_games),
        }
    }
}
