use crate::aggregation::opponent_group::OpponentGroup;
use crate::insights::opponent_record::OpponentRecord;

/// Derives win rates and ranks the full opponent set.
///
/// Sorts by descending games played, ties broken by ascending win rate, so
/// among equally-frequent opponents the harder ones surface first.
///
/// # Arguments
///
/// * `groups` - The unordered per-opponent aggregates.
///
/// # Returns
///
/// A `Vec` of `OpponentRecord` in ranked order.
pub fn rank_opponents(groups: Vec<OpponentGroup>) -> Vec<OpponentRecord> {
    let mut records: Vec<OpponentRecord> = groups.into_iter().map(to_record).collect();

    records.sort_by(|a, b| {
        b.games_played
            .cmp(&a.games_played)
            .then_with(|| a.win_rate.total_cmp(&b.win_rate))
    });

    records
}

/// Computes the percentage of games won, rounded to one decimal place.
///
/// Defined as 0 when no games were played; grouping cannot produce such a
/// record, but the totals across an empty opponent set can.
pub fn win_rate_percentage(wins: u32, games_played: u32) -> f64 {
    if games_played == 0 {
        return 0.0;
    }

    (wins as f64 / games_played as f64 * 1000.0).round() / 10.0
}

fn to_record(group: OpponentGroup) -> OpponentRecord {
    let win_rate = win_rate_percentage(group.wins, group.games_played);

    OpponentRecord {
        opponent_id: group.opponent_id,
        username: group.username,
        games_played: group.games_played,
        wins: group.wins,
        losses: group.losses,
        win_rate,
    }
}
