use crate::insights::opponent_record::OpponentRecord;

/// Minimum games played for an opponent to qualify for the filtered
/// highlights.
pub const MIN_GAMES_FOR_HIGHLIGHTS: u32 = 3;

/// Notable opponents derived from the ranked record set.
///
/// # Fields
///
/// * `most_played` - The opponent with the most games; first on ties.
/// * `toughest` - Among qualifying opponents, the lowest win rate; first in
///   ranked order on ties.
/// * `perfect_records` - Qualifying opponents never lost to, in ranked order.
/// * `nemesis` - Among qualifying opponents with a losing record, the lowest
///   win rate.
#[derive(Debug)]
pub struct Highlights<'a> {
    pub most_played: Option<&'a OpponentRecord>,
    pub toughest: Option<&'a OpponentRecord>,
    pub perfect_records: Vec<&'a OpponentRecord>,
    pub nemesis: Option<&'a OpponentRecord>,
}

/// Derives the notable opponents from a record set already in ranked order.
///
/// Every highlight is a simple scan; a category nobody qualifies for yields
/// `None` or an empty list rather than an error.
pub fn find_notable_opponents(records: &[OpponentRecord]) -> Highlights<'_> {
    let qualifying = || {
        records
            .iter()
            .filter(|record| record.games_played >= MIN_GAMES_FOR_HIGHLIGHTS)
    };

    Highlights {
        // Ranked order puts the most played opponent first.
        most_played: records.first(),
        toughest: qualifying().min_by(|a, b| a.win_rate.total_cmp(&b.win_rate)),
        perfect_records: qualifying()
            .filter(|record| record.win_rate == 100.0)
            .collect(),
        nemesis: qualifying()
            .filter(|record| record.win_rate < 50.0)
            .min_by(|a, b| a.win_rate.total_cmp(&b.win_rate)),
    }
}
