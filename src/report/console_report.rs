use crate::insights::highlights::Highlights;
use crate::insights::opponent_record::OpponentRecord;
use crate::insights::overall_stats::OverallStats;
use crate::report::table::{render_grid, truncate_name, Align};

/// Maximum number of rows shown in the ranked table.
const TABLE_LIMIT: usize = 20;

/// Maximum characters of a username shown in the ranked table.
const NAME_WIDTH: usize = 20;

/// Maximum perfect-record opponents listed in the narrative block.
const PERFECT_LIMIT: usize = 5;

/// Prints the full console report for a ranked record set.
///
/// An empty record set prints a dedicated no-games message in place of the
/// table, totals and narrative; the caller still persists the (empty)
/// artifact afterwards.
///
/// # Arguments
///
/// * `records` - The record set in ranked order.
/// * `overall` - Aggregate totals across all records.
/// * `notable` - The derived highlight facts.
pub fn print_report(records: &[OpponentRecord], overall: &OverallStats, notable: &Highlights) {
    println!("=== RANKED DUEL OPPONENT ANALYSIS ===");
    println!("Total opponents analyzed: {}", records.len());
    println!();

    if records.is_empty() {
        println!("No ranked duel games found for this account!");
        return;
    }

    print_ranking_table(records);
    println!();
    print_overall_stats(overall);
    println!();
    print_notable_opponents(notable);
}

/// Prints the ranked table, limited to the most played opponents.
fn print_ranking_table(records: &[OpponentRecord]) {
    println!("=== TOP {} MOST PLAYED OPPONENTS ===", TABLE_LIMIT);

    let headers = ["Rank", "Username", "Games", "Wins", "Losses", "Win Rate"];
    let aligns = [
        Align::Right,
        Align::Left,
        Align::Right,
        Align::Right,
        Align::Right,
        Align::Right,
    ];

    let rows: Vec<Vec<String>> = records
        .iter()
        .take(TABLE_LIMIT)
        .enumerate()
        .map(|(index, record)| {
            vec![
                (index + 1).to_string(),
                truncate_name(&record.username, NAME_WIDTH),
                record.games_played.to_string(),
                record.wins.to_string(),
                record.losses.to_string(),
                format!("{:.1}%", record.win_rate),
            ]
        })
        .collect();

    print!("{}", render_grid(&headers, &aligns, &rows));
}

fn print_overall_stats(overall: &OverallStats) {
    println!("=== OVERALL STATS ===");
    println!("Total Games Played: {}", overall.total_games);
    println!("Total Wins: {}", overall.total_wins);
    println!("Total Losses: {}", overall.total_losses);
    println!("Overall Win Rate: {:.1}%", overall.overall_win_rate);
}

/// Prints the narrative block; each line is omitted when nobody qualifies
/// for its category.
fn print_notable_opponents(notable: &Highlights) {
    println!("=== NOTABLE OPPONENTS ===");

    if let Some(most_played) = notable.most_played {
        println!(
            "Most played against: {} ({} games, {:.1}% win rate)",
            most_played.username, most_played.games_played, most_played.win_rate
        );
    }

    if let Some(toughest) = notable.toughest {
        println!(
            "Toughest opponent (3+ games): {} ({:.1}% win rate over {} games)",
            toughest.username, toughest.win_rate, toughest.games_played
        );
    }

    if !notable.perfect_records.is_empty() {
        println!(
            "Perfect records against ({} opponents with 3+ games)",
            notable.perfect_records.len()
        );
        for record in notable.perfect_records.iter().take(PERFECT_LIMIT) {
            println!("  - {}: {}-0", record.username, record.games_played);
        }
    }

    if let Some(nemesis) = notable.nemesis {
        println!(
            "Your nemesis: {} ({:.1}% win rate over {} games)",
            nemesis.username, nemesis.win_rate, nemesis.games_played
        );
    }
}
