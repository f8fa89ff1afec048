mod aggregation;
mod analysis_error;
mod identity;
mod insights;
mod report;
mod store;

use crate::aggregation::match_aggregator::collect_opponent_groups;
use crate::analysis_error::AnalysisError;
use crate::identity::resolver::resolve_account_id;
use crate::insights::highlights::find_notable_opponents;
use crate::insights::overall_stats::OverallStats;
use crate::insights::ranking::rank_opponents;
use crate::report::console_report::print_report;
use crate::report::json_export::{write_detailed_stats, OUTPUT_FILE};
use crate::store::connection::connect_from_env;

use clap::Parser;
use std::io::{self, Write};
use std::path::Path;
use std::process;

/// Head-to-head statistics for one player's ranked duels.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Username to analyze. Prompts interactively when omitted.
    username: Option<String>,
}

/// Prompts for a username on standard input.
///
/// # Returns
///
/// * `Ok(username)` - The trimmed response.
/// * `Err(AnalysisError::MissingUsername)` - The prompt could not be read;
///   an unreadable prompt is treated the same as no answer.
fn prompt_for_username() -> Result<String, AnalysisError> {
    print!("Enter username: ");
    io::stdout()
        .flush()
        .map_err(|_| AnalysisError::MissingUsername)?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .map_err(|_| AnalysisError::MissingUsername)?;

    Ok(line.trim().to_owned())
}

/// Runs the analysis pipeline: resolve identity, aggregate matches, rank,
/// report, persist.
fn run() -> Result<(), AnalysisError> {
    let cli = Cli::parse();

    let username = match cli.username {
        Some(username) => username.trim().to_owned(),
        None => prompt_for_username()?,
    };
    if username.is_empty() {
        return Err(AnalysisError::MissingUsername);
    }

    let client = connect_from_env()?;
    let account_id = resolve_account_id(&client, &username)?;

    println!("Analyzing account: {} ({})", username, account_id);
    println!();

    let groups = collect_opponent_groups(&client, &account_id)?;
    let records = rank_opponents(groups);
    let overall = OverallStats::across(&records);
    let notable = find_notable_opponents(&records);

    print_report(&records, &overall, &notable);

    println!();
    println!("=== SAVE DATA ===");
    write_detailed_stats(Path::new(OUTPUT_FILE), &records)?;
    println!("Detailed stats saved to: {}", OUTPUT_FILE);

    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        println!("{}", err);
        process::exit(1);
    }
}
