use crate::insights::opponent_record::OpponentRecord;
use crate::report::export_error::ExportError;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Fixed name of the persisted JSON artifact, overwritten on every run.
pub const OUTPUT_FILE: &str = "opponent_stats_detailed.json";

/// Serializes the complete record set to a pretty-printed JSON array.
///
/// The whole document is written in one pass through a buffered writer; an
/// existing file at `path` is overwritten. An empty record set produces an
/// empty array.
///
/// # Arguments
///
/// * `path` - Destination of the artifact.
/// * `records` - The full, untruncated record set in ranked order.
///
/// # Returns
///
/// A `Result` indicating success or failure. Errors are represented by
/// `ExportError`.
pub fn write_detailed_stats(path: &Path, records: &[OpponentRecord]) -> Result<(), ExportError> {
    let json_output =
        serde_json::to_string_pretty(records).map_err(ExportError::Serialization)?;

    let file = File::create(path).map_err(ExportError::FileCreation)?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(json_output.as_bytes())
        .map_err(ExportError::FileWrite)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::ranking::win_rate_percentage;
    use std::fs;

    fn record(username: &str, games_played: u32, wins: u32) -> OpponentRecord {
        OpponentRecord {
            opponent_id: format!("id-{}", username),
            username: username.to_owned(),
            games_played,
            wins,
            losses: games_played - wins,
            win_rate: win_rate_percentage(wins, games_played),
        }
    }

    #[test]
    fn writes_records_with_the_wire_field_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OUTPUT_FILE);
        let records = vec![record("alice", 5, 5), record("bob", 4, 1)];

        write_detailed_stats(&path, &records).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let stats: serde_json::Value = serde_json::from_str(&contents).unwrap();

        assert_eq!(stats.as_array().unwrap().len(), 2);
        assert_eq!(stats[0]["_id"], "id-alice");
        assert_eq!(stats[0]["opponentUsername"], "alice");
        assert_eq!(stats[0]["gamesPlayed"], 5);
        assert_eq!(stats[0]["wins"], 5);
        assert_eq!(stats[0]["losses"], 0);
        assert_eq!(stats[0]["win_rate"], 100.0);
        assert_eq!(stats[1]["win_rate"], 25.0);
    }

    #[test]
    fn preserves_the_ranked_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OUTPUT_FILE);
        let records = vec![record("alice", 5, 5), record("bob", 4, 1)];

        write_detailed_stats(&path, &records).unwrap();

        let stats: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

        assert_eq!(stats[0]["opponentUsername"], "alice");
        assert_eq!(stats[1]["opponentUsername"], "bob");
    }

    #[test]
    fn empty_record_set_writes_an_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OUTPUT_FILE);

        write_detailed_stats(&path, &[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn overwrites_an_existing_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OUTPUT_FILE);

        write_detailed_stats(&path, &[record("alice", 5, 5)]).unwrap();
        write_detailed_stats(&path, &[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }
}
