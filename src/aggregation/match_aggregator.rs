use crate::aggregation::opponent_group::OpponentGroup;
use crate::analysis_error::AnalysisError;
use crate::store::{DATABASE_NAME, GAMES_COLLECTION};

use log::debug;
use mongodb::bson::{doc, from_document, Document};
use mongodb::sync::Client;

/// Match category filtered on during aggregation.
pub const RANKED_DUEL: &str = "ranked_duel";

/// Collects per-opponent aggregate counts for the given account.
///
/// Issues one grouped query against the match collection: every ranked duel
/// the account participated in is expanded into one row per opponent, then
/// grouped by opponent id with win and loss counts taken against the match's
/// declared winner. The store returns the groups in no guaranteed order;
/// ranking owns ordering.
///
/// # Arguments
///
/// * `client` - The document store client.
/// * `account_id` - The canonical account id, as embedded in match documents.
///
/// # Returns
///
/// * `Ok(groups)` - One `OpponentGroup` per opponent faced, unordered.
/// * `Err(AnalysisError::Store)` - The query failed.
/// * `Err(AnalysisError::MalformedGroup)` - A result document did not match
///   the expected shape.
pub fn collect_opponent_groups(
    client: &Client,
    account_id: &str,
) -> Result<Vec<OpponentGroup>, AnalysisError> {
    let games = client
        .database(DATABASE_NAME)
        .collection::<Document>(GAMES_COLLECTION);

    let cursor = games.aggregate(opponent_pipeline(account_id), None)?;

    let mut groups = Vec::new();
    for document in cursor {
        groups.push(from_document::<OpponentGroup>(document?)?);
    }

    debug!("aggregated {} opponent groups", groups.len());

    Ok(groups)
}

/// Builds the aggregation pipeline for one account's ranked duels.
///
/// Stages: match on participant and game type, unwind the participant list,
/// drop the queried account's own rows, then group by opponent id counting
/// games, wins and losses.
fn opponent_pipeline(account_id: &str) -> Vec<Document> {
    vec![
        doc! {
            "$match": {
                "players.accountId": account_id,
                "gameType": RANKED_DUEL,
            }
        },
        doc! { "$unwind": "$players" },
        doc! {
            "$match": {
                "players.accountId": { "$ne": account_id },
            }
        },
        doc! {
            "$group": {
                "_id": "$players.accountId",
                "opponentUsername": { "$first": "$players.username" },
                "gamesPlayed": { "$sum": 1 },
                "wins": {
                    "$sum": {
                        "$cond": {
                            "if": { "$eq": ["$result.winner", account_id] },
                            "then": 1,
                            "else": 0,
                        }
                    }
                },
                "losses": {
                    "$sum": {
                        "$cond": {
                            "if": { "$ne": ["$result.winner", account_id] },
                            "then": 1,
                            "else": 0,
                        }
                    }
                },
            }
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_filters_on_participant_and_game_type() {
        let pipeline = opponent_pipeline("abc123");

        assert_eq!(pipeline.len(), 4);
        assert_eq!(
            pipeline[0],
            doc! {
                "$match": {
                    "players.accountId": "abc123",
                    "gameType": "ranked_duel",
                }
            }
        );
    }

    #[test]
    fn pipeline_expands_participants_and_drops_the_queried_account() {
        let pipeline = opponent_pipeline("abc123");

        assert_eq!(pipeline[1], doc! { "$unwind": "$players" });
        assert_eq!(
            pipeline[2],
            doc! { "$match": { "players.accountId": { "$ne": "abc123" } } }
        );
    }

    #[test]
    fn pipeline_counts_wins_and_losses_against_the_declared_winner() {
        let pipeline = opponent_pipeline("abc123");
        let group = pipeline[3].get_document("$group").unwrap();

        assert_eq!(group.get_str("_id").unwrap(), "$players.accountId");
        assert_eq!(
            group.get_document("wins").unwrap(),
            &doc! {
                "$sum": {
                    "$cond": {
                        "if": { "$eq": ["$result.winner", "abc123"] },
                        "then": 1,
                        "else": 0,
                    }
                }
            }
        );
        assert_eq!(
            group.get_document("losses").unwrap(),
            &doc! {
                "$sum": {
                    "$cond": {
                        "if": { "$ne": ["$result.winner", "abc123"] },
                        "then": 1,
                        "else": 0,
                    }
                }
            }
        );
    }

    #[test]
    fn group_documents_deserialize_with_wire_field_names() {
        let document = doc! {
            "_id": "opp-1",
            "opponentUsername": "alice",
            "gamesPlayed": 5,
            "wins": 3,
            "losses": 2,
        };

        let group = from_document::<OpponentGroup>(document).unwrap();

        assert_eq!(group.opponent_id, "opp-1");
        assert_eq!(group.username, "alice");
        assert_eq!(group.games_played, 5);
        assert_eq!(group.wins, 3);
        assert_eq!(group.losses, 2);
    }
}
