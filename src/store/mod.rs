pub mod connection;

/// Name of the database holding the account and match collections.
pub const DATABASE_NAME: &str = "test";

/// Collection of account documents (`_id`, `username`).
pub const USERS_COLLECTION: &str = "users";

/// Collection of match documents (`players`, `gameType`, `result.winner`).
pub const GAMES_COLLECTION: &str = "games";
