use crate::report::export_error::ExportError;

use thiserror::Error;

/// Fatal error kinds for an analysis run.
///
/// Every variant is unrecoverable at the point it is detected: `main` prints
/// the Display form to standard output and exits with a non-zero status.
///
/// # Variants
///
/// * `MissingUsername` - No username was supplied, or the response was empty.
/// * `MissingConnectionString` - The connection-string environment variable is unset.
/// * `UnknownUsername` - No account document matched the given username.
/// * `Store` - The document store rejected or failed a lookup or query.
/// * `MalformedGroup` - An aggregation result document did not match the expected shape.
/// * `Export` - The detailed stats artifact could not be written.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Username is required!")]
    MissingUsername,

    #[error(
        "Error: MONGODB_URI environment variable not set!\n\
         Set it with: export MONGODB_URI='mongodb://...'"
    )]
    MissingConnectionString,

    #[error(
        "Username '{0}' not found in database!\n\
         Make sure you've entered the exact username."
    )]
    UnknownUsername(String),

    #[error("Store query failed: {0}")]
    Store(#[from] mongodb::error::Error),

    #[error("Malformed opponent group document: {0}")]
    MalformedGroup(#[from] mongodb::bson::de::Error),

    #[error("Failed to save detailed stats: {0}")]
    Export(#[from] ExportError),
}
