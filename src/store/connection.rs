use crate::analysis_error::AnalysisError;

use log::debug;
use mongodb::sync::Client;
use std::env;

/// Environment variable holding the document store connection string.
pub const CONNECTION_STRING_VAR: &str = "MONGODB_URI";

/// Builds the document store client from the connection-string environment
/// variable.
///
/// The client is the single scoped resource of the program: acquired once
/// here, released implicitly at process exit. The driver connects lazily, so
/// connectivity faults surface on the first lookup rather than here.
///
/// # Returns
///
/// * `Ok(client)` - A client ready to serve lookups and aggregations.
/// * `Err(AnalysisError::MissingConnectionString)` - The environment variable is unset.
/// * `Err(AnalysisError::Store)` - The connection string could not be parsed.
pub fn connect_from_env() -> Result<Client, AnalysisError> {
    let uri =
        env::var(CONNECTION_STRING_VAR).map_err(|_| AnalysisError::MissingConnectionString)?;

    debug!("connecting to the document store");
    let client = Client::with_uri_str(&uri)?;

    Ok(client)
}
