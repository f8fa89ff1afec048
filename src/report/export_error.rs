use thiserror::Error;

/// Errors that may occur while persisting the detailed stats artifact.
///
/// # Variants
///
/// * `Serialization` - The record set could not be serialized.
/// * `FileCreation` - The output file could not be created.
/// * `FileWrite` - The serialized document could not be written out.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize the opponent stats: {0}")]
    Serialization(serde_json::Error),

    #[error("failed to create the output file: {0}")]
    FileCreation(std::io::Error),

    #[error("failed to write the output file: {0}")]
    FileWrite(std::io::Error),
}
