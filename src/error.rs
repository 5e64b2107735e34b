//! Error types for the fallible edges of the crate.
//!
//! Rendering itself never fails; these cover color parsing, seed card
//! interchange, and image export.

use thiserror::Error;

/// Color parsing errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    /// The string is not of the form `#rrggbb`.
    #[error("Invalid hex color: {0:?}")]
    InvalidHex(String),
}

/// Seed card interchange errors.
#[derive(Debug, Error)]
pub enum SeedCardError {
    /// The text is not valid JSON.
    #[error("Invalid seed card JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// The JSON value is not an object.
    #[error("Seed card payload must be an object")]
    NotAnObject,

    /// Neither the versioned nor the legacy shape matched.
    #[error("Unsupported seed card schema")]
    UnsupportedSchema,

    /// Encoding the card failed.
    #[error("Seed card serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Image export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Writing the output file failed.
    #[error("Export IO failed: {0}")]
    Io(#[from] std::io::Error),
}
