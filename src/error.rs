//! Error types for Genflow.
//!
//! All errors in Genflow are represented by the `GenflowError` enum.
//! Only [`GenflowError::Config`] is fatal to a generation run; generation,
//! parse and validation failures are absorbed by the fallback path.

use thiserror::Error;

/// Unified error type for all Genflow operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenflowError {
    /// Configuration errors (missing credential, unreadable config file).
    #[error("{0}")]
    Config(String),

    /// Model call failures (network, auth, quota, empty response).
    #[error("{0}")]
    Generation(String),

    /// Model output is not valid JSON.
    #[error("{0}")]
    Parse(String),

    /// Decoded output is missing the required workflow structure.
    #[error("{0}")]
    Validation(String),

    /// Data conversion errors.
    #[error("{0}")]
    Convert(String),

    /// I/O operation errors.
    #[error("{0}")]
    IoError(String),
}

impl From<std::io::Error> for GenflowError {
    fn from(error: std::io::Error) -> Self {
        GenflowError::IoError(error.to_string())
    }
}

impl From<serde_json::Error> for GenflowError {
    fn from(error: serde_json::Error) -> Self {
        GenflowError::Convert(error.to_string())
    }
}

impl From<toml::de::Error> for GenflowError {
    fn from(error: toml::de::Error) -> Self {
        GenflowError::Config(error.to_string())
    }
}

impl From<reqwest::Error> for GenflowError {
    fn from(error: reqwest::Error) -> Self {
        GenflowError::Generation(error.to_string())
    }
}

impl From<jsonschema::ValidationError<'_>> for GenflowError {
    fn from(error: jsonschema::ValidationError<'_>) -> Self {
        GenflowError::Validation(error.to_string())
    }
}
