//! Error types for the SGPI catalog core.

use thiserror::Error;

/// Errors that can occur while loading or configuring catalogs.
///
/// `CatalogSync` never lets these reach a view: they are logged and turned
/// into an empty or cached catalog instead.
#[derive(Error, Debug)]
pub enum SgpiError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Remote rejected '{action}' with result {result:?}")]
    Rejected { action: String, result: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for catalog operations.
pub type SgpiResult<T> = Result<T, SgpiError>;
