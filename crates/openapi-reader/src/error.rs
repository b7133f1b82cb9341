//! Error types for the OpenAPI reader

use thiserror::Error;

/// Result type alias for parsing and extraction
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Result type alias for spec fetching
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Errors raised while reading a spec document
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unexpected shape at {location}: {reason}")]
    InvalidShape { location: String, reason: String },

    #[error("Document is empty")]
    EmptyDocument,

    #[error("Path '{path}' has no tag on its first operation")]
    MissingTags { path: String },
}

impl ParseError {
    pub(crate) fn shape(location: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        ParseError::InvalidShape {
            location: location.into(),
            reason: reason.to_string(),
        }
    }
}

/// Errors raised while retrieving a spec document
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while selecting an output dialect
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Unsupported format '{0}'")]
    UnsupportedFormat(String),
}
