//! Application-level errors

use openapi_reader::{FetchError, FormatError, ParseError};
use thiserror::Error;

/// Result type alias for a report run
pub type AppResult<T> = std::result::Result<T, AppError>;

/// Fatal errors of a report run
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0} (supported: {1})")]
    UnsupportedFormat(FormatError, String),

    #[error("Failed to fetch OpenAPI spec: {0}")]
    Fetch(#[from] FetchError),

    #[error("Failed to read OpenAPI spec: {0}")]
    Parse(#[from] ParseError),

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

impl From<FormatError> for AppError {
    fn from(err: FormatError) -> Self {
        AppError::UnsupportedFormat(err, openapi_reader::supported_formats().join(", "))
    }
}
