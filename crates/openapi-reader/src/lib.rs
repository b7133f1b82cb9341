//! # openapi-reader
//!
//! Reads OpenAPI/Swagger documents and turns them into authorization
//! matrices: endpoints grouped by their first tag, each listed with its
//! method, path, description and required roles.

mod types;
mod parser;
mod operations;
mod grouping;
mod fetch;
mod error;
pub mod format;

pub use types::*;
pub use parser::OpenApiParser;
pub use operations::{OperationExtractor, PathEndpoints, NO_DESCRIPTION};
pub use grouping::{ExclusionPolicy, GroupedReport, PathGrouper, DEFAULT_EXCLUDED_PREFIX};
pub use fetch::{HttpFetcher, SpecFetcher, SpecLocation, DEFAULT_TIMEOUT};
pub use format::{formatter_for, supported_formats, ReportFormatter};
pub use error::{FetchError, FetchResult, FormatError, ParseError, ParseResult};
