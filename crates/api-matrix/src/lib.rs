//! # api-matrix
//!
//! Fetches an OpenAPI document and prints its authorization matrix in wiki
//! or Markdown syntax.

mod config;
mod error;
mod runner;

pub use config::RunConfig;
pub use error::{AppError, AppResult};
pub use runner::{ReportRunner, RunOutcome};
