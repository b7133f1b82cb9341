//! Settings of a single report run

use openapi_reader::format::DEFAULT_FORMAT;
use openapi_reader::{ExclusionPolicy, DEFAULT_EXCLUDED_PREFIX, DEFAULT_TIMEOUT};
use std::time::Duration;

/// Everything a run needs besides the fetcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// URL or path of the spec document
    pub location: String,
    /// Output dialect name, matched case-insensitively
    pub format: String,
    /// Path prefixes left out of the report
    pub excluded_prefixes: Vec<String>,
    /// HTTP request timeout
    pub timeout: Duration,
    /// Extra attempts after a failed fetch
    pub retries: u32,
}

impl RunConfig {
    /// Default settings for `location`
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            ..Self::default()
        }
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn with_excluded_prefixes(mut self, prefixes: Vec<String>) -> Self {
        self.excluded_prefixes = prefixes;
        self
    }

    pub fn exclusion_policy(&self) -> ExclusionPolicy {
        ExclusionPolicy::new(self.excluded_prefixes.iter().cloned())
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            location: String::new(),
            format: DEFAULT_FORMAT.to_string(),
            excluded_prefixes: vec![DEFAULT_EXCLUDED_PREFIX.to_string()],
            timeout: DEFAULT_TIMEOUT,
            retries: 1,
        }
    }
}
