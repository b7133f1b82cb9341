//! Report run orchestration

use std::io::Write;
use tracing::{debug, error, warn};

use crate::config::RunConfig;
use crate::error::AppResult;
use openapi_reader::{formatter_for, PathGrouper, SpecFetcher, SpecLocation};

/// What a finished run printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The report was written
    Printed { groups: usize, endpoints: usize },
    /// The document defines no `paths`; nothing was written
    NoApi,
}

/// Runs fetch, parse, group, format and print for one document
pub struct ReportRunner<'a> {
    fetcher: &'a dyn SpecFetcher,
    config: RunConfig,
}

impl<'a> ReportRunner<'a> {
    /// Create a runner reading documents through `fetcher`
    pub fn new(fetcher: &'a dyn SpecFetcher) -> Self {
        Self {
            fetcher,
            config: RunConfig::default(),
        }
    }

    /// Set the run configuration
    pub fn with_config(mut self, config: RunConfig) -> Self {
        self.config = config;
        self
    }

    /// Produce the report and write it to `out`.
    ///
    /// The report is fully built before the first line is written, so a
    /// failure never leaves a partial report behind.
    pub async fn run(&self, out: &mut dyn Write) -> AppResult<RunOutcome> {
        let formatter = formatter_for(&self.config.format)?;
        let location = SpecLocation::parse(&self.config.location)?;
        let exclusion = self.config.exclusion_policy();
        debug!(
            "Rendering {} as {}, excluding prefixes {:?}",
            location,
            formatter.name(),
            exclusion.prefixes()
        );

        let content = self.fetcher.fetch(&location).await?;
        debug!("Fetched {} bytes from {}", content.len(), location);

        let report = PathGrouper::build_from_str(
            &content,
            &exclusion,
            formatter.as_ref(),
        )?;

        let Some(report) = report else {
            error!("No API defined in the OpenAPI document");
            return Ok(RunOutcome::NoApi);
        };

        if report.title.is_none() {
            warn!("OpenAPI document has no info.title, skipping the title line");
        }

        for line in report.lines(formatter.as_ref()) {
            writeln!(out, "{}", line)?;
        }
        out.flush()?;

        Ok(RunOutcome::Printed {
            groups: report.groups.len(),
            endpoints: report.endpoint_count(),
        })
    }
}
