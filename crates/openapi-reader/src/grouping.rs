//! Grouping of endpoints by API root

use crate::error::ParseResult;
use crate::format::ReportFormatter;
use crate::operations::OperationExtractor;
use crate::parser::OpenApiParser;
use crate::types::SpecDocument;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::debug;

/// Path prefix excluded from reports unless configured otherwise
pub const DEFAULT_EXCLUDED_PREFIX: &str = "test";

/// Decides which paths are left out of a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionPolicy {
    prefixes: Vec<String>,
}

impl ExclusionPolicy {
    /// Exclude every path starting with one of `prefixes`
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Keep every path
    pub fn none() -> Self {
        Self {
            prefixes: Vec::new(),
        }
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    pub fn is_excluded(&self, path: &str) -> bool {
        self.prefixes.iter().any(|prefix| path.starts_with(prefix.as_str()))
    }
}

impl Default for ExclusionPolicy {
    fn default() -> Self {
        Self::new([DEFAULT_EXCLUDED_PREFIX])
    }
}

/// Endpoints grouped by the first tag of each path.
///
/// Groups iterate in ascending key order and each group's lines are sorted
/// by their rendered text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedReport {
    /// Document title, when declared
    pub title: Option<String>,
    /// Group key -> sorted endpoint lines
    pub groups: BTreeMap<String, Vec<String>>,
}

impl GroupedReport {
    /// Total number of endpoint lines
    pub fn endpoint_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Output lines in print order: title, then each group's header followed
    /// by its endpoints
    pub fn lines(&self, formatter: &dyn ReportFormatter) -> Vec<String> {
        let mut lines = Vec::with_capacity(1 + self.groups.len() + self.endpoint_count());

        if let Some(title) = &self.title {
            lines.push(formatter.format_title(title));
        }

        for (group, endpoints) in &self.groups {
            lines.push(formatter.format_header(group));
            lines.extend(endpoints.iter().map(|e| formatter.format_endpoint(e)));
        }

        lines
    }
}

/// Builds grouped reports from spec documents
pub struct PathGrouper;

impl PathGrouper {
    /// Group the endpoints of a `paths` object
    pub fn group(
        paths: &Map<String, Value>,
        exclusion: &ExclusionPolicy,
        formatter: &dyn ReportFormatter,
    ) -> ParseResult<BTreeMap<String, Vec<String>>> {
        let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for (path, item) in paths {
            if let Some(extracted) = OperationExtractor::extract_path(path, item, exclusion, formatter)? {
                groups
                    .entry(extracted.group)
                    .or_default()
                    .extend(extracted.endpoints);
            }
        }

        for endpoints in groups.values_mut() {
            endpoints.sort();
        }

        debug!("Grouped {} paths into {} groups", paths.len(), groups.len());

        Ok(groups)
    }

    /// Build the report of a parsed document.
    ///
    /// Returns `Ok(None)` when the document defines no `paths`.
    pub fn build(
        document: &SpecDocument,
        exclusion: &ExclusionPolicy,
        formatter: &dyn ReportFormatter,
    ) -> ParseResult<Option<GroupedReport>> {
        let Some(paths) = &document.paths else {
            return Ok(None);
        };

        let groups = Self::group(paths, exclusion, formatter)?;

        Ok(Some(GroupedReport {
            title: document.title.clone(),
            groups,
        }))
    }

    /// Parse raw spec text and build its report
    pub fn build_from_str(
        content: &str,
        exclusion: &ExclusionPolicy,
        formatter: &dyn ReportFormatter,
    ) -> ParseResult<Option<GroupedReport>> {
        let document = OpenApiParser::parse(content)?;
        Self::build(&document, exclusion, formatter)
    }
}
