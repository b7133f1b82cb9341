//! Endpoint extraction from path items

use crate::error::{ParseError, ParseResult};
use crate::format::ReportFormatter;
use crate::grouping::ExclusionPolicy;
use crate::parser::kind_of;
use crate::types::*;
use serde_json::{Map, Value};
use tracing::debug;

/// Description used when an operation has neither summary nor operationId
pub const NO_DESCRIPTION: &str = "No description";

/// Endpoints of one path, ready to be grouped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEndpoints {
    /// Group key: first tag of the path's first operation
    pub group: String,
    /// One formatted line per operation, in document order
    pub endpoints: Vec<String>,
}

/// Extracts formatted endpoint lines from the operations of a path
pub struct OperationExtractor;

impl OperationExtractor {
    /// Extract the endpoints declared under one path.
    ///
    /// Returns `Ok(None)` when the path is excluded or declares no operation.
    pub fn extract_path(
        path: &str,
        path_item: &Value,
        exclusion: &ExclusionPolicy,
        formatter: &dyn ReportFormatter,
    ) -> ParseResult<Option<PathEndpoints>> {
        let item = path_item.as_object().ok_or_else(|| {
            ParseError::shape(
                format!("paths.{}", path),
                format!("expected an object, found {}", kind_of(path_item)),
            )
        })?;

        let operations = Self::operations(path, item)?;

        let Some((_, first)) = operations.first() else {
            debug!("Path {} declares no operation", path);
            return Ok(None);
        };

        let group = first
            .tags
            .first()
            .cloned()
            .ok_or_else(|| ParseError::MissingTags {
                path: path.to_string(),
            })?;

        if exclusion.is_excluded(path) {
            debug!("Excluding path {}", path);
            return Ok(None);
        }

        let endpoints = operations
            .iter()
            .map(|(method, details)| {
                formatter.format_endpoint_detail(
                    method.as_str(),
                    path,
                    Self::description(details),
                    &Self::extract_roles(details),
                )
            })
            .collect();

        Ok(Some(PathEndpoints { group, endpoints }))
    }

    /// Operation objects of a path item in document order
    fn operations(
        path: &str,
        item: &Map<String, Value>,
    ) -> ParseResult<Vec<(HttpMethod, OperationDetails)>> {
        item.iter()
            .filter_map(|(key, value)| HttpMethod::from_key(key).map(|method| (key, method, value)))
            .map(|(key, method, value)| {
                let details = serde_json::from_value(value.clone())
                    .map_err(|e| ParseError::shape(format!("paths.{}.{}", path, key), e))?;
                Ok((method, details))
            })
            .collect()
    }

    /// Summary, else operationId, else a fixed fallback
    fn description(details: &OperationDetails) -> &str {
        details
            .summary
            .as_deref()
            .or(details.operation_id.as_deref())
            .unwrap_or(NO_DESCRIPTION)
    }

    /// Every role of every scheme of every security requirement, in
    /// document order. Duplicates are kept.
    fn extract_roles(details: &OperationDetails) -> Vec<String> {
        details
            .security
            .iter()
            .flatten()
            .flat_map(|requirement| requirement.values())
            .flatten()
            .cloned()
            .collect()
    }
}
