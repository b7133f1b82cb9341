//! Type definitions for parsed OpenAPI documents

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{Map, Value};

/// HTTP methods an OpenAPI path item can declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
    Trace,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Trace => "TRACE",
        }
    }

    /// Map a path item key to a method. Keys such as `parameters` or
    /// `x-extension` are not operations and yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "get" => Some(HttpMethod::Get),
            "post" => Some(HttpMethod::Post),
            "put" => Some(HttpMethod::Put),
            "patch" => Some(HttpMethod::Patch),
            "delete" => Some(HttpMethod::Delete),
            "head" => Some(HttpMethod::Head),
            "options" => Some(HttpMethod::Options),
            "trace" => Some(HttpMethod::Trace),
            _ => None,
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A security requirement object: scheme name -> required roles
pub type SecurityRequirement = IndexMap<String, Vec<String>>;

/// Parsed spec document, reduced to the fields the report reads
#[derive(Debug, Clone, Default)]
pub struct SpecDocument {
    /// `info.title`, when declared
    pub title: Option<String>,
    /// The `paths` object in document order. `None` means no API is defined.
    pub paths: Option<Map<String, Value>>,
}

/// The fields of one operation object used for the report
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationDetails {
    #[serde(default)]
    pub tags: Vec<String>,
    pub summary: Option<String>,
    pub operation_id: Option<String>,
    pub security: Option<Vec<SecurityRequirement>>,
}

// --- Raw document structures for parsing ---

/// Raw top-level document. `paths` stays untyped so its shape can be
/// checked with a precise location.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSpecDocument {
    #[serde(default)]
    pub info: Option<RawInfo>,
    #[serde(default)]
    pub paths: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawInfo {
    pub title: Option<String>,
}
