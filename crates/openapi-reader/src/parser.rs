//! Spec document parser

use crate::error::{ParseError, ParseResult};
use crate::types::*;
use serde_json::Value;
use tracing::debug;

/// OpenAPI/Swagger document parser
pub struct OpenApiParser;

impl OpenApiParser {
    /// Parse a spec document from a string (auto-detects JSON/YAML)
    pub fn parse(content: &str) -> ParseResult<SpecDocument> {
        if content.trim_start().starts_with('{') {
            Self::parse_json(content)
        } else {
            Self::parse_yaml(content)
        }
    }

    /// Parse a spec document from JSON
    pub fn parse_json(content: &str) -> ParseResult<SpecDocument> {
        let raw: RawSpecDocument = serde_json::from_str(content)?;
        Self::convert(raw)
    }

    /// Parse a spec document from YAML
    pub fn parse_yaml(content: &str) -> ParseResult<SpecDocument> {
        // Blank or comment-only YAML is a null document, not an empty spec
        let value: serde_yaml::Value = serde_yaml::from_str(content)?;
        if value.is_null() {
            return Err(ParseError::EmptyDocument);
        }
        let raw: RawSpecDocument = serde_yaml::from_str(content)?;
        Self::convert(raw)
    }

    fn convert(raw: RawSpecDocument) -> ParseResult<SpecDocument> {
        let title = raw.info.and_then(|info| info.title);

        let paths = match raw.paths {
            None => None,
            Some(Value::Object(paths)) => Some(paths),
            Some(other) => {
                return Err(ParseError::shape(
                    "paths",
                    format!("expected an object, found {}", kind_of(&other)),
                ))
            }
        };

        debug!(
            "Parsed spec document {:?} with {} paths",
            title,
            paths.as_ref().map_or(0, |p| p.len())
        );

        Ok(SpecDocument { title, paths })
    }
}

/// Short name of a JSON value's kind, for shape errors
pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
