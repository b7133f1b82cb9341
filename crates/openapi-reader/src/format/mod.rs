//! Output dialects for the authorization matrix
//!
//! A dialect is a [`ReportFormatter`]. Dialects are looked up by name with
//! [`formatter_for`]; adding one means adding an implementation and a row in
//! the lookup table, nothing else.

mod markdown;
mod wiki;

pub use markdown::MarkdownFormatter;
pub use wiki::WikiFormatter;

use crate::error::FormatError;

/// Marker rendered in place of an empty role list
pub const ALL_ROLES: &str = "All roles";

/// Name of the dialect used when none is requested
pub const DEFAULT_FORMAT: &str = "wiki";

/// Shapes the lines of a report in one output dialect.
pub trait ReportFormatter: Send + Sync {
    /// Name the dialect is selected by
    fn name(&self) -> &'static str;

    /// Report heading built from the document title
    fn format_title(&self, title: &str) -> String;

    /// Heading of one group of endpoints
    fn format_header(&self, header: &str) -> String;

    /// Final shaping of an already formatted endpoint line
    fn format_endpoint(&self, endpoint: &str) -> String {
        endpoint.to_string()
    }

    /// One endpoint: method, path, description and the roles allowed to call it
    fn format_endpoint_detail(
        &self,
        method: &str,
        path: &str,
        description: &str,
        roles: &[String],
    ) -> String;
}

type FormatterConstructor = fn() -> Box<dyn ReportFormatter>;

const FORMATTERS: &[(&str, FormatterConstructor)] = &[("wiki", wiki), ("markdown", markdown)];

fn wiki() -> Box<dyn ReportFormatter> {
    Box::new(WikiFormatter)
}

fn markdown() -> Box<dyn ReportFormatter> {
    Box::new(MarkdownFormatter)
}

/// Select a dialect by name, ignoring case
pub fn formatter_for(name: &str) -> Result<Box<dyn ReportFormatter>, FormatError> {
    let wanted = name.to_lowercase();
    FORMATTERS
        .iter()
        .find(|(key, _)| *key == wanted)
        .map(|(_, build)| build())
        .ok_or_else(|| FormatError::UnsupportedFormat(name.to_string()))
}

/// Names of every known dialect
pub fn supported_formats() -> Vec<&'static str> {
    FORMATTERS.iter().map(|(key, _)| *key).collect()
}

/// Join roles for display, or the all-roles marker when there are none
pub(crate) fn roles_text(roles: &[String]) -> String {
    if roles.is_empty() {
        ALL_ROLES.to_string()
    } else {
        roles.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatter_lookup_ignores_case() {
        assert_eq!(formatter_for("wiki").unwrap().name(), "wiki");
        assert_eq!(formatter_for("MarkDown").unwrap().name(), "markdown");
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        match formatter_for("xml") {
            Err(FormatError::UnsupportedFormat(name)) => assert_eq!(name, "xml"),
            Ok(f) => panic!("xml resolved to {}", f.name()),
        }
    }

    #[test]
    fn test_supported_formats() {
        assert_eq!(supported_formats(), ["wiki", "markdown"]);
        assert!(supported_formats().contains(&DEFAULT_FORMAT));
    }

    #[test]
    fn test_roles_text() {
        assert_eq!(roles_text(&[]), ALL_ROLES);
        assert_eq!(
            roles_text(&["admin".to_string(), "user".to_string()]),
            "admin, user"
        );
    }
}
