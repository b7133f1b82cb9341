use super::{roles_text, ReportFormatter};

/// Markdown: `#` headings and `**bold**` methods
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownFormatter;

impl ReportFormatter for MarkdownFormatter {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn format_title(&self, title: &str) -> String {
        format!("# Authorization matrix {}", title)
    }

    fn format_header(&self, header: &str) -> String {
        format!("## {}", header)
    }

    fn format_endpoint_detail(
        &self,
        method: &str,
        path: &str,
        description: &str,
        roles: &[String],
    ) -> String {
        format!(
            "- **{}** {} : {} (Roles: {})",
            method,
            path,
            description,
            roles_text(roles)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::ALL_ROLES;

    #[test]
    fn test_markdown_headings() {
        assert_eq!(
            MarkdownFormatter.format_title("Petstore"),
            "# Authorization matrix Petstore"
        );
        assert_eq!(MarkdownFormatter.format_header("store"), "## store");
    }

    #[test]
    fn test_markdown_endpoint_detail_without_roles() {
        let line = MarkdownFormatter.format_endpoint_detail("DELETE", "/pet/{id}", "Deletes a pet", &[]);
        assert_eq!(
            line,
            format!("- **DELETE** /pet/{{id}} : Deletes a pet (Roles: {})", ALL_ROLES)
        );
    }
}
