use super::{roles_text, ReportFormatter};

/// MediaWiki-style markup: `==` headings and `'''bold'''` methods
#[derive(Debug, Clone, Copy, Default)]
pub struct WikiFormatter;

impl ReportFormatter for WikiFormatter {
    fn name(&self) -> &'static str {
        "wiki"
    }

    fn format_title(&self, title: &str) -> String {
        format!("== Authorization matrix {} ==", title)
    }

    fn format_header(&self, header: &str) -> String {
        format!("=== {} ===", header)
    }

    fn format_endpoint_detail(
        &self,
        method: &str,
        path: &str,
        description: &str,
        roles: &[String],
    ) -> String {
        format!(
            "  - '''{}''' {} : {} (Roles: {})",
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

    #[test]
    fn test_wiki_headings() {
        assert_eq!(
            WikiFormatter.format_title("Petstore"),
            "== Authorization matrix Petstore =="
        );
        assert_eq!(WikiFormatter.format_header("pet"), "=== pet ===");
    }

    #[test]
    fn test_wiki_endpoint_detail() {
        let line = WikiFormatter.format_endpoint_detail(
            "GET",
            "/pet/findByStatus",
            "Find pets by status",
            &["user".to_string()],
        );
        assert_eq!(
            line,
            "  - '''GET''' /pet/findByStatus : Find pets by status (Roles: user)"
        );
        assert_eq!(WikiFormatter.format_endpoint(&line), line);
    }
}
