//! `llms.txt` and `llms-full.txt` generation.
//!
//! Both documents are built from the same page index. `llms.txt` is a short
//! link digest; `llms-full.txt` concatenates every page body with Markdoc tags
//! stripped, one section per page:
//!
//! ```text
//! ---
//!
//! ## Page Title
//!
//! Source: https://example.com/page
//!
//! Page content...
//! ```

use docsite_core::{PageRecord, SiteConfig};
use tracing::debug;

use crate::{LLMS_FULL_FILE, markdoc::strip_tags};

/// Generator for the LLM-oriented text documents.
#[derive(Debug, Clone)]
pub struct LlmsGenerator {
    site: SiteConfig,
}

impl LlmsGenerator {
    /// Create a new generator.
    #[must_use]
    pub fn new(site: SiteConfig) -> Self {
        Self { site }
    }

    /// Generate the `llms.txt` link digest.
    pub fn digest(&self, pages: &[PageRecord]) -> String {
        debug!(count = pages.len(), "generating llms.txt");

        let mut out = format!("# {}\n\n", self.site.title);
        if let Some(description) = &self.site.description {
            out.push_str(&format!("> {description}\n\n"));
        }

        out.push_str("## Docs\n\n");
        for page in pages {
            out.push_str(&format!("- [{}]({})\n", page.display_title(), page.url));
        }
        if !pages.is_empty() {
            out.push('\n');
        }

        out.push_str("## Optional\n\n");
        out.push_str(&format!(
            "- [{LLMS_FULL_FILE}]({}/{LLMS_FULL_FILE}): Full documentation in a single file\n",
            self.site.base_url()
        ));
        out
    }

    /// Generate `llms-full.txt`, every page body in index order.
    pub fn full_text(&self, pages: &[PageRecord]) -> String {
        debug!(count = pages.len(), "generating llms-full.txt");

        let mut sections = vec![format!("# {} - Full Documentation\n", self.site.title)];
        if let Some(description) = &self.site.description {
            sections.push(format!("> {description}\n"));
        }

        sections.extend(pages.iter().map(|page| {
            format!(
                "---\n\n## {}\n\nSource: {}\n\n{}",
                page.display_title(),
                page.url,
                strip_tags(&page.content)
            )
        }));

        sections.join("\n\n")
    }
}
