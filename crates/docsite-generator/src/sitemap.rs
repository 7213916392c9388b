//! Sitemap generation.
//!
//! Generates the XML sitemap for search engines from the page index.

use chrono::{DateTime, SecondsFormat, Utc};
use docsite_core::{PageRecord, config::SitemapConfig};
use tracing::debug;

/// Priority of the root page.
pub const ROOT_PRIORITY: f32 = 1.0;

/// Priority of pages no deeper than the shallow threshold.
pub const SHALLOW_PRIORITY: f32 = 0.8;

/// Priority of every other page.
pub const DEEP_PRIORITY: f32 = 0.6;

/// A sitemap URL entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapUrl {
    /// URL location.
    pub loc: String,

    /// Last modification date.
    pub lastmod: DateTime<Utc>,

    /// Priority (0.0 to 1.0).
    pub priority: f32,
}

/// Sitemap generator.
#[derive(Debug, Clone)]
pub struct SitemapGenerator {
    shallow_depth: usize,
}

impl SitemapGenerator {
    /// Create a new sitemap generator.
    #[must_use]
    pub fn new(config: &SitemapConfig) -> Self {
        Self {
            shallow_depth: config.shallow_depth,
        }
    }

    /// Priority tier for a page.
    pub fn priority(&self, page: &PageRecord) -> f32 {
        if page.is_root() {
            ROOT_PRIORITY
        } else if page.depth() <= self.shallow_depth {
            SHALLOW_PRIORITY
        } else {
            DEEP_PRIORITY
        }
    }

    /// Sitemap entries, highest priority first; ties keep index order.
    pub fn entries(&self, pages: &[PageRecord]) -> Vec<SitemapUrl> {
        let now = Utc::now();
        let mut urls: Vec<_> = pages
            .iter()
            .map(|page| SitemapUrl {
                loc: page.url.clone(),
                lastmod: page.modified.unwrap_or(now),
                priority: self.priority(page),
            })
            .collect();

        urls.sort_by(|a, b| b.priority.total_cmp(&a.priority));
        urls
    }

    /// Generate sitemap XML from pages.
    pub fn generate(&self, pages: &[PageRecord]) -> String {
        debug!(count = pages.len(), "generating sitemap");

        let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
        xml.push('\n');

        for url in self.entries(pages) {
            xml.push_str(&url_to_xml(&url));
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

/// Convert a URL entry to XML.
fn url_to_xml(url: &SitemapUrl) -> String {
    let mut xml = String::from("  <url>\n");
    xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&url.loc)));
    xml.push_str(&format!(
        "    <lastmod>{}</lastmod>\n",
        url.lastmod.to_rfc3339_opts(SecondsFormat::Secs, true)
    ));
    xml.push_str(&format!("    <priority>{:.1}</priority>\n", url.priority));
    xml.push_str("  </url>\n");
    xml
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
