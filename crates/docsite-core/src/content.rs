//! Page sources and the records derived from them.

use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::{config::SiteConfig, frontmatter::parse_frontmatter, route};

/// A page source file read from the content tree.
#[derive(Debug, Clone)]
pub struct PageSource {
    /// Path relative to the content root.
    pub relative_path: PathBuf,

    /// Raw file text, frontmatter included.
    pub raw: String,

    /// Last modification time reported by the filesystem.
    pub modified: Option<DateTime<Utc>>,
}

impl PageSource {
    /// Create a page source with no modification time.
    pub fn new(relative_path: impl Into<PathBuf>, raw: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            raw: raw.into(),
            modified: None,
        }
    }

    /// Attach a modification time.
    #[must_use]
    pub fn with_modified(mut self, modified: Option<DateTime<Utc>>) -> Self {
        self.modified = modified;
        self
    }

    /// Derive the page record for this source.
    pub fn to_record(&self, site: &SiteConfig) -> PageRecord {
        let (frontmatter, content) = parse_frontmatter(&self.raw, &self.relative_path);
        let href = route::href_for(&self.relative_path);
        let url = site.url_for(&href);

        PageRecord {
            title: frontmatter.title,
            href,
            url,
            content,
            modified: self.modified,
            source_path: self.relative_path.clone(),
        }
    }
}

/// A documentation page, as consumed by every derived document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    /// Title from frontmatter, possibly empty.
    pub title: String,

    /// Site-relative path, `/` for the root page.
    pub href: String,

    /// Absolute URL.
    pub url: String,

    /// Body text without frontmatter.
    pub content: String,

    /// Source modification time, if known.
    pub modified: Option<DateTime<Utc>>,

    /// Source path relative to the content root.
    pub source_path: PathBuf,
}

impl PageRecord {
    /// Title for listings; untitled pages are shown by their href.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.href
        } else {
            &self.title
        }
    }

    /// Path depth of the href (see [`route::depth`]).
    pub fn depth(&self) -> usize {
        route::depth(&self.href)
    }

    /// Whether this is the site's root page.
    pub fn is_root(&self) -> bool {
        self.href == route::ROOT_HREF
    }
}
