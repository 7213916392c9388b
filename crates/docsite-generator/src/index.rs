//! Navigation-ordered page index.
//!
//! The single source of truth for every derived document. Pages listed in the
//! navigation manifest come first, in manifest order; the rest follow sorted
//! by href.

use docsite_core::{Config, NavigationManifest, PageRecord, SiteConfig, config::ContentConfig};
use tracing::info;

use crate::scanner::{Result, Scanner};

/// Builds the ordered list of page records from the content tree.
#[derive(Debug, Clone)]
pub struct PageIndex {
    site: SiteConfig,
    scanner: Scanner,
    page_file: String,
    navigation: NavigationManifest,
}

impl PageIndex {
    /// Create a page index with an explicit navigation manifest.
    #[must_use]
    pub fn new(site: SiteConfig, content: &ContentConfig, navigation: NavigationManifest) -> Self {
        Self {
            site,
            scanner: Scanner::new(&content.root),
            page_file: content.page_file.clone(),
            navigation,
        }
    }

    /// Create a page index from the site configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.site.clone(),
            &config.content,
            config.navigation.clone(),
        )
    }

    /// Scan the content tree and return every page in navigation order.
    ///
    /// Nothing is cached: each call reflects the tree as it is on disk.
    pub fn pages(&self) -> Result<Vec<PageRecord>> {
        let sources = self.scanner.scan_pages(&self.page_file)?;
        let records = sources
            .iter()
            .map(|source| source.to_record(&self.site))
            .collect();

        let pages = order_pages(records, &self.navigation);
        info!(count = pages.len(), "page index built");
        Ok(pages)
    }
}

/// Sort records by manifest position, then unlisted records by href.
pub fn order_pages(mut pages: Vec<PageRecord>, navigation: &NavigationManifest) -> Vec<PageRecord> {
    let positions = navigation.positions();
    let key = |page: &PageRecord| {
        positions
            .get(page.href.as_str())
            .copied()
            .unwrap_or(usize::MAX)
    };

    pages.sort_by(|a, b| key(a).cmp(&key(b)).then_with(|| a.href.cmp(&b.href)));
    pages
}
