//! Internal link checking.
//!
//! Every internal link found in the content tree must resolve to a route.
//! Two link forms are recognized:
//!
//! - `href="/some/path"` (Markdoc tag attributes)
//! - `[text](/some/path)` (Markdown inline links)
//!
//! External URLs and anchor-only links are ignored, and fragments are dropped
//! before comparison.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use docsite_core::{config::ContentConfig, route};
use regex::Regex;
use tracing::{debug, info};

use crate::scanner::{Result, Scanner};

static ATTRIBUTE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r##"href="(/[^"#]*)(?:#[^"]*)?""##).unwrap());

static MARKDOWN_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\]\((/[^)#\s]*)(?:#[^)]*)?\)").unwrap());

/// An internal link found in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkReference {
    /// File the link was found in.
    pub source: PathBuf,

    /// Link target as written, without fragment.
    pub target: String,
}

/// An internal link that does not resolve to any route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokenLink {
    /// File containing the link.
    pub file: PathBuf,

    /// Link target as written.
    pub link: String,
}

/// Outcome of a link check run.
#[derive(Debug, Clone, Default)]
pub struct LinkReport {
    /// Number of routes discovered.
    pub routes: usize,

    /// Number of files scanned for links.
    pub files: usize,

    /// Number of internal links checked.
    pub links: usize,

    /// Links that did not resolve.
    pub broken: Vec<BrokenLink>,
}

impl LinkReport {
    /// Whether every link resolved.
    pub fn is_ok(&self) -> bool {
        self.broken.is_empty()
    }
}

/// Extract internal link targets from `content`, attribute links first.
pub fn extract_links(content: &str) -> Vec<String> {
    ATTRIBUTE_LINK
        .captures_iter(content)
        .chain(MARKDOWN_LINK.captures_iter(content))
        .filter_map(|captures| captures.get(1))
        .map(|target| target.as_str().to_string())
        .collect()
}

/// Validates internal links against the routes defined in the content tree.
#[derive(Debug, Clone)]
pub struct LinkChecker {
    scanner: Scanner,
    route_files: Vec<String>,
    link_extensions: Vec<String>,
}

impl LinkChecker {
    /// Create a link checker for the configured content tree.
    #[must_use]
    pub fn new(content: &ContentConfig) -> Self {
        Self {
            scanner: Scanner::new(&content.root).with_hidden(true),
            route_files: content.route_files.clone(),
            link_extensions: content.link_extensions.clone(),
        }
    }

    /// Content root being checked.
    pub fn root(&self) -> &Path {
        self.scanner.root()
    }

    /// Every route defined by a page file.
    pub fn discover_routes(&self) -> Result<BTreeSet<String>> {
        let routes: BTreeSet<_> = self
            .scanner
            .find_named(&self.route_files)?
            .iter()
            .map(|path| route::href_for(path))
            .collect();

        debug!(count = routes.len(), "discovered routes");
        Ok(routes)
    }

    /// Every internal link in the scanned source files.
    pub fn collect_references(&self) -> Result<(usize, Vec<LinkReference>)> {
        let files = self.scanner.find_with_extensions(&self.link_extensions)?;
        let mut references = Vec::new();

        for file in &files {
            let content = self.scanner.read_to_string(file)?;
            references.extend(extract_links(&content).into_iter().map(|target| LinkReference {
                source: self.scanner.root().join(file),
                target,
            }));
        }

        Ok((files.len(), references))
    }

    /// Check every internal link against the discovered routes.
    pub fn check(&self) -> Result<LinkReport> {
        info!(root = %self.root().display(), "checking internal links");

        let routes = self.discover_routes()?;
        let (files, references) = self.collect_references()?;

        let broken = references
            .iter()
            .filter(|reference| !routes.contains(route::normalize_route(&reference.target)))
            .map(|reference| BrokenLink {
                file: reference.source.clone(),
                link: reference.target.clone(),
            })
            .collect::<Vec<_>>();

        let report = LinkReport {
            routes: routes.len(),
            files,
            links: references.len(),
            broken,
        };

        info!(
            routes = report.routes,
            files = report.files,
            links = report.links,
            broken = report.broken.len(),
            "link check complete"
        );
        Ok(report)
    }
}
