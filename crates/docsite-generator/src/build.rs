//! Static export.
//!
//! Writes the derived documents into an output directory so they can be
//! served by any static host.

use std::{fs, path::PathBuf, time::Instant};

use docsite_core::Config;
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    LLMS_FILE, LLMS_FULL_FILE, SITEMAP_FILE,
    index::PageIndex,
    llms::LlmsGenerator,
    scanner::ScanError,
    sitemap::SitemapGenerator,
};

/// Build errors.
#[derive(Debug, Error)]
pub enum BuildError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Content scanning error.
    #[error("scan error: {0}")]
    Scan(#[from] ScanError),
}

/// Result type for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Build statistics.
#[derive(Debug, Clone, Default)]
pub struct BuildStats {
    /// Number of pages in the index.
    pub pages: usize,

    /// Files written to the output directory.
    pub documents: Vec<PathBuf>,

    /// Build duration in milliseconds.
    pub duration_ms: u64,
}

/// Exports the derived documents.
#[derive(Debug)]
pub struct Builder {
    config: Config,
    output_dir: PathBuf,
}

impl Builder {
    /// Create a new builder.
    #[must_use]
    pub fn new(config: Config, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            output_dir: output_dir.into(),
        }
    }

    /// Execute the export.
    ///
    /// The page index is built before anything is written, so a scan failure
    /// leaves the output directory untouched.
    pub fn build(&self) -> Result<BuildStats> {
        let start = Instant::now();

        info!(
            content = %self.config.content.root.display(),
            output = %self.output_dir.display(),
            "starting build"
        );

        let pages = PageIndex::from_config(&self.config).pages()?;

        let llms = LlmsGenerator::new(self.config.site.clone());
        let sitemap = SitemapGenerator::new(&self.config.sitemap);
        let documents = [
            (SITEMAP_FILE, sitemap.generate(&pages)),
            (LLMS_FILE, llms.digest(&pages)),
            (LLMS_FULL_FILE, llms.full_text(&pages)),
        ];

        fs::create_dir_all(&self.output_dir)?;

        let mut stats = BuildStats {
            pages: pages.len(),
            ..BuildStats::default()
        };
        for (name, body) in documents {
            stats.documents.push(self.write_document(name, &body)?);
        }

        stats.duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        info!(pages = stats.pages, duration_ms = stats.duration_ms, "build complete");
        Ok(stats)
    }

    fn write_document(&self, name: &str, body: &str) -> Result<PathBuf> {
        let path = self.output_dir.join(name);
        debug!(path = %path.display(), bytes = body.len(), "writing document");
        fs::write(&path, body)?;
        Ok(path)
    }
}
