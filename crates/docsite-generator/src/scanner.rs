//! Content tree scanning.
//!
//! Walks the content root and reads page sources. The walk is sorted by file
//! name so repeated scans of an unchanged tree produce identical results.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use docsite_core::PageSource;
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

/// Scanning errors.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The content root does not exist or is not a directory.
    #[error("content root not found: {0}")]
    MissingRoot(PathBuf),

    /// A file or directory could not be read.
    #[error("failed to read {path}: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal error.
    #[error("failed to walk content tree: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Result type for scanner operations.
pub type Result<T> = std::result::Result<T, ScanError>;

/// Page repository scanner rooted at a content directory.
///
/// Dot-prefixed entries below the root are skipped unless enabled with
/// [`Scanner::with_hidden`].
#[derive(Debug, Clone)]
pub struct Scanner {
    root: PathBuf,
    include_hidden: bool,
}

impl Scanner {
    /// Create a scanner for `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            include_hidden: false,
        }
    }

    /// Also walk dot-prefixed files and directories.
    #[must_use]
    pub fn with_hidden(mut self, include_hidden: bool) -> Self {
        self.include_hidden = include_hidden;
        self
    }

    /// The content root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Find files whose root-relative path satisfies `filter`, in walk order.
    pub fn find_files(&self, filter: impl Fn(&Path) -> bool) -> Result<Vec<PathBuf>> {
        self.ensure_root()?;

        let include_hidden = self.include_hidden;
        let mut files = Vec::new();
        let walker = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| include_hidden || entry.depth() == 0 || !is_hidden(entry));

        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry.path().strip_prefix(&self.root).unwrap_or(entry.path());
            if filter(relative) {
                files.push(relative.to_path_buf());
            }
        }

        debug!(root = %self.root.display(), count = files.len(), "scanned content tree");
        Ok(files)
    }

    /// Find files whose name is one of `names`.
    pub fn find_named(&self, names: &[String]) -> Result<Vec<PathBuf>> {
        self.find_files(|path| {
            path.file_name()
                .is_some_and(|name| names.iter().any(|wanted| name == wanted.as_str()))
        })
    }

    /// Find files whose extension is one of `extensions`.
    pub fn find_with_extensions(&self, extensions: &[String]) -> Result<Vec<PathBuf>> {
        self.find_files(|path| {
            path.extension()
                .is_some_and(|ext| extensions.iter().any(|wanted| ext == wanted.as_str()))
        })
    }

    /// Read the raw text of a file relative to the root.
    pub fn read_to_string(&self, relative: &Path) -> Result<String> {
        let path = self.root.join(relative);
        fs::read_to_string(&path).map_err(|source| ScanError::Filesystem { path, source })
    }

    /// Read a page source relative to the root, with its modification time.
    pub fn read_source(&self, relative: &Path) -> Result<PageSource> {
        let path = self.root.join(relative);
        let raw = self.read_to_string(relative)?;
        let modified = fs::metadata(&path)
            .and_then(|meta| meta.modified())
            .ok()
            .map(DateTime::<Utc>::from);

        Ok(PageSource::new(relative, raw).with_modified(modified))
    }

    /// Discover and read every page source named `page_file`.
    pub fn scan_pages(&self, page_file: &str) -> Result<Vec<PageSource>> {
        info!(dir = %self.root.display(), page_file, "scanning pages");

        let files =
            self.find_files(|path| path.file_name().is_some_and(|name| name == page_file))?;
        files.par_iter().map(|path| self.read_source(path)).collect()
    }

    fn ensure_root(&self) -> Result<()> {
        match fs::metadata(&self.root) {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(ScanError::MissingRoot(self.root.clone())),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(ScanError::MissingRoot(self.root.clone()))
            }
            Err(source) => Err(ScanError::Filesystem {
                path: self.root.clone(),
                source,
            }),
        }
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}
