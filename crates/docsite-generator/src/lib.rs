//! docsite generator library
//!
//! Turns the documentation content tree into its derived documents.
//!
//! # Modules
//!
//! - [`scanner`] - Content tree walking and page source reading
//! - [`index`] - Navigation-ordered page index
//! - [`markdoc`] - Markdoc tag stripping for plain-text output
//! - [`sitemap`] - XML sitemap generation
//! - [`llms`] - `llms.txt` and `llms-full.txt` generation
//! - [`links`] - Internal link checking
//! - [`build`] - Static export of the derived documents

pub mod build;
pub mod index;
pub mod links;
pub mod llms;
pub mod markdoc;
pub mod scanner;
pub mod sitemap;

pub use build::{BuildError, BuildStats, Builder};
pub use index::{PageIndex, order_pages};
pub use links::{BrokenLink, LinkChecker, LinkReport};
pub use llms::LlmsGenerator;
pub use markdoc::strip_tags;
pub use scanner::{ScanError, Scanner};
pub use sitemap::SitemapGenerator;

/// File name of the XML sitemap, served at `/sitemap.xml`.
pub const SITEMAP_FILE: &str = "sitemap.xml";

/// File name of the link digest, served at `/llms.txt`.
pub const LLMS_FILE: &str = "llms.txt";

/// File name of the full-text document, served at `/llms-full.txt`.
pub const LLMS_FULL_FILE: &str = "llms-full.txt";
