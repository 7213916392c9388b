//! docsite core library
//!
//! Configuration, error handling, frontmatter extraction, route derivation and
//! the page record type shared by every derived document of the documentation site.

pub mod config;
pub mod content;
pub mod error;
pub mod frontmatter;
pub mod navigation;
pub mod route;

pub use config::{Config, SiteConfig};
pub use content::{PageRecord, PageSource};
pub use error::{CoreError, Result};
pub use frontmatter::Frontmatter;
pub use navigation::{NavigationGroup, NavigationLink, NavigationManifest};
