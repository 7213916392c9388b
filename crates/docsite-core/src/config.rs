//! Site configuration management.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    navigation::NavigationManifest,
    route,
};

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "DOCSITE";

/// Main configuration structure for docsite.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    #[serde(default)]
    pub site: SiteConfig,

    /// Content tree layout.
    #[serde(default)]
    pub content: ContentConfig,

    /// Sitemap settings.
    #[serde(default)]
    pub sitemap: SitemapConfig,

    /// Static export settings.
    #[serde(default)]
    pub build: BuildConfig,

    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Navigation manifest used to order pages.
    #[serde(default)]
    pub navigation: NavigationManifest,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,

    /// Site origin (e.g., "https://example.com").
    pub base_url: String,

    /// One-paragraph summary used by the LLM digests.
    #[serde(default)]
    pub description: Option<String>,
}

/// Content tree layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Content root directory.
    #[serde(default = "default_content_root")]
    pub root: PathBuf,

    /// File name of a page source; one per route directory.
    #[serde(default = "default_page_file")]
    pub page_file: String,

    /// File names that define a route for link checking.
    #[serde(default = "default_route_files")]
    pub route_files: Vec<String>,

    /// Extensions of files scanned for internal links.
    #[serde(default = "default_link_extensions")]
    pub link_extensions: Vec<String>,
}

/// Sitemap configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SitemapConfig {
    /// Deepest href that still gets the shallow-page priority.
    #[serde(default = "default_shallow_depth")]
    pub shallow_depth: usize,
}

/// Static export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Output directory for exported documents.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory served for paths that are not derived documents.
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
}

// Default value functions
fn default_title() -> String {
    "Documentation".to_string()
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_content_root() -> PathBuf {
    PathBuf::from("content")
}

fn default_page_file() -> String {
    "page.md".to_string()
}

fn default_route_files() -> Vec<String> {
    vec!["page.md".to_string(), "page.tsx".to_string()]
}

fn default_link_extensions() -> Vec<String> {
    vec!["md".to_string()]
}

fn default_shallow_depth() -> usize {
    2
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            base_url: default_base_url(),
            description: None,
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            root: default_content_root(),
            page_file: default_page_file(),
            route_files: default_route_files(),
            link_extensions: default_link_extensions(),
        }
    }
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            shallow_depth: default_shallow_depth(),
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: None,
        }
    }
}

/// Environment source for `DOCSITE__SECTION__KEY` overrides.
fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX).separator("__")
}

impl SiteConfig {
    /// Site origin without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Get the absolute URL for an href.
    pub fn url_for(&self, href: &str) -> String {
        route::absolute_url(&self.base_url, href)
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| CoreError::filesystem(path, e))?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration, letting `DOCSITE__*` environment variables override file values.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        Self::load_layered(path, environment())
    }

    fn load_layered(path: &Path, environment: config::Environment) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(environment)
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration if the file exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_with_env(path)
        } else {
            tracing::warn!(path = %path.display(), "configuration file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.site.title.is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        if self.site.base_url.is_empty() {
            return Err(CoreError::config("site.base_url cannot be empty"));
        }

        if !self.site.base_url.starts_with("http") {
            return Err(CoreError::config(
                "site.base_url should start with http:// or https://",
            ));
        }

        if self.site.base_url.ends_with('/') {
            tracing::warn!("site.base_url should not have a trailing slash");
        }

        if self.content.page_file.is_empty() {
            return Err(CoreError::config("content.page_file cannot be empty"));
        }

        Ok(())
    }
}
