//! docsite CLI library
//!
//! Command implementations and the HTTP server for the documentation site's
//! derived documents.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (serve, build, check-links)
//! - [`server`] - HTTP endpoints for `llms.txt`, `llms-full.txt` and `sitemap.xml`
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use docsite::cmd;
//!
//! // Export the derived documents
//! cmd::build::run(Path::new("docsite.toml"), Some(Path::new("public")), None).unwrap();
//! ```

pub mod cmd;
pub mod server;

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
