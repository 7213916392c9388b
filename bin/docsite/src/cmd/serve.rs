//! Serve command - HTTP server for the derived documents

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use docsite_core::Config;
use tokio::net::TcpListener;

use crate::server::{Document, create_router};

/// Run the serve command.
///
/// Documents are rebuilt from the content tree on every request.
pub async fn run(config_path: &Path, host: Option<&str>, port: Option<u16>) -> Result<()> {
    let mut config =
        Config::load_with_env(config_path).wrap_err("Failed to load configuration")?;

    if let Some(host) = host {
        config.server.host = host.to_string();
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let static_dir = config.server.static_dir.clone();
    if let Some(dir) = &static_dir
        && !dir.is_dir()
    {
        tracing::warn!(dir = %dir.display(), "static directory does not exist");
    }

    let app = create_router(&config, static_dir.as_deref());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("Failed to bind to {addr}"))?;

    tracing::info!(%addr, root = %config.content.root.display(), "Server listening");

    println!();
    println!("  Serving {} on http://{addr}", config.site.title);
    for document in [Document::Llms, Document::LlmsFull, Document::Sitemap] {
        println!("    http://{addr}{}", document.path());
    }
    println!();
    println!("  Press Ctrl+C to stop");
    println!();

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down");
}
