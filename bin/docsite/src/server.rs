//! HTTP endpoints for the derived documents.
//!
//! Every request rebuilds the page index from disk, so edits to the content
//! tree show up without a restart.

use std::{path::Path, sync::Arc};

use axum::{
    Router,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use docsite_core::Config;
use docsite_generator::{
    LLMS_FILE, LLMS_FULL_FILE, LlmsGenerator, PageIndex, SITEMAP_FILE, ScanError,
    SitemapGenerator,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Every derived document is served as plain text, the sitemap included.
const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// A document served by the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Document {
    /// `llms.txt`
    Llms,
    /// `llms-full.txt`
    LlmsFull,
    /// `sitemap.xml`
    Sitemap,
}

impl Document {
    /// Request path of the document.
    pub fn path(self) -> String {
        let file = match self {
            Self::Llms => LLMS_FILE,
            Self::LlmsFull => LLMS_FULL_FILE,
            Self::Sitemap => SITEMAP_FILE,
        };
        format!("/{file}")
    }
}

/// Shared server state.
#[derive(Debug, Clone)]
pub struct ServerState {
    index: PageIndex,
    llms: LlmsGenerator,
    sitemap: SitemapGenerator,
}

impl ServerState {
    /// Create server state from the site configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            index: PageIndex::from_config(config),
            llms: LlmsGenerator::new(config.site.clone()),
            sitemap: SitemapGenerator::new(&config.sitemap),
        }
    }

    /// Render a document from the current content tree.
    pub fn render(&self, document: Document) -> Result<String, ScanError> {
        let pages = self.index.pages()?;
        Ok(match document {
            Document::Llms => self.llms.digest(&pages),
            Document::LlmsFull => self.llms.full_text(&pages),
            Document::Sitemap => self.sitemap.generate(&pages),
        })
    }
}

/// Create the router serving the derived documents.
///
/// Paths that are not derived documents fall back to `static_dir`, if any.
pub fn create_router(config: &Config, static_dir: Option<&Path>) -> Router {
    let state = Arc::new(ServerState::new(config));

    let mut router = Router::new()
        .route(&Document::Llms.path(), get(llms_handler))
        .route(&Document::LlmsFull.path(), get(llms_full_handler))
        .route(&Document::Sitemap.path(), get(sitemap_handler));

    if let Some(dir) = static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router.with_state(state).layer(TraceLayer::new_for_http())
}

async fn llms_handler(State(state): State<Arc<ServerState>>) -> Response {
    serve_document(state, Document::Llms).await
}

async fn llms_full_handler(State(state): State<Arc<ServerState>>) -> Response {
    serve_document(state, Document::LlmsFull).await
}

async fn sitemap_handler(State(state): State<Arc<ServerState>>) -> Response {
    serve_document(state, Document::Sitemap).await
}

/// Render `document` off the async runtime; failures become a bare 500.
async fn serve_document(state: Arc<ServerState>, document: Document) -> Response {
    let rendered = tokio::task::spawn_blocking(move || state.render(document)).await;

    match rendered {
        Ok(Ok(body)) => ([(header::CONTENT_TYPE, TEXT_PLAIN)], body).into_response(),
        Ok(Err(e)) => {
            tracing::error!(?document, error = %e, "failed to render document");
            internal_error()
        }
        Err(e) => {
            tracing::error!(?document, error = %e, "render task failed");
            internal_error()
        }
    }
}

fn internal_error() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
}
