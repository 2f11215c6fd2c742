//! Static file server for the site assets.
//!
//! A single fallback handler maps request paths onto files below the site
//! root. There is no routing table beyond that: `/` is `index.html`, every
//! other path is looked up as-is. HTML files are pre-rendered on the way out
//! unless that is switched off.

pub mod content_type;
pub mod handlers;
pub mod prerender;

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::Router;
use tracing::info;

use crate::config::SiteConfig;

pub use content_type::content_type_for;
pub use prerender::Prerender;

/// Shared state: the canonical site root and how HTML is pre-rendered.
#[derive(Debug, Clone)]
pub struct ServerState {
    root: Arc<PathBuf>,
    prerender: Option<Arc<Prerender>>,
}

impl ServerState {
    /// Resolve `root` once; every request is checked against it. HTML is
    /// pre-rendered with the default settings.
    pub fn new(root: impl AsRef<Path>) -> io::Result<Self> {
        let root = root.as_ref().canonicalize()?;
        Ok(Self {
            root: Arc::new(root),
            prerender: Some(Arc::new(Prerender::default())),
        })
    }

    /// Replace the pre-render settings; `None` serves HTML untouched.
    pub fn with_prerender(mut self, prerender: Option<Prerender>) -> Self {
        self.prerender = prerender.map(Arc::new);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn prerender(&self) -> Option<&Prerender> {
        self.prerender.as_deref()
    }
}

/// Build the router.
pub fn create_router(state: ServerState) -> Router {
    Router::new()
        .fallback(handlers::serve_path)
        .with_state(state)
}

/// Bind and serve until Ctrl-C.
pub async fn serve(config: &SiteConfig) -> io::Result<()> {
    let server = &config.server;
    let state = ServerState::new(&server.root)?.with_prerender(Prerender::from_config(config));
    let app = create_router(state.clone());

    let listener = tokio::net::TcpListener::bind((server.host.as_str(), server.port)).await?;
    let addr = listener.local_addr()?;
    info!(
        root = %state.root().display(),
        prerender = state.prerender().is_some(),
        "Server running at http://{}",
        addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
