//! Static file handler.

use std::path::Path;

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use tracing::debug;

use super::content_type::content_type_for;
use super::ServerState;

/// Served for `/`.
pub const INDEX_FILE: &str = "index.html";

const NOT_FOUND: &str = "File not found";

/// Serve the file under the site root named by the request path. Anything
/// that cannot be read, or that resolves outside the root, is a 404.
pub async fn serve_path(State(state): State<ServerState>, uri: Uri) -> Response {
    let path = uri.path();
    let relative = if path == "/" {
        INDEX_FILE
    } else {
        path.trim_start_matches('/')
    };

    if relative.is_empty() || relative.split('/').any(|segment| segment == "..") {
        debug!(path, "rejected path");
        return not_found();
    }

    let candidate = state.root.join(relative);
    let resolved = match tokio::fs::canonicalize(&candidate).await {
        Ok(p) => p,
        Err(_) => return not_found(),
    };
    if !resolved.starts_with(state.root.as_path()) {
        debug!(path, "path escapes site root");
        return not_found();
    }

    match tokio::fs::read(&resolved).await {
        Ok(body) => {
            let body = match state.prerender() {
                Some(prerender) if relative.ends_with(".html") => match String::from_utf8(body) {
                    Ok(html) => prerender.apply(&html).into_bytes(),
                    Err(err) => err.into_bytes(),
                },
                _ => body,
            };
            let content_type = content_type_for(Path::new(relative));
            debug!(path, content_type, bytes = body.len(), "served");
            ([(header::CONTENT_TYPE, content_type)], body).into_response()
        }
        Err(_) => not_found(),
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, NOT_FOUND).into_response()
}
