use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use std::path::Path as FsPath;
use tokio::fs;
use tracing::warn;

/// Serves a file from the static root, e.g. `/static/qrcodes/aB3xY.png`.
pub async fn serve(State(state): State<AppState>, Path(path): Path<String>) -> Response {
    let Some(relative) = sanitize(&path) else {
        warn!("rejected static path: {path}");
        return (StatusCode::NOT_FOUND, "file not found").into_response();
    };

    match load(&state.static_dir, relative).await {
        Some((bytes, content_type)) => {
            ([(header::CONTENT_TYPE, content_type)], bytes).into_response()
        }
        None => (StatusCode::NOT_FOUND, "file not found").into_response(),
    }
}

/// Strips the leading slash and refuses empty paths and any `..` segment.
fn sanitize(path: &str) -> Option<&str> {
    let clean = path.trim_start_matches('/');
    if clean.is_empty() || clean.split('/').any(|segment| segment == "..") {
        return None;
    }
    Some(clean)
}

async fn load(root: &FsPath, relative: &str) -> Option<(Vec<u8>, &'static str)> {
    let file_path = root.join(relative);
    let bytes = fs::read(&file_path).await.ok()?;
    let content_type = content_type_for(file_path.extension().and_then(|ext| ext.to_str()));
    Some((bytes, content_type))
}

fn content_type_for(extension: Option<&str>) -> &'static str {
    match extension {
        Some("png") => "image/png",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("css") => "text/css",
        Some("js") => "text/javascript",
        Some("html") => "text/html; charset=utf-8",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_allows_nested_paths() {
        assert_eq!(sanitize("qrcodes/aB3.png"), Some("qrcodes/aB3.png"));
        assert_eq!(sanitize("/qrcodes/aB3.png"), Some("qrcodes/aB3.png"));
    }

    #[test]
    fn sanitize_blocks_traversal_and_empty() {
        assert_eq!(sanitize(""), None);
        assert_eq!(sanitize("/"), None);
        assert_eq!(sanitize("../data/links.json"), None);
        assert_eq!(sanitize("qrcodes/../../links.json"), None);
    }

    #[test]
    fn content_types_by_extension() {
        assert_eq!(content_type_for(Some("png")), "image/png");
        assert_eq!(content_type_for(Some("svg")), "image/svg+xml");
        assert_eq!(content_type_for(None), "application/octet-stream");
        assert_eq!(content_type_for(Some("bin")), "application/octet-stream");
    }
}
