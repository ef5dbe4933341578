use crate::codes::base62;
use crate::errors::AppError;
use crate::models::{LinkRecord, QrResponse, ShortenResponse, StatsResponse, UrlRequest};
use crate::qr;
use crate::state::AppState;
use crate::storage::persist_links;
use crate::ui::render_index;
use axum::{
    Json,
    extract::{Host, Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use chrono::Utc;
use tokio::fs;
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let table = state.links.lock().await;
    let total_clicks: u64 = table.links.values().map(|record| record.clicks).sum();
    Html(render_index(table.links.len(), total_clicks))
}

pub async fn shorten(
    State(state): State<AppState>,
    Host(host): Host,
    Json(payload): Json<UrlRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    let url = normalize_url(payload.url.trim())
        .ok_or_else(|| AppError::bad_request("url must not be empty"))?;

    let id = state
        .ids
        .next()
        .ok_or_else(|| AppError::internal("id sequence exhausted, retry"))?;
    let short_code = base62(id);

    {
        let mut table = state.links.lock().await;
        table.links.insert(
            short_code.clone(),
            LinkRecord {
                long_url: url.clone(),
                clicks: 0,
                created_at: Utc::now().to_rfc3339(),
            },
        );
        persist_links(&state.data_path, &table).await?;
    }

    let base = state
        .base_url
        .clone()
        .unwrap_or_else(|| format!("http://{host}"));
    let short_url = format!("{}/{}", base.trim_end_matches('/'), short_code);

    info!("shortened url as {short_code}");
    Ok(Json(ShortenResponse {
        short_url,
        original_url: url,
        short_code,
    }))
}

pub async fn generate_qr(
    State(state): State<AppState>,
    Json(payload): Json<UrlRequest>,
) -> Result<Json<QrResponse>, AppError> {
    let url = payload.url.trim();
    if url.is_empty() {
        return Err(AppError::bad_request("url must not be empty"));
    }

    let id = state
        .ids
        .next()
        .ok_or_else(|| AppError::internal("id sequence exhausted, retry"))?;
    let png = qr::encode_png(url)?;

    let qr_dir = state.static_dir.join("qrcodes");
    fs::create_dir_all(&qr_dir).await?;
    let file_name = format!("{}.png", base62(id));
    fs::write(qr_dir.join(&file_name), png).await?;

    info!("generated qr image {file_name}");
    Ok(Json(QrResponse {
        original_url: url.to_owned(),
        qr_file: format!("qrcodes/{file_name}"),
    }))
}

pub async fn stats(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let table = state.links.lock().await;
    let record = table
        .links
        .get(&code)
        .ok_or_else(|| AppError::not_found("short url not found"))?;

    Ok(Json(StatsResponse {
        short_code: code,
        original_url: record.long_url.clone(),
        clicks: record.clicks,
    }))
}

pub async fn redirect(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Response, AppError> {
    let mut table = state.links.lock().await;
    let Some(record) = table.links.get_mut(&code) else {
        return Err(AppError::not_found("short url not found"));
    };

    record.clicks = record.clicks.saturating_add(1);
    let target = record.long_url.clone();
    persist_links(&state.data_path, &table).await?;

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, target)]).into_response())
}

/// Empty input is rejected; a missing scheme defaults to https.
fn normalize_url(raw: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }
    if raw.starts_with("http://") || raw.starts_with("https://") {
        Some(raw.to_owned())
    } else {
        Some(format!("https://{raw}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_keeps_explicit_schemes() {
        assert_eq!(
            normalize_url("http://example.com").as_deref(),
            Some("http://example.com")
        );
        assert_eq!(
            normalize_url("https://example.com/a?b=c").as_deref(),
            Some("https://example.com/a?b=c")
        );
    }

    #[test]
    fn normalize_prefixes_https_when_scheme_missing() {
        assert_eq!(
            normalize_url("example.com/path").as_deref(),
            Some("https://example.com/path")
        );
    }

    #[test]
    fn normalize_rejects_empty_input() {
        assert_eq!(normalize_url(""), None);
    }
}
