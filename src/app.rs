use crate::handlers;
use crate::state::AppState;
use crate::static_files;
use axum::{
    Router,
    routing::{get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/shorten", post(handlers::shorten))
        .route("/api/qr", post(handlers::generate_qr))
        .route("/api/stats/:code", get(handlers::stats))
        .route("/static/*path", get(static_files::serve))
        .route("/:code", get(handlers::redirect))
        .with_state(state)
}
