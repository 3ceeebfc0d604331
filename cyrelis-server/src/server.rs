//! Axum router setup.

use crate::config::ServerConfig;
use crate::handlers::{export, page};
use axum::body::Bytes;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Read-only state shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub page: Bytes,
}

pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let mut router = Router::new()
        .route("/", get(page::index))
        .route(
            "/api/export-bitwarden-csv",
            post(export::export_bitwarden_csv),
        )
        .route("/health", get(health));

    if config.permissive_cors {
        router = router.layer(CorsLayer::permissive());
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(config.max_payload_size))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
