//! Axum router configuration for the Moodline HTTP API.

use crate::analyze;
use crate::config::ApiConfig;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use moodline_analysis::AnalysisContext;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the API router around a shared, immutable analysis context.
pub fn build_router(context: Arc<AnalysisContext>, config: &ApiConfig) -> Router {
    let mut router = Router::new()
        .route("/", get(analyze::home))
        .route("/health", get(health_check))
        .route("/analyze", post(analyze::analyze))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(context);

    if config.enable_cors {
        router = router.layer(create_cors_layer(config));
    }

    router
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

/// Create CORS layer based on configuration.
fn create_cors_layer(config: &ApiConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    if config.cors_allowed_origins.is_empty() {
        cors = cors.allow_origin(tower_http::cors::Any);
    } else {
        let origins: Vec<axum::http::HeaderValue> = config
            .cors_allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    cors.allow_methods([axum::http::Method::GET, axum::http::Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE])
}
