//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /r/{short_name}` - Alias redirect
//! - `GET  /ping`           - Liveness probe
//! - `GET  /health`         - Storage health check
//! - `/api/*`               - Link management API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Configured origins, `Content-Range` exposed
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, ping_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::application::services::REDIRECT_PREFIX;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routed application with tracing, without CORS or path
/// normalization.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            &format!("/{}/{{short_name}}", REDIRECT_PREFIX),
            get(redirect_handler),
        )
        .route("/ping", get(ping_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::link_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `cors` - cross-origin policy, see [`crate::api::middleware::cors::layer`]
pub fn app_router(state: AppState, cors: CorsLayer) -> NormalizePath<Router> {
    let router = router(state).layer(cors);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
