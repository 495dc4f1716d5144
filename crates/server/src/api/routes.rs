use axum::{middleware as axum_middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use super::{handlers, middleware, photos, ws};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    // Static UI files path (configurable via env)
    let ui_dir = std::env::var("UI_DIR").unwrap_or_else(|_| "ui/dist".to_string());

    // API routes
    let api_routes = Router::new()
        // Health, config, metrics
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        .route("/metrics", get(handlers::metrics))
        // Photo search and detail (read-only, data comes from the upstream API)
        .route("/photos/search", get(photos::search_photos))
        .route("/photos/status", get(photos::get_status))
        .route("/photos/{id}", get(photos::get_photo))
        // Live search: one debounced session per connection
        .route("/search/live", get(ws::ws_handler))
        .layer(axum_middleware::from_fn(middleware::metrics_middleware))
        .with_state(state);

    // Serve the UI with SPA fallback so /photo/:id resolves client-side
    let index_path = format!("{}/index.html", ui_dir);
    let serve_dir = ServeDir::new(&ui_dir).fallback(ServeFile::new(&index_path));

    Router::new()
        .nest("/api/v1", api_routes)
        .fallback_service(serve_dir)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
