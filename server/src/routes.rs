//! HTTP routes for serving the built site.

use axum::{Router, routing::get};
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::ServerConfig;

/// Health check path.
pub const HEALTH_PATH: &str = "/healthz";

/// Create the site router.
///
/// Files under the site root are served as-is. Any other path gets the
/// index page so the client router can handle `/article` and friends.
pub fn create_router(config: &ServerConfig) -> Router {
    let index = ServeFile::new(config.index_path());
    let assets = ServeDir::new(&config.site_root).fallback(index);

    Router::new()
        .route(HEALTH_PATH, get(health_handler))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
}

async fn health_handler() -> &'static str {
    "ok"
}
