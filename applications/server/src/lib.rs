//! Airwave Server Library
//!
//! Thin HTTP surface for the Airwave web player: proxies the track
//! catalog provider and exposes the recently-played history.
//!
//! The router is exposed here so integration tests can drive it without
//! binding a socket.

pub mod api;
pub mod config;
pub mod error;
pub mod state;

// Re-export commonly used types for convenience
pub use config::AppConfig;
pub use error::{Result, ServerError};
pub use state::AppState;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, TraceLayer};

/// Build the application router
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(api::health::health))
        .route("/catalog/search", get(api::catalog::search))
        .route("/catalog/tracks/:id", get(api::catalog::get_track))
        .route("/catalog/stream/:id", get(api::catalog::stream))
        .route(
            "/history",
            get(api::history::list_recent).post(api::history::record_play),
        );

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
