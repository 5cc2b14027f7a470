//! SecureFlow - Two-stage human verification
//!
//! Step 1 gates on how long the identity form took to fill in, step 2 asks
//! the user to sketch an arrow and classifies its direction.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       SECUREFLOW                         │
//! ├──────────────────────────────────────────────────────────┤
//! │  ┌───────────┐   ┌──────────────┐   ┌─────────────────┐  │
//! │  │  API      │──▶│  Challenge   │──▶│  Direction      │  │
//! │  │  (Axum)   │   │  Sessions    │   │  Classifier     │  │
//! │  └───────────┘   └──────┬───────┘   │  (pure)         │  │
//! │                         ▼           └─────────────────┘  │
//! │                  ┌─────────────┐                         │
//! │                  │ SessionStore│ (in-memory, TTL)        │
//! │                  └─────────────┘                         │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod constants;
pub mod config;
pub mod error;
pub mod classifier;
pub mod challenge;
pub mod store;
pub mod models;
pub mod handlers;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};

pub use error::{AppError, AppResult};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: store::SessionStore,
    pub config: config::Config,
}

impl AppState {
    pub fn new(config: config::Config) -> Self {
        Self {
            store: store::SessionStore::new(),
            config,
        }
    }
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;

    let challenge_routes = Router::new()
        .route("/api/v1/challenges", post(handlers::challenge::create))
        .route(
            "/api/v1/challenges/:id",
            get(handlers::challenge::get).delete(handlers::challenge::delete),
        )
        .route("/api/v1/challenges/:id/identity", post(handlers::challenge::submit_identity))
        .route("/api/v1/challenges/:id/drawing", post(handlers::challenge::submit_drawing))
        .route("/api/v1/challenges/:id/reset", post(handlers::challenge::reset));

    Router::new()
        .route("/health", get(handlers::health::check))
        .route("/api/v1/classify", post(handlers::classify::classify))
        .merge(challenge_routes)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
