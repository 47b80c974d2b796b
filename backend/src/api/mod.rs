//! Central module for organizing the application's HTTP surface.
//!
//! This module assembles the query endpoint, the liveness endpoints and the
//! shared state they run against into one router.

pub mod health;
pub mod posts;
pub mod query;
pub mod state;

use axum::{routing::get, Router};

use crate::config::ServerConfig;
use crate::middleware;
use state::AppState;

/// Create the main application router
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    let app = Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_check))
        .nest("/api", query::routes::query_router());

    middleware::apply(app, config).with_state(state)
}
