//! Defines the HTTP route of the query endpoint.

use axum::{routing::post, Router};

use super::handlers::execute;
use crate::api::state::AppState;

pub fn query_router() -> Router<AppState> {
    Router::new().route("/query", post(execute))
}
