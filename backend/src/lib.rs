//! Blog backend library
//!
//! User registration, post authoring and author-scoped edits over a single
//! query endpoint. Writes are authorized with stateless HS256 bearer tokens
//! bound to a stored identity.

pub mod api;
pub mod auth;
pub mod config;
pub mod database;
pub mod errors;
pub mod middleware;
pub mod server;
pub mod services;

pub use crate::api::{create_router, state::AppState};
pub use crate::config::AppConfig;
pub use crate::errors::{ApiError, AppError, BlogError, StorageError};
pub use crate::server::Server;
