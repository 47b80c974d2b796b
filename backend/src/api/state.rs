//! Application state for API handlers

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::auth::{AuthService, TokenService};
use crate::config::AuthConfig;
use crate::database::{BlogStore, InMemoryStore};
use crate::services::PostService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Registration and login
    pub auth: AuthService,

    /// Post use cases
    pub posts: PostService,

    /// Service version
    pub version: String,

    /// Service start time
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Wire services over a storage backend and a token service.
    pub fn new(store: Arc<dyn BlogStore>, tokens: Arc<TokenService>) -> Self {
        Self {
            auth: AuthService::new(store.clone(), tokens.clone()),
            posts: PostService::new(store, tokens),
            version: env!("CARGO_PKG_VERSION").to_string(),
            started_at: Utc::now(),
        }
    }

    /// State backed by a fresh in-memory store.
    pub fn in_memory(auth: &AuthConfig) -> Self {
        Self::new(
            Arc::new(InMemoryStore::new()),
            Arc::new(TokenService::new(auth)),
        )
    }

    /// Get uptime as a human-readable string
    pub fn uptime(&self) -> String {
        let secs = (Utc::now() - self.started_at).num_seconds();

        if secs < 60 {
            format!("{}s", secs)
        } else if secs < 3600 {
            format!("{}m {}s", secs / 60, secs % 60)
        } else if secs < 86400 {
            format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
        } else {
            format!("{}d {}h", secs / 86400, (secs % 86400) / 3600)
        }
    }
}
