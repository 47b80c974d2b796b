//! Authentication module for managing user accounts, tokens, and access control.
//!
//! This module provides the public interface for registration, login, token
//! issuance and verification, and the authorization gate every mutation
//! passes through.

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod service;

// Re-exports for convenience
pub use errors::AuthError;
pub use middleware::{AuthorizationGate, GateStage};
pub use models::{Claims, CreateUserPayload, ObtainTokenPayload, UserView};
pub use service::{hash_password, verify_password, AuthService, TokenService};
