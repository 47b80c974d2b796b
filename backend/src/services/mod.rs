//! Module for core business logic services.
//!
//! Services orchestrate the authorization gate and the storage interfaces on
//! behalf of the API resolvers. Account operations live with the rest of the
//! authentication code in `auth::service`.

pub mod posts;

pub use posts::PostService;
