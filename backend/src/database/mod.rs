//! Module for persistent state and its access interfaces.
//!
//! The rest of the backend talks to storage only through the traits in
//! [`queries`]; [`memory`] provides the backend used by the daemon and tests.

pub mod memory;
pub mod models;
pub mod queries;

pub use memory::InMemoryStore;
pub use models::{Identity, IdentityId, NewIdentity, NewPost, Post, PostChanges, PostId};
pub use queries::{BlogStore, IdentityStore, PostStore, StorageResult};
