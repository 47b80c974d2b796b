//! Database query interfaces (Data Access Objects).
//!
//! This module centralizes the typed operations the rest of the backend may
//! perform against persistent state. Services depend on these traits, never
//! on a concrete backend.

use async_trait::async_trait;

use super::models::{Identity, IdentityId, NewIdentity, NewPost, Post, PostId};
use crate::errors::StorageError;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage for registered identities
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Persist a new identity. Fails with `Conflict` if the username is taken.
    async fn insert_identity(&self, identity: NewIdentity) -> StorageResult<Identity>;

    /// Get an identity by ID
    async fn find_identity_by_id(&self, id: IdentityId) -> StorageResult<Option<Identity>>;

    /// Get an identity by its unique username
    async fn find_identity_by_username(&self, username: &str) -> StorageResult<Option<Identity>>;
}

/// Storage for posts
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Persist a new post. Fails with `Integrity` if the author does not exist.
    async fn insert_post(&self, post: NewPost) -> StorageResult<Post>;

    /// Get a post by ID regardless of author
    async fn find_post_by_id(&self, id: PostId) -> StorageResult<Option<Post>>;

    /// Get a post by ID only if it was written by `author_id`.
    ///
    /// A post owned by someone else is reported exactly like a missing one.
    async fn find_owned_post(&self, id: PostId, author_id: IdentityId)
        -> StorageResult<Option<Post>>;

    /// Write back the mutable fields of an existing post.
    ///
    /// Fails with `NotFound` if the row is gone and with `Integrity` if the
    /// caller tried to change its author.
    async fn save_post(&self, post: &Post) -> StorageResult<()>;

    /// Delete a post by ID
    async fn delete_post(&self, id: PostId) -> StorageResult<bool>;

    /// List all posts ordered by ID
    async fn list_posts(&self) -> StorageResult<Vec<Post>>;
}

/// Combined storage trait
pub trait BlogStore: IdentityStore + PostStore {}

impl<T: IdentityStore + PostStore> BlogStore for T {}
