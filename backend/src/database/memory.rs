//! In-memory storage implementation

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::models::{Identity, IdentityId, NewIdentity, NewPost, Post, PostId};
use super::queries::{IdentityStore, PostStore, StorageResult};
use crate::errors::StorageError;

#[derive(Debug, Default)]
struct Tables {
    identities: BTreeMap<IdentityId, Identity>,
    posts: BTreeMap<PostId, Post>,
    next_identity_id: IdentityId,
    next_post_id: PostId,
}

/// In-memory storage for development and testing.
///
/// Both tables sit behind one lock so a write that checks a constraint across
/// them (a post's author must exist) sees a consistent view.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IdentityStore for InMemoryStore {
    async fn insert_identity(&self, identity: NewIdentity) -> StorageResult<Identity> {
        let mut tables = self.tables.write().await;

        if tables
            .identities
            .values()
            .any(|existing| existing.username == identity.username)
        {
            return Err(StorageError::Conflict(format!(
                "username {} already exists",
                identity.username
            )));
        }

        tables.next_identity_id += 1;
        let row = Identity {
            id: tables.next_identity_id,
            username: identity.username,
            email: identity.email,
            password_hash: identity.password_hash,
            date_joined: Utc::now(),
        };
        tables.identities.insert(row.id, row.clone());
        Ok(row)
    }

    async fn find_identity_by_id(&self, id: IdentityId) -> StorageResult<Option<Identity>> {
        let tables = self.tables.read().await;
        Ok(tables.identities.get(&id).cloned())
    }

    async fn find_identity_by_username(&self, username: &str) -> StorageResult<Option<Identity>> {
        let tables = self.tables.read().await;
        Ok(tables
            .identities
            .values()
            .find(|identity| identity.username == username)
            .cloned())
    }
}

#[async_trait]
impl PostStore for InMemoryStore {
    async fn insert_post(&self, post: NewPost) -> StorageResult<Post> {
        let mut tables = self.tables.write().await;

        if !tables.identities.contains_key(&post.author_id) {
            return Err(StorageError::Integrity(format!(
                "author {} does not exist",
                post.author_id
            )));
        }

        tables.next_post_id += 1;
        let now = Utc::now();
        let row = Post {
            id: tables.next_post_id,
            title: post.title,
            content: post.content,
            author_id: post.author_id,
            created_at: now,
            updated_at: now,
        };
        tables.posts.insert(row.id, row.clone());
        Ok(row)
    }

    async fn find_post_by_id(&self, id: PostId) -> StorageResult<Option<Post>> {
        let tables = self.tables.read().await;
        Ok(tables.posts.get(&id).cloned())
    }

    async fn find_owned_post(
        &self,
        id: PostId,
        author_id: IdentityId,
    ) -> StorageResult<Option<Post>> {
        let tables = self.tables.read().await;
        Ok(tables
            .posts
            .get(&id)
            .filter(|post| post.author_id == author_id)
            .cloned())
    }

    async fn save_post(&self, post: &Post) -> StorageResult<()> {
        let mut tables = self.tables.write().await;
        let stored = tables
            .posts
            .get_mut(&post.id)
            .ok_or_else(|| StorageError::NotFound(format!("post {}", post.id)))?;

        if stored.author_id != post.author_id {
            return Err(StorageError::Integrity(format!(
                "author of post {} cannot change",
                post.id
            )));
        }

        stored.title = post.title.clone();
        stored.content = post.content.clone();
        stored.updated_at = post.updated_at;
        Ok(())
    }

    async fn delete_post(&self, id: PostId) -> StorageResult<bool> {
        let mut tables = self.tables.write().await;
        Ok(tables.posts.remove(&id).is_some())
    }

    async fn list_posts(&self) -> StorageResult<Vec<Post>> {
        let tables = self.tables.read().await;
        Ok(tables.posts.values().cloned().collect())
    }
}
