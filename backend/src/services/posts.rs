//! Post use cases.
//!
//! Every mutation authenticates through [`AuthorizationGate`] before touching
//! storage. Edits and deletes load the post with the ownership filter; a
//! create binds the new post to the token's identity and nothing else.

use std::sync::Arc;

use chrono::Utc;

use crate::auth::{AuthorizationGate, GateStage, TokenService};
use crate::database::{BlogStore, NewPost, Post, PostChanges, PostId};
use crate::errors::BlogError;

#[derive(Clone)]
pub struct PostService {
    store: Arc<dyn BlogStore>,
    tokens: Arc<TokenService>,
}

impl PostService {
    pub fn new(store: Arc<dyn BlogStore>, tokens: Arc<TokenService>) -> Self {
        Self { store, tokens }
    }

    fn gate(&self) -> AuthorizationGate<'_> {
        AuthorizationGate::new(&self.tokens, self.store.as_ref())
    }

    /// Create a post authored by the token's identity.
    pub async fn create_post(
        &self,
        token: &str,
        title: String,
        content: String,
    ) -> Result<Post, BlogError> {
        let author = self.gate().authenticate(token).await?;

        let post = self
            .store
            .insert_post(NewPost {
                title,
                content,
                author_id: author.id,
            })
            .await?;

        tracing::info!(post_id = post.id, author_id = author.id, stage = %GateStage::Applied, "Created post");
        Ok(post)
    }

    /// Apply the supplied fields to a post owned by the token's identity.
    pub async fn edit_post(
        &self,
        token: &str,
        post_id: PostId,
        changes: PostChanges,
    ) -> Result<Post, BlogError> {
        let gate = self.gate();
        let author = gate.authenticate(token).await?;
        let mut post = gate.authorize_post(&author, post_id).await?;

        changes.apply_to(&mut post, Utc::now());
        self.store.save_post(&post).await?;

        tracing::info!(post_id, author_id = author.id, stage = %GateStage::Applied, "Edited post");
        Ok(post)
    }

    /// Delete a post owned by the token's identity.
    pub async fn delete_post(&self, token: &str, post_id: PostId) -> Result<(), BlogError> {
        let gate = self.gate();
        let author = gate.authenticate(token).await?;
        let post = gate.authorize_post(&author, post_id).await?;

        // Lost a race with another delete of the same post.
        if !self.store.delete_post(post.id).await? {
            return Err(BlogError::PostNotFound);
        }

        tracing::info!(post_id, author_id = author.id, stage = %GateStage::Applied, "Deleted post");
        Ok(())
    }

    pub async fn all_posts(&self) -> Result<Vec<Post>, BlogError> {
        Ok(self.store.list_posts().await?)
    }

    pub async fn post_by_id(&self, post_id: PostId) -> Result<Post, BlogError> {
        self.store
            .find_post_by_id(post_id)
            .await?
            .ok_or(BlogError::PostNotFound)
    }
}
