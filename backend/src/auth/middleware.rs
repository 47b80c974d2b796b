//! Authorization gate guarding every mutation.
//!
//! A mutation moves through `Start -> TokenVerified -> Authorized -> Applied`;
//! any step may reject it instead. Creating a post skips `Authorized` since
//! there is no resource to load. For post-scoped mutations the load and the
//! ownership check are one lookup, so "absent" and "not yours" are
//! indistinguishable to the caller.

use std::fmt;

use super::errors::AuthError;
use super::service::TokenService;
use crate::database::{BlogStore, Identity, Post, PostId};
use crate::errors::BlogError;

/// Progress of a mutation through the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateStage {
    Start,
    TokenVerified,
    Authorized,
    Applied,
}

impl fmt::Display for GateStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GateStage::Start => "start",
            GateStage::TokenVerified => "token_verified",
            GateStage::Authorized => "authorized",
            GateStage::Applied => "applied",
        };
        f.write_str(name)
    }
}

/// Borrowing view over the token service and store for one request.
pub struct AuthorizationGate<'a> {
    tokens: &'a TokenService,
    store: &'a dyn BlogStore,
}

impl<'a> AuthorizationGate<'a> {
    pub fn new(tokens: &'a TokenService, store: &'a dyn BlogStore) -> Self {
        Self { tokens, store }
    }

    /// Verify `token` and resolve it to a stored identity.
    ///
    /// No resource is touched when this fails.
    pub async fn authenticate(&self, token: &str) -> Result<Identity, BlogError> {
        let identity_id = self.tokens.verify(token).map_err(|err| {
            reject(GateStage::Start, &err);
            err
        })?;

        match self.store.find_identity_by_id(identity_id).await? {
            Some(identity) => Ok(identity),
            None => {
                let err = AuthError::UnknownIdentity;
                reject(GateStage::Start, &err);
                Err(err.into())
            }
        }
    }

    /// Load `post_id` filtered by ownership in a single lookup.
    pub async fn authorize_post(
        &self,
        identity: &Identity,
        post_id: PostId,
    ) -> Result<Post, BlogError> {
        match self.store.find_owned_post(post_id, identity.id).await? {
            Some(post) => {
                tracing::debug!(
                    stage = %GateStage::Authorized,
                    post_id,
                    user_id = identity.id,
                    "Post ownership confirmed"
                );
                Ok(post)
            }
            None => {
                let err = BlogError::PostNotFound;
                reject(GateStage::TokenVerified, &err);
                Err(err)
            }
        }
    }
}

fn reject(stage: GateStage, err: &dyn std::error::Error) {
    tracing::debug!(%stage, error = %err, "Mutation rejected");
}
