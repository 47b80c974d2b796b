//! Rust structs that represent the stored rows.
//!
//! These models define the structure of data as it is stored in and retrieved
//! from the database. The API layer exposes its own views where the two
//! differ (an identity never leaves the process with its password hash).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Primary key of an identity row.
pub type IdentityId = i64;

/// Primary key of a post row.
pub type PostId = i64;

/// A registered account capable of authoring posts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: IdentityId,
    pub username: String,
    pub email: String,
    /// Argon2 PHC string
    pub password_hash: String,
    pub date_joined: DateTime<Utc>,
}

/// Identity fields supplied at registration; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewIdentity {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author_id: IdentityId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author_id: IdentityId,
}

/// Field updates for an existing post.
///
/// `None` leaves the stored value alone; `Some(String::new())` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostChanges {
    /// Apply the supplied fields to `post`, stamping `updated_at` with `now`.
    pub fn apply_to(self, post: &mut Post, now: DateTime<Utc>) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
        post.updated_at = now;
    }
}
