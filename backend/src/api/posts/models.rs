//! Arguments and payloads of the post operations.
//!
//! Argument types carrying a bearer token do not implement `Debug`.

use serde::{Deserialize, Serialize};

use crate::database::{Post, PostId};
use crate::errors::BlogError;

#[derive(Clone, Deserialize)]
pub struct CreatePostArgs {
    pub token: String,
    pub title: String,
    pub content: String,
}

/// Arguments of `editPost`. An absent field is left untouched; an empty
/// string is a value like any other.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditPostArgs {
    pub token: String,
    pub post_id: PostId,
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePostArgs {
    pub token: String,
    pub post_id: PostId,
}

/// Arguments of `allPosts`. The operation takes none; `{}` is accepted so the
/// envelope looks the same for every operation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AllPostsArgs {}

#[derive(Debug, Clone, Deserialize)]
pub struct PostByIdArgs {
    pub id: PostId,
}

/// Result of `createPost` and `editPost`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostPayload {
    pub post: Option<Post>,
    pub success: bool,
    pub errors: Option<String>,
}

impl From<Result<Post, BlogError>> for PostPayload {
    fn from(result: Result<Post, BlogError>) -> Self {
        match result {
            Ok(post) => Self {
                post: Some(post),
                success: true,
                errors: None,
            },
            Err(err) => Self {
                post: None,
                success: false,
                errors: Some(err.public_message()),
            },
        }
    }
}

/// Result of `deletePost`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePostPayload {
    pub success: bool,
    pub errors: Option<String>,
}

impl From<Result<(), BlogError>> for DeletePostPayload {
    fn from(result: Result<(), BlogError>) -> Self {
        match result {
            Ok(()) => Self {
                success: true,
                errors: None,
            },
            Err(err) => Self {
                success: false,
                errors: Some(err.public_message()),
            },
        }
    }
}
