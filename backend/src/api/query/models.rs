//! Request and response envelopes of the query endpoint.
//!
//! A request names one operation and its arguments:
//!
//! ```json
//! {"operation": "editPost", "arguments": {"token": "...", "postId": 1, "content": "Edited"}}
//! ```
//!
//! The response nests the operation's payload under its name:
//! `{"data": {"editPost": {"post": {...}, "success": true, "errors": null}}}`.

use serde::{Deserialize, Serialize};

use crate::api::posts::models::{
    AllPostsArgs, CreatePostArgs, DeletePostArgs, DeletePostPayload, EditPostArgs, PostByIdArgs,
    PostPayload,
};
use crate::auth::models::{CreateUserArgs, CreateUserPayload, ObtainTokenArgs, ObtainTokenPayload};
use crate::database::Post;

#[derive(Clone, Deserialize)]
#[serde(tag = "operation", content = "arguments", rename_all = "camelCase")]
pub enum QueryRequest {
    /// `arguments` may be absent, `null` or `{}`.
    AllPosts(Option<AllPostsArgs>),
    PostById(PostByIdArgs),
    CreateUser(CreateUserArgs),
    ObtainToken(ObtainTokenArgs),
    CreatePost(CreatePostArgs),
    EditPost(EditPostArgs),
    DeletePost(DeletePostArgs),
}

impl QueryRequest {
    pub fn operation(&self) -> &'static str {
        match self {
            QueryRequest::AllPosts(_) => "allPosts",
            QueryRequest::PostById(_) => "postById",
            QueryRequest::CreateUser(_) => "createUser",
            QueryRequest::ObtainToken(_) => "obtainToken",
            QueryRequest::CreatePost(_) => "createPost",
            QueryRequest::EditPost(_) => "editPost",
            QueryRequest::DeletePost(_) => "deletePost",
        }
    }

    pub fn is_mutation(&self) -> bool {
        !matches!(self, QueryRequest::AllPosts(_) | QueryRequest::PostById(_))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QueryData {
    AllPosts(Vec<Post>),
    PostById(Post),
    CreateUser(CreateUserPayload),
    ObtainToken(ObtainTokenPayload),
    CreatePost(PostPayload),
    EditPost(PostPayload),
    DeletePost(DeletePostPayload),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    pub data: QueryData,
}
