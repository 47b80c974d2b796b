//! Resolvers for the post queries and mutations.
//!
//! Mutations always produce a payload; reads report a miss as an
//! [`ApiError`] so the endpoint can answer with a structured 404.

use super::models::{
    CreatePostArgs, DeletePostArgs, DeletePostPayload, EditPostArgs, PostByIdArgs, PostPayload,
};
use crate::api::state::AppState;
use crate::database::{Post, PostChanges};
use crate::errors::ApiResult;

/// `createPost(token, title, content)`
pub async fn create_post(state: &AppState, args: CreatePostArgs) -> PostPayload {
    state
        .posts
        .create_post(&args.token, args.title, args.content)
        .await
        .into()
}

/// `editPost(token, postId, title?, content?)`
pub async fn edit_post(state: &AppState, args: EditPostArgs) -> PostPayload {
    let changes = PostChanges {
        title: args.title,
        content: args.content,
    };
    state
        .posts
        .edit_post(&args.token, args.post_id, changes)
        .await
        .into()
}

/// `deletePost(token, postId)`
pub async fn delete_post(state: &AppState, args: DeletePostArgs) -> DeletePostPayload {
    state
        .posts
        .delete_post(&args.token, args.post_id)
        .await
        .into()
}

/// `allPosts`
pub async fn all_posts(state: &AppState) -> ApiResult<Vec<Post>> {
    Ok(state.posts.all_posts().await?)
}

/// `postById(id)`
pub async fn post_by_id(state: &AppState, args: PostByIdArgs) -> ApiResult<Post> {
    Ok(state.posts.post_by_id(args.id).await?)
}
