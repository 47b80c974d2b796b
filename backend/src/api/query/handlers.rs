//! Dispatcher for the single query endpoint.

use axum::{extract::State, Json};

use super::models::{QueryData, QueryRequest, QueryResponse};
use crate::api::posts::handlers as posts;
use crate::api::state::AppState;
use crate::auth::handlers as accounts;
use crate::errors::ApiResult;

/// Execute one operation and wrap its payload.
///
/// Mutations always answer 200 with `{success, errors}`; only reads can
/// produce an error response.
pub async fn execute(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> ApiResult<Json<QueryResponse>> {
    tracing::debug!(
        operation = request.operation(),
        mutation = request.is_mutation(),
        "Executing operation"
    );

    let data = match request {
        QueryRequest::AllPosts(_) => QueryData::AllPosts(posts::all_posts(&state).await?),
        QueryRequest::PostById(args) => QueryData::PostById(posts::post_by_id(&state, args).await?),
        QueryRequest::CreateUser(args) => {
            QueryData::CreateUser(accounts::create_user(&state, args).await)
        }
        QueryRequest::ObtainToken(args) => {
            QueryData::ObtainToken(accounts::obtain_token(&state, args).await)
        }
        QueryRequest::CreatePost(args) => {
            QueryData::CreatePost(posts::create_post(&state, args).await)
        }
        QueryRequest::EditPost(args) => QueryData::EditPost(posts::edit_post(&state, args).await),
        QueryRequest::DeletePost(args) => {
            QueryData::DeletePost(posts::delete_post(&state, args).await)
        }
    };

    Ok(Json(QueryResponse { data }))
}
