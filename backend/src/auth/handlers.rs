//! Resolvers for the account mutations.
//!
//! These functions take already-parsed arguments from the query endpoint,
//! call into `auth::service`, and fold any failure into the payload's
//! `{success, errors}` fields instead of failing the request.

use super::models::{CreateUserArgs, CreateUserPayload, ObtainTokenArgs, ObtainTokenPayload};
use crate::api::state::AppState;

/// `createUser(username, email, password)`
pub async fn create_user(state: &AppState, args: CreateUserArgs) -> CreateUserPayload {
    match state
        .auth
        .register(&args.username, &args.email, &args.password)
        .await
    {
        Ok((identity, token)) => CreateUserPayload::ok(&identity, token),
        Err(err) => {
            tracing::debug!(username = %args.username, error = %err, "Registration failed");
            CreateUserPayload::failed(&err)
        }
    }
}

/// `obtainToken(username, password)`
pub async fn obtain_token(state: &AppState, args: ObtainTokenArgs) -> ObtainTokenPayload {
    match state.auth.login(&args.username, &args.password).await {
        Ok(token) => ObtainTokenPayload::ok(token),
        Err(err) => ObtainTokenPayload::failed(&err),
    }
}
