//! Data structures for authentication-related entities.
//!
//! This module defines the JWT claims carried by every token, the public
//! view of a user, and the payloads returned by the account mutations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::database::{Identity, IdentityId};
use crate::errors::BlogError;

/// Claims encoded in every issued token. Timestamps are Unix seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: IdentityId,
    pub iat: i64,
    pub exp: i64,
}

/// User as exposed to API callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: IdentityId,
    pub username: String,
    pub email: String,
    pub date_joined: DateTime<Utc>,
}

impl From<&Identity> for UserView {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id,
            username: identity.username.clone(),
            email: identity.email.clone(),
            date_joined: identity.date_joined,
        }
    }
}

/// Result of `createUser`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserPayload {
    pub user: Option<UserView>,
    pub token: Option<String>,
    pub success: bool,
    pub errors: Option<String>,
}

impl CreateUserPayload {
    pub fn ok(identity: &Identity, token: String) -> Self {
        Self {
            user: Some(identity.into()),
            token: Some(token),
            success: true,
            errors: None,
        }
    }

    pub fn failed(err: &BlogError) -> Self {
        Self {
            user: None,
            token: None,
            success: false,
            errors: Some(err.public_message()),
        }
    }
}

/// Result of `obtainToken`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObtainTokenPayload {
    pub token: Option<String>,
    pub success: bool,
    pub errors: Option<String>,
}

impl ObtainTokenPayload {
    pub fn ok(token: String) -> Self {
        Self {
            token: Some(token),
            success: true,
            errors: None,
        }
    }

    pub fn failed(err: &BlogError) -> Self {
        Self {
            token: None,
            success: false,
            errors: Some(err.public_message()),
        }
    }
}

/// Arguments of `createUser`. Not `Debug`: carries a plaintext password.
#[derive(Clone, Deserialize)]
pub struct CreateUserArgs {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Arguments of `obtainToken`.
#[derive(Clone, Deserialize)]
pub struct ObtainTokenArgs {
    pub username: String,
    pub password: String,
}
