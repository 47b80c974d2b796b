//! Core business logic for the authentication system.
//!
//! This service handles user creation, password hashing, token issuance and
//! token validation. Tokens are stateless HS256 JWTs: nothing about an issued
//! token is remembered server-side, so validity is decided purely by its
//! signature and expiry.

use std::fmt;
use std::sync::{Arc, OnceLock};

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand_core::OsRng;

use super::errors::AuthError;
use super::models::Claims;
use crate::config::AuthConfig;
use crate::database::{BlogStore, Identity, IdentityId, NewIdentity};
use crate::errors::{BlogError, StorageError};

const USERNAME_MAX_LEN: usize = 150;

/// Issues and verifies bearer tokens with the process-wide secret.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("algorithm", &Algorithm::HS256)
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            ttl: Duration::seconds(config.token_ttl_secs),
        }
    }

    /// Issue a token for a persisted identity, valid from now for the
    /// configured lifetime.
    pub fn issue(&self, identity: &Identity) -> Result<String, AuthError> {
        self.issue_at(identity, Utc::now())
    }

    /// Issue a token as if the current time were `now`.
    pub fn issue_at(&self, identity: &Identity, now: DateTime<Utc>) -> Result<String, AuthError> {
        let claims = Claims {
            user_id: identity.id,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(
            |err| {
                tracing::error!(error = %err, user_id = identity.id, "Token signing failed");
                AuthError::Signing
            },
        )
    }

    /// Check signature and expiry, returning the decoded claims.
    pub fn decode(&self, token: &str) -> Result<Claims, AuthError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(data.claims)
    }

    /// Check signature and expiry, returning the identity the token was
    /// issued for.
    pub fn verify(&self, token: &str) -> Result<IdentityId, AuthError> {
        self.decode(token).map(|claims| claims.user_id)
    }
}

/// Hash a password into an Argon2id PHC string with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| {
            tracing::error!(error = %err, "Password hashing failed");
            AuthError::PasswordHash
        })
}

pub fn verify_password(password: &str, password_hash: &str) -> Result<(), AuthError> {
    let parsed = PasswordHash::new(password_hash).map_err(|_| AuthError::InvalidCredentials)?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| AuthError::InvalidCredentials)
}

/// PHC string checked against when a login names an unknown user, so both
/// failure paths pay for one Argon2 verification.
fn dummy_password_hash() -> Option<&'static str> {
    static HASH: OnceLock<Option<String>> = OnceLock::new();
    HASH.get_or_init(|| hash_password("unknown-identity").ok()).as_deref()
}

fn validate_registration(username: &str, email: &str, password: &str) -> Result<(), BlogError> {
    if username.is_empty() || username.chars().count() > USERNAME_MAX_LEN {
        return Err(BlogError::Validation(format!(
            "Username must be between 1 and {USERNAME_MAX_LEN} characters."
        )));
    }
    if !username
        .chars()
        .all(|c| c.is_alphanumeric() || "@.+-_".contains(c))
    {
        return Err(BlogError::Validation(
            "Username may contain only letters, numbers, and @/./+/-/_ characters.".to_string(),
        ));
    }
    if !email.is_empty() && !email.contains('@') {
        return Err(BlogError::Validation("Enter a valid email address.".to_string()));
    }
    if password.is_empty() {
        return Err(BlogError::Validation("Password must not be empty.".to_string()));
    }
    Ok(())
}

/// Account operations: registration and login.
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn BlogStore>,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(store: Arc<dyn BlogStore>, tokens: Arc<TokenService>) -> Self {
        Self { store, tokens }
    }

    /// Create an identity and hand back a token bound to it.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(Identity, String), BlogError> {
        validate_registration(username, email, password)?;

        let password = password.to_owned();
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|_| AuthError::PasswordHash)??;

        let identity = self
            .store
            .insert_identity(NewIdentity {
                username: username.to_owned(),
                email: email.to_owned(),
                password_hash,
            })
            .await
            .map_err(|err| match err {
                StorageError::Conflict(_) => BlogError::UsernameTaken,
                other => BlogError::Storage(other),
            })?;

        let token = self.tokens.issue(&identity)?;
        tracing::info!(user_id = identity.id, username = %identity.username, "Registered user");

        Ok((identity, token))
    }

    /// Exchange a username and password for a fresh token.
    ///
    /// An unknown username and a wrong password are reported identically and
    /// both run one password verification.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, BlogError> {
        let identity = self.store.find_identity_by_username(username).await?;

        let password = password.to_owned();
        let stored_hash = identity.as_ref().map(|found| found.password_hash.clone());
        tokio::task::spawn_blocking(move || match stored_hash {
            Some(hash) => verify_password(&password, &hash),
            None => {
                if let Some(hash) = dummy_password_hash() {
                    let _ = verify_password(&password, hash);
                }
                Err(AuthError::InvalidCredentials)
            }
        })
        .await
        .map_err(|_| AuthError::InvalidCredentials)??;

        let identity = identity.ok_or(AuthError::InvalidCredentials)?;

        let token = self.tokens.issue(&identity)?;
        tracing::info!(user_id = identity.id, "Issued token on login");
        Ok(token)
    }
}
