//! Custom error types specific to authentication failures.
//!
//! Every token failure collapses into one of a small set of kinds, each with
//! a fixed message. The underlying decode error is logged server-side and
//! never handed to the caller.

use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Signature has expired")]
    Expired,

    #[error("Signature verification failed")]
    InvalidSignature,

    #[error("The specified alg value is not allowed")]
    UnsupportedAlgorithm,

    #[error("Invalid token")]
    Malformed,

    /// Token verified but its identity no longer resolves.
    #[error("User does not exist")]
    UnknownIdentity,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Failed to sign token")]
    Signing,

    #[error("Failed to hash password")]
    PasswordHash,
}

impl From<JwtError> for AuthError {
    fn from(err: JwtError) -> Self {
        tracing::debug!(error = %err, "Token rejected");
        match err.kind() {
            ErrorKind::ExpiredSignature => AuthError::Expired,
            ErrorKind::InvalidSignature => AuthError::InvalidSignature,
            ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
                AuthError::UnsupportedAlgorithm
            }
            _ => AuthError::Malformed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_kinds_collapse_to_bounded_errors() {
        assert_eq!(
            AuthError::from(JwtError::from(ErrorKind::ExpiredSignature)),
            AuthError::Expired
        );
        assert_eq!(
            AuthError::from(JwtError::from(ErrorKind::InvalidSignature)),
            AuthError::InvalidSignature
        );
        assert_eq!(
            AuthError::from(JwtError::from(ErrorKind::InvalidAlgorithm)),
            AuthError::UnsupportedAlgorithm
        );
        assert_eq!(
            AuthError::from(JwtError::from(ErrorKind::InvalidToken)),
            AuthError::Malformed
        );
    }
}
