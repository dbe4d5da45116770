use thiserror::Error;

/// Error type for JWT operations.
///
/// `InvalidToken` and `ExpiredToken` are kept apart for diagnostics only.
/// Callers facing a client must not reveal which one occurred.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to sign token: {0}")]
    SigningFailed(String),

    #[error("Token is invalid: {0}")]
    InvalidToken(String),

    #[error("Token is expired")]
    ExpiredToken,
}
