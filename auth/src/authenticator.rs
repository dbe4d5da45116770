use std::sync::Arc;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::SecretKey;
use crate::jwt::TokenIssuer;
use crate::jwt::TokenVerifier;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token handling.
///
/// Provides high-level authentication operations by coordinating
/// password hashing, token issuance and token verification.
#[derive(Clone)]
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
    token_verifier: TokenVerifier,
}

/// Result of successful authentication.
#[derive(Debug)]
pub struct AuthenticationResult {
    /// JWT access token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator from its parts.
    ///
    /// The issuer and verifier must have been built from the same secret key.
    pub fn new(
        password_hasher: PasswordHasher,
        token_issuer: TokenIssuer,
        token_verifier: TokenVerifier,
    ) -> Self {
        Self {
            password_hasher,
            token_issuer,
            token_verifier,
        }
    }

    /// Create an authenticator with default hashing cost and token lifetime.
    ///
    /// # Arguments
    /// * `secret` - Secret key for token signing
    pub fn from_secret(secret: Arc<SecretKey>) -> Self {
        Self::new(
            PasswordHasher::new(),
            TokenIssuer::new(Arc::clone(&secret)),
            TokenVerifier::new(secret),
        )
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `HashingFailed` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a password against a stored hash.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Verify credentials and issue a token for the subject.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `user_id` - Subject identifier to embed
    /// * `email` - Subject email to embed
    ///
    /// # Returns
    /// AuthenticationResult with access token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        user_id: i64,
        email: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.token_issuer.issue(user_id, email)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Issue a token without password verification.
    ///
    /// Used right after registration, when the caller has just set the password.
    ///
    /// # Errors
    /// * `SigningFailed` - Token generation failed
    pub fn issue_token(&self, user_id: i64, email: &str) -> Result<String, JwtError> {
        self.token_issuer.issue(user_id, email)
    }

    /// Validate and decode a token.
    ///
    /// # Errors
    /// * `InvalidToken` - Malformed, wrong algorithm or bad signature
    /// * `ExpiredToken` - Token has expired
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.token_verifier.verify(token)
    }

    pub fn password_hasher(&self) -> &PasswordHasher {
        &self.password_hasher
    }

    pub fn token_verifier(&self) -> &TokenVerifier {
        &self.token_verifier
    }
}
