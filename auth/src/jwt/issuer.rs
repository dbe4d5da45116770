use std::sync::Arc;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;

use super::claims::Claims;
use super::errors::JwtError;
use super::secret::SecretKey;

/// Default access token lifetime.
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

/// Issues signed, time-bounded access tokens.
///
/// Signs with HS256 (HMAC with SHA-256) using the process secret key.
#[derive(Clone)]
pub struct TokenIssuer {
    secret: Arc<SecretKey>,
    encoding_key: EncodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    /// Create a new token issuer.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: Arc<SecretKey>) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            secret,
            ttl: Duration::hours(DEFAULT_TOKEN_TTL_HOURS),
        }
    }

    /// Override the token lifetime.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token for a subject, valid from now for the configured TTL.
    ///
    /// # Arguments
    /// * `user_id` - Subject identifier
    /// * `email` - Subject email
    ///
    /// # Returns
    /// Compact JWT string
    ///
    /// # Errors
    /// * `SigningFailed` - Secret key is unusable or encoding failed
    pub fn issue(&self, user_id: i64, email: &str) -> Result<String, JwtError> {
        self.issue_at(user_id, email, Utc::now())
    }

    /// Issue a token as if the current time were `issued_at`.
    pub fn issue_at(
        &self,
        user_id: i64,
        email: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<String, JwtError> {
        let claims = Claims::for_subject(user_id, email, issued_at, self.ttl);
        self.sign(&claims)
    }

    /// Sign a prepared claim set.
    ///
    /// # Errors
    /// * `SigningFailed` - Secret key is unusable or encoding failed
    pub fn sign(&self, claims: &Claims) -> Result<String, JwtError> {
        if self.secret.is_empty() {
            return Err(JwtError::SigningFailed(
                "signing key is empty".to_string(),
            ));
        }

        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| JwtError::SigningFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(Arc::new(SecretKey::from(
            "my_secret_key_at_least_32_bytes_long!",
        )))
    }

    #[test]
    fn test_issue_produces_three_segments() {
        let token = issuer().issue(1, "a@x.com").expect("Failed to issue token");

        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_issue_header_is_hs256() {
        let token = issuer().issue(1, "a@x.com").expect("Failed to issue token");

        let header = jsonwebtoken::decode_header(&token).expect("Failed to decode header");
        assert_eq!(header.alg, Algorithm::HS256);
    }

    #[test]
    fn test_default_ttl_is_24_hours() {
        assert_eq!(issuer().ttl(), Duration::hours(24));
    }

    #[test]
    fn test_empty_secret_fails_signing() {
        let issuer = TokenIssuer::new(Arc::new(SecretKey::from("")));

        let result = issuer.issue(1, "a@x.com");
        assert!(matches!(result, Err(JwtError::SigningFailed(_))));
    }
}
