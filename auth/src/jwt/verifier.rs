use std::sync::Arc;

use jsonwebtoken::decode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;
use super::secret::SecretKey;

/// Verifies access tokens produced by a [`TokenIssuer`](super::TokenIssuer)
/// sharing the same secret key.
///
/// Only the HMAC family is accepted. Tokens whose header names any other
/// algorithm (asymmetric ones, `none`) are rejected before the signature is
/// looked at.
#[derive(Clone)]
pub struct TokenVerifier {
    secret: Arc<SecretKey>,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(secret: Arc<SecretKey>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation.set_required_spec_claims(&["exp"]);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            secret,
            validation,
        }
    }

    /// Decode and validate a token.
    ///
    /// # Arguments
    /// * `token` - JWT token string to decode
    ///
    /// # Returns
    /// Decoded claims
    ///
    /// # Errors
    /// * `InvalidToken` - Malformed, wrong algorithm or bad signature
    /// * `ExpiredToken` - Signature is valid but `exp` has passed
    pub fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        if self.secret.is_empty() {
            return Err(JwtError::InvalidToken(
                "verification key is empty".to_string(),
            ));
        }

        // Signature is checked before exp, so a forged expired token reports
        // InvalidToken rather than ExpiredToken.
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::ExpiredToken,
                _ => JwtError::InvalidToken(e.to_string()),
            })
    }
}
