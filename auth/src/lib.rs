//! Authentication utilities library
//!
//! Provides the authentication core of the account service:
//! - Password hashing (Argon2id)
//! - Access token issuance and verification (HS256 JWT)
//! - Authentication coordination
//!
//! The signing key is an explicit value handed to the issuer and verifier
//! at construction, so independent instances can run side by side with
//! distinct keys.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("other_password", &hash));
//! ```
//!
//! ## Access Tokens
//! ```
//! use std::sync::Arc;
//!
//! use auth::{SecretKey, TokenIssuer, TokenVerifier};
//!
//! let secret = Arc::new(SecretKey::from("secret_key_at_least_32_bytes_long!"));
//! let issuer = TokenIssuer::new(Arc::clone(&secret));
//! let verifier = TokenVerifier::new(secret);
//!
//! let token = issuer.issue(1, "alice@example.com").unwrap();
//! let claims = verifier.verify(&token).unwrap();
//! assert_eq!(claims.email, "alice@example.com");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use std::sync::Arc;
//!
//! use auth::{Authenticator, SecretKey};
//!
//! let auth = Authenticator::from_secret(Arc::new(SecretKey::from(
//!     "secret_key_at_least_32_bytes_long!",
//! )));
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let result = auth.authenticate("password123", &hash, 1, "alice@example.com").unwrap();
//!
//! // Validate token
//! let claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(claims.user_id, 1);
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::Identity;
pub use jwt::JwtError;
pub use jwt::SecretKey;
pub use jwt::TokenIssuer;
pub use jwt::TokenVerifier;
pub use password::PasswordError;
pub use password::PasswordHasher;
