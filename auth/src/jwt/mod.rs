pub mod claims;
pub mod errors;
pub mod issuer;
pub mod secret;
pub mod verifier;

pub use claims::Claims;
pub use claims::Identity;
pub use errors::JwtError;
pub use issuer::TokenIssuer;
pub use issuer::DEFAULT_TOKEN_TTL_HOURS;
pub use secret::SecretKey;
pub use verifier::TokenVerifier;
