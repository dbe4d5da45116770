use std::sync::Arc;

use auth::JwtError;
use auth::TokenVerifier;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use thiserror::Error;

use super::handlers::ApiError;
use super::handlers::UNAUTHORIZED_MESSAGE;
use crate::domain::user::models::UserId;

/// Extension type to store the authenticated identity in request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub email: String,
}

/// Why the gate refused a request.
///
/// The reason is only logged. Every variant produces the same 401 response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GateRejection {
    #[error("missing header")]
    MissingHeader,

    #[error("malformed header")]
    MalformedHeader,

    #[error("invalid or expired token")]
    InvalidToken(#[source] JwtError),
}

impl IntoResponse for GateRejection {
    fn into_response(self) -> Response {
        ApiError::Unauthorized(UNAUTHORIZED_MESSAGE.to_string()).into_response()
    }
}

/// Middleware that validates bearer tokens and adds the identity to request extensions
pub async fn authenticate(
    State(verifier): State<Arc<TokenVerifier>>,
    mut req: Request,
    next: Next,
) -> Result<Response, GateRejection> {
    let user = authorize(&verifier, req.headers().get(AUTHORIZATION)).map_err(|rejection| {
        match &rejection {
            GateRejection::InvalidToken(cause) => {
                tracing::warn!(reason = %rejection, cause = %cause, "Request rejected")
            }
            _ => tracing::warn!(reason = %rejection, "Request rejected"),
        }
        rejection
    })?;

    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}

/// Run the gate over an `Authorization` header value.
pub fn authorize(
    verifier: &TokenVerifier,
    header: Option<&HeaderValue>,
) -> Result<AuthenticatedUser, GateRejection> {
    let token = extract_bearer_token(header)?;
    let claims = verifier.verify(token).map_err(GateRejection::InvalidToken)?;

    Ok(AuthenticatedUser {
        user_id: UserId(claims.user_id),
        email: claims.email,
    })
}

/// Extract the token from a `Bearer <token>` header.
///
/// The value must be exactly two space-separated parts, the first being
/// `Bearer`.
pub fn extract_bearer_token(header: Option<&HeaderValue>) -> Result<&str, GateRejection> {
    let value = header.ok_or(GateRejection::MissingHeader)?;
    if value.is_empty() {
        return Err(GateRejection::MissingHeader);
    }

    let value = value
        .to_str()
        .map_err(|_| GateRejection::MalformedHeader)?;

    let mut parts = value.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) if !token.is_empty() => Ok(token),
        _ => Err(GateRejection::MalformedHeader),
    }
}
