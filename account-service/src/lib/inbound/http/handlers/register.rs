use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::create_user::CreateUserRequest;
use super::login::AuthResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> Result<ApiSuccess<AuthResponseData>, ApiError> {
    let user = state
        .user_service
        .create_user(body.try_into_command()?)
        .await
        .map_err(ApiError::from)?;

    let token = state
        .authenticator
        .issue_token(user.id.as_i64(), user.email.as_str())
        .map_err(|e| ApiError::InternalServerError(format!("Token generation failed: {}", e)))?;

    tracing::info!(user_id = %user.id, "User registered");

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        AuthResponseData {
            user: (&user).into(),
            token,
        },
    )
    .with_message("Registration successful"))
}
