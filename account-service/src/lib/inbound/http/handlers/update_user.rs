use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserResponseData;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserName;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

/// HTTP request body for updating a user (raw JSON)
///
/// Absent or empty fields are left unchanged.
#[derive(Default, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

fn provided(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

impl UpdateUserRequest {
    fn try_into_command(self) -> Result<UpdateUserCommand, UserError> {
        // Validation happens here - errors are automatically converted via #[from]
        let name = provided(self.name).map(UserName::new).transpose()?;
        let email = provided(self.email).map(EmailAddress::new).transpose()?;
        let password = provided(self.password).map(Password::new).transpose()?;

        Ok(UpdateUserCommand {
            name,
            email,
            password,
        })
    }
}

pub async fn update_user(
    State(state): State<AppState>,
    Extension(current_user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<ApiSuccess<UserResponseData>, ApiError> {
    // Parse user ID and request at HTTP boundary - errors automatically converted
    let user_id = UserId::from_string(&id).map_err(UserError::from)?;
    let command = req.try_into_command()?;

    let user = state
        .user_service
        .update_user(&user_id, command)
        .await
        .map_err(ApiError::from)?;

    tracing::info!(actor = %current_user.user_id, user_id = %user.id, "User updated by operator");

    Ok(ApiSuccess::new(StatusCode::OK, (&user).into()).with_message("User updated"))
}
