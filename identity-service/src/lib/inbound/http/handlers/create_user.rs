use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserResponse;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::Username;
use crate::domain::user::policy;
use crate::domain::user::policy::Caller;
use crate::domain::user::policy::UserAction;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;
use crate::user::ports::UserServicePort;

/// HTTP request body for creating a user (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateUserRequest {
    username: String,
    password: String,
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
    #[serde(default)]
    disable: bool,
}

impl CreateUserRequest {
    fn try_into_command(self) -> Result<CreateUserCommand, UserError> {
        // Username validated before any mutation happens.
        let username = Username::new(self.username)?;

        Ok(CreateUserCommand {
            username,
            password: self.password,
            first_name: self.first_name,
            last_name: self.last_name,
            disabled: self.disable,
        })
    }
}

pub async fn create_user(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Json(body): Json<CreateUserRequest>,
) -> Result<ApiSuccess<UserResponse>, ApiError> {
    policy::authorize(&caller, UserAction::Create)?;

    let command = body.try_into_command()?;

    state
        .user_service
        .create_user(command)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::CREATED, user.into()))
}
