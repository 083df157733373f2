use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserResponse;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::Username;
use crate::domain::user::policy;
use crate::domain::user::policy::Caller;
use crate::domain::user::policy::UserAction;
use crate::inbound::http::router::AppState;
use crate::user::ports::UserServicePort;

/// HTTP request body for updating a user (raw JSON)
///
/// Any subset of fields may be supplied; omitted fields are unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password: Option<String>,
    pub disable: Option<bool>,
}

pub async fn update_user(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Path(username): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<ApiSuccess<UserResponse>, ApiError> {
    policy::authorize(
        &caller,
        UserAction::Update {
            target: &username,
            touches_disable: req.disable.is_some(),
        },
    )?;

    let username = Username::new(username).map_err(|_| ApiError::NotFound)?;

    let command = UpdateUserCommand {
        first_name: req.first_name,
        last_name: req.last_name,
        password: req.password,
        disabled: req.disable,
    };

    state
        .user_service
        .update_user(&username, command)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}
