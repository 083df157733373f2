use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::UserResponse;
use crate::domain::user::policy;
use crate::domain::user::policy::Caller;
use crate::domain::user::policy::UserAction;
use crate::inbound::http::router::AppState;
use crate::user::ports::UserServicePort;

pub async fn list_users(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
) -> Result<ApiSuccess<Vec<UserResponse>>, ApiError> {
    policy::authorize(&caller, UserAction::List)?;

    state
        .user_service
        .list_users()
        .await
        .map_err(ApiError::from)
        .map(|users| {
            ApiSuccess::new(
                StatusCode::OK,
                users.iter().map(UserResponse::from).collect(),
            )
        })
}
