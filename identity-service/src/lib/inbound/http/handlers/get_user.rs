use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::UserResponse;
use crate::domain::user::models::Username;
use crate::domain::user::policy;
use crate::domain::user::policy::Caller;
use crate::domain::user::policy::UserAction;
use crate::inbound::http::router::AppState;
use crate::user::ports::UserServicePort;

pub async fn get_user(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Path(username): Path<String>,
) -> Result<ApiSuccess<UserResponse>, ApiError> {
    policy::authorize(&caller, UserAction::Read { target: &username })?;

    // A name outside the allow-list cannot exist in the store.
    let username = Username::new(username).map_err(|_| ApiError::NotFound)?;

    state
        .user_service
        .get_user(&username)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}
