use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use crate::domain::user::models::Username;
use crate::domain::user::policy;
use crate::domain::user::policy::Caller;
use crate::domain::user::policy::UserAction;
use crate::inbound::http::router::AppState;
use crate::user::ports::UserServicePort;

pub async fn delete_user(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Path(username): Path<String>,
) -> Result<StatusCode, ApiError> {
    policy::authorize(&caller, UserAction::Delete { target: &username })?;

    let username = Username::new(username).map_err(|_| ApiError::NotFound)?;

    // Built-in protection is enforced in the store, not short-circuited here.
    state
        .user_service
        .delete_user(&username)
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}
