use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::user::models::User;
use crate::domain::user::policy::AccessDenied;
use crate::user::errors::UserError;

pub mod create_user;
pub mod delete_user;
pub mod get_user;
pub mod list_users;
pub mod login;
pub mod update_user;

/// Successful response: a status code plus a body serialized directly from
/// the payload. No envelope; automated consumers compare bodies byte for
/// byte.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<T>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Client-visible failure.
///
/// NotFound and Unauthorized carry no body at all; the rest render their
/// message as plain text. Internal details stay in the logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    NotFound,
    Unauthorized,
    Forbidden(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Request failed with internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg).into_response(),
        }
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => ApiError::NotFound,
            UserError::InvalidCredentials => ApiError::Unauthorized,
            UserError::InvalidUsername(_)
            | UserError::DuplicateUser(_)
            | UserError::BuiltinUserProtected(_) => ApiError::BadRequest(err.to_string()),
            UserError::Password(_) | UserError::Token(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<AccessDenied> for ApiError {
    fn from(err: AccessDenied) -> Self {
        ApiError::Forbidden(err.to_string())
    }
}

/// Wire shape of a user record.
///
/// Field order is part of the contract; the password hash never appears.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub disable: bool,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.as_str().to_string(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            disable: user.disabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::models::Role;
    use crate::domain::user::models::Username;

    #[test]
    fn test_user_response_exact_shape() {
        let user = User {
            username: Username::new("xxx".to_string()).unwrap(),
            password_hash: "$argon2id$secret".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            disabled: false,
            builtin: false,
            role: Role::Standard,
        };

        let body = serde_json::to_string(&UserResponse::from(&user)).unwrap();
        assert_eq!(
            body,
            r#"{"username":"xxx","first_name":"","last_name":"","disable":false}"#
        );
        assert!(!body.contains("argon2"));
    }
}
