use std::str::FromStr;

use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::user::models::Role;
use crate::domain::user::models::Username;
use crate::domain::user::policy::Caller;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;
use crate::user::ports::UserServicePort;

/// Middleware resolving the caller behind a bearer token.
///
/// Verifies signature and expiry, then re-reads the subject's current
/// record: a disabled or deleted subject is rejected here even though the
/// token itself is still structurally valid, and the record's CURRENT role
/// is what authorization later sees. All rejections are 401 with an empty
/// body.
pub async fn resolve_caller(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req)?;

    let claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, path = %req.uri().path(), "Token validation failed");
        StatusCode::UNAUTHORIZED.into_response()
    })?;

    let username = Username::new(claims.sub.clone()).map_err(|_| {
        tracing::warn!(path = %req.uri().path(), "Token subject is not a valid username");
        StatusCode::UNAUTHORIZED.into_response()
    })?;

    let user = state.user_service.get_user(&username).await.map_err(|e| {
        match e {
            UserError::NotFound(_) => {
                tracing::warn!(username = %username, "Token subject no longer exists")
            }
            _ => tracing::error!(username = %username, error = %e, "Failed to resolve token subject"),
        }
        StatusCode::UNAUTHORIZED.into_response()
    })?;

    if user.disabled {
        tracing::warn!(username = %username, "Token subject is disabled");
        return Err(StatusCode::UNAUTHORIZED.into_response());
    }

    // The token's role is a snapshot taken at issuance; the record's
    // current role is what gets authorized.
    if Role::from_str(&claims.role).ok() != Some(user.role) {
        tracing::debug!(
            username = %username,
            token_role = %claims.role,
            current_role = user.role.as_str(),
            "Token role snapshot is stale"
        );
    }

    req.extensions_mut().insert(Caller {
        username: user.username.as_str().to_string(),
        role: user.role,
    });

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| StatusCode::UNAUTHORIZED.into_response())?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| StatusCode::UNAUTHORIZED.into_response())?;

    auth_str
        .strip_prefix("Bearer ")
        .ok_or_else(|| StatusCode::UNAUTHORIZED.into_response())
}
