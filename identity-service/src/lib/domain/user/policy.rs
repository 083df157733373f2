use thiserror::Error;

use crate::domain::user::models::Role;

/// Resolved identity of the caller on an authenticated request.
///
/// Built by the HTTP middleware from a verified token plus a fresh read of
/// the subject's record; `role` is the record's current role, not the token
/// snapshot.
#[derive(Debug, Clone)]
pub struct Caller {
    pub username: String,
    pub role: Role,
}

/// A user-management operation a caller is requesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction<'a> {
    List,
    Create,
    Read { target: &'a str },
    Update { target: &'a str, touches_disable: bool },
    Delete { target: &'a str },
}

/// Denial verdict; the message is safe to surface to the caller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Access denied: {0}")]
pub struct AccessDenied(pub String);

/// Decide whether `caller` may perform `action`.
///
/// Administrators manage every account. Everyone else is limited to reading
/// and updating their own record, and a self-update may not touch the
/// disable flag. Deleting a built-in identity is not decided here: the
/// store rejects it structurally whatever the verdict, so an administrator's
/// Delete still reaches the store and fails there.
pub fn authorize(caller: &Caller, action: UserAction<'_>) -> Result<(), AccessDenied> {
    if caller.role == Role::Administrator {
        return Ok(());
    }

    match action {
        UserAction::Read { target } if target == caller.username => Ok(()),
        UserAction::Update {
            target,
            touches_disable,
        } if target == caller.username => {
            if touches_disable {
                Err(AccessDenied(
                    "only administrators may change the disable flag".to_string(),
                ))
            } else {
                Ok(())
            }
        }
        _ => Err(AccessDenied(format!(
            "role {} may not perform this operation",
            caller.role
        ))),
    }
}
