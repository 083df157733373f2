use std::fmt;
use std::str::FromStr;

use crate::user::errors::RoleError;
use crate::user::errors::UsernameError;

/// Local user account.
///
/// Keyed by username; the password hash never leaves the domain layer.
#[derive(Debug, Clone)]
pub struct User {
    pub username: Username,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub disabled: bool,
    pub builtin: bool,
    pub role: Role,
}

/// Username value type
///
/// Usernames are the primary key of the user store and immutable after
/// creation. Allow-list: letters, digits, underscore, and hyphen, at most
/// 64 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Username(String);

impl Username {
    const MAX_LENGTH: usize = 64;

    /// Create a new valid username.
    ///
    /// # Arguments
    /// * `username` - Raw username string
    ///
    /// # Errors
    /// * `Empty` - Username is empty
    /// * `TooLong` - Username longer than 64 characters
    /// * `InvalidCharacters` - Contains characters outside the allow-list
    pub fn new(username: String) -> Result<Self, UsernameError> {
        if username.is_empty() {
            return Err(UsernameError::Empty);
        }

        if username.len() > Self::MAX_LENGTH {
            return Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: username.len(),
            });
        }

        if !username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(UsernameError::InvalidCharacters);
        }

        Ok(Self(username))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Authorization tier of a user account.
///
/// Built-in identities carry a fixed role; users created through the API
/// are always Standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Administrator,
    Operator,
    Standard,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Administrator => "administrator",
            Role::Operator => "operator",
            Role::Standard => "standard",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "administrator" => Ok(Role::Administrator),
            "operator" => Ok(Role::Operator),
            "standard" => Ok(Role::Standard),
            other => Err(RoleError::Unknown(other.to_string())),
        }
    }
}

/// Fixed system identities provisioned at process bootstrap.
///
/// Updatable like any other account but structurally protected against
/// deletion for the process lifetime.
pub const BUILTIN_USERS: [(&str, Role); 2] = [
    ("admin", Role::Administrator),
    ("ops", Role::Operator),
];

/// Command to create a new user with a validated username.
#[derive(Debug)]
pub struct CreateUserCommand {
    pub username: Username,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub disabled: bool,
}

/// Command to update an existing user with optional fields.
///
/// All fields are optional to support partial updates; omitted fields are
/// left unchanged. The password, if present, is still plaintext here and is
/// hashed by the service before it reaches the store.
#[derive(Debug, Default)]
pub struct UpdateUserCommand {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password: Option<String>,
    pub disabled: Option<bool>,
}

/// Field patch applied atomically by the repository.
///
/// Unlike `UpdateUserCommand`, the password has already been hashed.
#[derive(Debug, Default)]
pub struct UpdateUserRecord {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password_hash: Option<String>,
    pub disabled: Option<bool>,
}
