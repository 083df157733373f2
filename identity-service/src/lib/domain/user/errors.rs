use thiserror::Error;

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("username must not be empty")]
    Empty,

    #[error("username too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error("only letters, digits, underscore, and hyphen are allowed")]
    InvalidCharacters,
}

/// Error for Role parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoleError {
    #[error("Unknown role: {0}")]
    Unknown(String),
}

/// Top-level error for all user-related operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    // Domain-level errors
    #[error("User not found: {0}")]
    NotFound(String),

    #[error("User {0} already exists")]
    DuplicateUser(String),

    #[error("Built-in user {0} cannot be deleted")]
    BuiltinUserProtected(String),

    /// Deliberately generic: absent user, disabled account, and password
    /// mismatch are indistinguishable to the caller.
    #[error("Invalid credentials")]
    InvalidCredentials,

    // Infrastructure errors
    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] auth::JwtError),
}
