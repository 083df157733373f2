//! Authentication infrastructure library
//!
//! Provides the credential and session-token building blocks for the
//! identity service:
//! - Password hashing (Argon2id)
//! - Signed session token issuance and verification
//! - Authentication coordination
//!
//! The service layer owns user records and authorization policy; this crate
//! only knows how to hash secrets and mint/verify tokens.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::{Claims, JwtHandler};
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims::for_user("alice", "standard", 1);
//! let token = handler.encode(&claims).unwrap();
//! let decoded = handler.decode(&token).unwrap();
//! assert_eq!(decoded.sub, "alice");
//! ```
//!
//! ## Complete Login Flow
//! ```
//! use auth::{Authenticator, Claims};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Provisioning: hash the password for storage
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and mint a token carrying the caller's role
//! let claims = Claims::for_user("alice", "standard", 1);
//! let result = auth.authenticate("password123", &hash, &claims).unwrap();
//! assert!(!result.access_token.is_empty());
//!
//! // Later requests: verify the presented token
//! let decoded = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(decoded.role, "standard");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
