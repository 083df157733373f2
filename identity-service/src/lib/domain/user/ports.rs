use async_trait::async_trait;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::UpdateUserRecord;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Create a new local user.
    ///
    /// The username has already been validated at the boundary; the
    /// password is hashed before the store is touched. Created users are
    /// never built-in and always carry the Standard role.
    ///
    /// # Errors
    /// * `DuplicateUser` - Username is already taken
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError>;

    /// Retrieve a user by username.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    async fn get_user(&self, username: &Username) -> Result<User, UserError>;

    /// Retrieve all users, ordered ascending by username.
    async fn list_users(&self) -> Result<Vec<User>, UserError>;

    /// Update an existing user with optional fields.
    ///
    /// Omitted fields stay unchanged; a supplied password is hashed before
    /// storage. The whole patch is applied atomically.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    async fn update_user(
        &self,
        username: &Username,
        command: UpdateUserCommand,
    ) -> Result<User, UserError>;

    /// Delete an existing user.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `BuiltinUserProtected` - The account is a built-in identity
    async fn delete_user(&self, username: &Username) -> Result<(), UserError>;

    /// Validate credentials and mint a session token.
    ///
    /// Absent user, disabled account, and password mismatch all collapse to
    /// the same `InvalidCredentials` outcome so callers cannot probe which
    /// usernames exist.
    async fn login(&self, username: &str, password: &str) -> Result<String, UserError>;
}

/// Persistence operations for user records.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// Duplicate check and insert happen atomically.
    ///
    /// # Errors
    /// * `DuplicateUser` - Username is already taken
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve a user by username (None if not found).
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;

    /// Retrieve all users, ordered ascending by username.
    async fn list_all(&self) -> Result<Vec<User>, UserError>;

    /// Apply a field patch to an existing user, all-or-nothing.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    async fn update(
        &self,
        username: &Username,
        record: UpdateUserRecord,
    ) -> Result<User, UserError>;

    /// Remove a user.
    ///
    /// Built-in identities are structurally protected here, independent of
    /// any caller-side policy decision.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `BuiltinUserProtected` - The account is a built-in identity
    async fn delete(&self, username: &Username) -> Result<(), UserError>;
}
