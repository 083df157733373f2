use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::Claims;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::Role;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::UpdateUserRecord;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::domain::user::models::BUILTIN_USERS;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Orchestrates the user store, password hashing, and token issuance.
/// Hashing is CPU-bound and always happens before the repository (and its
/// lock) is involved.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
    token_ttl_hours: i64,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hashing and token issuance
    /// * `token_ttl_hours` - Fixed session token lifetime
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>, token_ttl_hours: i64) -> Self {
        Self {
            repository,
            authenticator,
            token_ttl_hours,
        }
    }

    /// Provision the fixed built-in identities if they are missing.
    ///
    /// Runs before the first request is served. Each built-in starts with
    /// its username as the password; operators are expected to rotate it.
    pub async fn ensure_builtin_users(&self) -> Result<(), UserError> {
        for (name, role) in BUILTIN_USERS {
            let username = Username::new(name.to_string())?;

            if self.repository.find_by_username(&username).await?.is_some() {
                continue;
            }

            let password_hash = self.authenticator.hash_password(name)?;
            let user = User {
                username,
                password_hash,
                first_name: String::new(),
                last_name: String::new(),
                disabled: false,
                builtin: true,
                role,
            };

            match self.repository.create(user).await {
                Ok(_) => {
                    tracing::info!(username = name, role = role.as_str(), "Provisioned built-in user");
                }
                // Lost a bootstrap race; the record exists, which is all we need.
                Err(UserError::DuplicateUser(_)) => {}
                Err(e) => return Err(e),
            }
        }

        Ok(())
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        let password_hash = self.authenticator.hash_password(&command.password)?;

        let user = User {
            username: command.username,
            password_hash,
            first_name: command.first_name,
            last_name: command.last_name,
            disabled: command.disabled,
            builtin: false,
            role: Role::Standard,
        };

        let created = self.repository.create(user).await?;
        tracing::info!(username = %created.username, "Local user created");

        Ok(created)
    }

    async fn get_user(&self, username: &Username) -> Result<User, UserError> {
        self.repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| UserError::NotFound(username.to_string()))
    }

    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.repository.list_all().await
    }

    async fn update_user(
        &self,
        username: &Username,
        command: UpdateUserCommand,
    ) -> Result<User, UserError> {
        let password_hash = match command.password.as_deref() {
            Some(password) => Some(self.authenticator.hash_password(password)?),
            None => None,
        };

        let record = UpdateUserRecord {
            first_name: command.first_name,
            last_name: command.last_name,
            password_hash,
            disabled: command.disabled,
        };

        let updated = self.repository.update(username, record).await?;
        tracing::info!(username = %updated.username, "Local user updated");

        Ok(updated)
    }

    async fn delete_user(&self, username: &Username) -> Result<(), UserError> {
        self.repository.delete(username).await?;
        tracing::info!(username = %username, "Local user deleted");

        Ok(())
    }

    async fn login(&self, username: &str, password: &str) -> Result<String, UserError> {
        // Every failure path below collapses to InvalidCredentials.
        let username = Username::new(username.to_string())
            .map_err(|_| UserError::InvalidCredentials)?;

        let user = self
            .repository
            .find_by_username(&username)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        if user.disabled {
            tracing::warn!(username = %username, outcome = "rejected", "Login attempt for disabled account");
            return Err(UserError::InvalidCredentials);
        }

        let claims = Claims::for_user(
            user.username.as_str(),
            user.role.as_str(),
            self.token_ttl_hours,
        );

        let result = self
            .authenticator
            .authenticate(password, &user.password_hash, &claims)
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => {
                    tracing::warn!(username = %username, outcome = "rejected", "Login attempt with bad password");
                    UserError::InvalidCredentials
                }
                AuthenticationError::PasswordError(err) => UserError::Password(err),
                AuthenticationError::JwtError(err) => UserError::Token(err),
            })?;

        tracing::info!(username = %username, role = user.role.as_str(), "Login succeeded");

        Ok(result.access_token)
    }
}
