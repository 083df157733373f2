use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::user::models::UpdateUserRecord;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

/// In-memory user store.
///
/// A single table-wide RwLock serializes writers while readers proceed
/// concurrently. Each mutation runs entirely under the write guard, so
/// updates to the same username are totally ordered and no partial state is
/// ever observable. BTreeMap keys give listings a stable ascending-by-
/// username order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<BTreeMap<String, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;

        if users.contains_key(user.username.as_str()) {
            return Err(UserError::DuplicateUser(user.username.to_string()));
        }

        users.insert(user.username.as_str().to_string(), user.clone());

        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        let users = self.users.read().await;

        Ok(users.get(username.as_str()).cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        let users = self.users.read().await;

        Ok(users.values().cloned().collect())
    }

    async fn update(
        &self,
        username: &Username,
        record: UpdateUserRecord,
    ) -> Result<User, UserError> {
        let mut users = self.users.write().await;

        let user = users
            .get_mut(username.as_str())
            .ok_or_else(|| UserError::NotFound(username.to_string()))?;

        if let Some(first_name) = record.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = record.last_name {
            user.last_name = last_name;
        }
        if let Some(password_hash) = record.password_hash {
            user.password_hash = password_hash;
        }
        if let Some(disabled) = record.disabled {
            user.disabled = disabled;
        }

        Ok(user.clone())
    }

    async fn delete(&self, username: &Username) -> Result<(), UserError> {
        let mut users = self.users.write().await;

        let user = users
            .get(username.as_str())
            .ok_or_else(|| UserError::NotFound(username.to_string()))?;

        if user.builtin {
            return Err(UserError::BuiltinUserProtected(username.to_string()));
        }

        users.remove(username.as_str());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::models::Role;

    fn user(username: &str, builtin: bool) -> User {
        User {
            username: Username::new(username.to_string()).unwrap(),
            password_hash: "$argon2id$test_hash".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            disabled: false,
            builtin,
            role: if builtin {
                Role::Administrator
            } else {
                Role::Standard
            },
        }
    }

    fn username(name: &str) -> Username {
        Username::new(name.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryUserRepository::new();

        repo.create(user("alice", false)).await.unwrap();

        let found = repo.find_by_username(&username("alice")).await.unwrap();
        assert_eq!(found.unwrap().username.as_str(), "alice");

        let missing = repo.find_by_username(&username("bob")).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_create_duplicate_rejected() {
        let repo = InMemoryUserRepository::new();

        repo.create(user("alice", false)).await.unwrap();

        let result = repo.create(user("alice", false)).await;
        assert!(matches!(result, Err(UserError::DuplicateUser(_))));
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_username() {
        let repo = InMemoryUserRepository::new();

        for name in ["charlie", "alice", "bob"] {
            repo.create(user(name, false)).await.unwrap();
        }

        let names: Vec<String> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.username.to_string())
            .collect();
        assert_eq!(names, ["alice", "bob", "charlie"]);
    }

    #[tokio::test]
    async fn test_update_applies_only_supplied_fields() {
        let repo = InMemoryUserRepository::new();

        repo.create(user("alice", false)).await.unwrap();

        let updated = repo
            .update(
                &username("alice"),
                UpdateUserRecord {
                    first_name: Some("Alice".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.first_name, "Alice");
        assert_eq!(updated.last_name, "");
        assert_eq!(updated.password_hash, "$argon2id$test_hash");
        assert!(!updated.disabled);
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let repo = InMemoryUserRepository::new();

        let result = repo
            .update(&username("ghost"), UpdateUserRecord::default())
            .await;
        assert!(matches!(result, Err(UserError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_and_recreate() {
        let repo = InMemoryUserRepository::new();

        repo.create(user("alice", false)).await.unwrap();
        repo.delete(&username("alice")).await.unwrap();

        let result = repo.delete(&username("alice")).await;
        assert!(matches!(result, Err(UserError::NotFound(_))));

        // A deleted username is immediately available again.
        repo.create(user("alice", false)).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_builtin_rejected() {
        let repo = InMemoryUserRepository::new();

        repo.create(user("admin", true)).await.unwrap();

        let result = repo.delete(&username("admin")).await;
        assert!(matches!(result, Err(UserError::BuiltinUserProtected(_))));

        // Still present afterwards.
        let found = repo.find_by_username(&username("admin")).await.unwrap();
        assert!(found.is_some());
    }
}
