use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

use crate::error::UserResult;
use crate::models::User;
use crate::repository::UserRepository;

/// In-process user store with never-reused, monotonically assigned ids.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<BTreeMap<u64, User>>,
    last_id: AtomicU64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let users: BTreeMap<u64, User> = users.into_iter().map(|u| (u.id, u)).collect();
        let last_id = users.keys().next_back().copied().unwrap_or(0);

        Self {
            users: RwLock::new(users),
            last_id: AtomicU64::new(last_id),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_all(&self) -> UserResult<Vec<User>> {
        Ok(self.users.read().await.values().cloned().collect())
    }

    async fn get_by_id(&self, id: u64) -> UserResult<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let email = email.trim();
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn create(&self, mut user: User) -> UserResult<User> {
        let mut users = self.users.write().await;

        user.id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        users.insert(user.id, user.clone());

        tracing::debug!(user_id = user.id, "User stored");
        Ok(user)
    }

    async fn update(&self, user: User) -> UserResult<bool> {
        let mut users = self.users.write().await;

        match users.get_mut(&user.id) {
            Some(existing) => {
                *existing = user;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: u64) -> UserResult<bool> {
        Ok(self.users.write().await.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u64, email: &str) -> User {
        User {
            id,
            name: "Ada".to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_overwrites_caller_id() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(user(50, "ada@example.com")).await.unwrap();
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn test_get_by_email_ignores_case() {
        let repo = InMemoryUserRepository::with_users([user(1, "Ada@Example.com")]);
        assert!(repo.get_by_email("ada@example.COM").await.unwrap().is_some());
        assert!(repo.get_by_email("bob@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_then_create_uses_fresh_id() {
        let repo = InMemoryUserRepository::with_users([user(4, "a@example.com")]);
        assert!(repo.delete_by_id(4).await.unwrap());
        assert_eq!(repo.create(user(0, "b@example.com")).await.unwrap().id, 5);
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let repo = InMemoryUserRepository::new();
        assert!(!repo.update(user(1, "a@example.com")).await.unwrap());
    }
}
