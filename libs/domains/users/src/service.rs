//! User Service - Business logic layer

use axum_helpers::Notifications;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::instrument;

use crate::error::UserResult;
use crate::models::{User, UserInput};
use crate::repository::UserRepository;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";

/// User service providing business logic operations
///
/// Email-dependent writes hold `writes` from the lookup to the store.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    writes: Arc<Mutex<()>>,
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            writes: Arc::clone(&self.writes),
        }
    }
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            writes: Arc::new(Mutex::new(())),
        }
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> UserResult<Vec<User>> {
        self.repository.get_all().await
    }

    #[instrument(skip(self, notifications))]
    pub async fn get_by_id(
        &self,
        id: u64,
        notifications: &mut Notifications,
    ) -> UserResult<Option<User>> {
        let user = self.repository.get_by_id(id).await?;
        if user.is_none() {
            notifications.add(not_found(id));
        }
        Ok(user)
    }

    /// Register a new user
    ///
    /// Refused when the name or email is blank, or when the email is already
    /// registered (case-insensitive).
    #[instrument(skip(self, input, notifications))]
    pub async fn create(
        &self,
        input: UserInput,
        notifications: &mut Notifications,
    ) -> UserResult<Option<User>> {
        if !check_required(&input, notifications) {
            return Ok(None);
        }

        let email = input.email().unwrap_or_default();
        let _guard = self.writes.lock().await;
        if self.repository.get_by_email(email).await?.is_some() {
            notifications.add(format!("User with email '{}' is already registered", email));
            return Ok(None);
        }

        let user = self.repository.create(User::from(input)).await?;
        tracing::info!(user_id = user.id, "User created");
        Ok(Some(user))
    }

    /// Replace an existing user
    ///
    /// Moving to an email that belongs to another user is refused.
    #[instrument(skip(self, input, notifications), fields(user_id = input.id))]
    pub async fn update(
        &self,
        input: UserInput,
        notifications: &mut Notifications,
    ) -> UserResult<bool> {
        if !check_required(&input, notifications) {
            return Ok(false);
        }

        let id = input.id;
        let _guard = self.writes.lock().await;
        if self.repository.get_by_id(id).await?.is_none() {
            notifications.add(not_found(id));
            return Ok(false);
        }

        let email = input.email().unwrap_or_default();
        if let Some(owner) = self.repository.get_by_email(email).await? {
            if owner.id != id {
                notifications.add(format!("User with email '{}' is already registered", email));
                return Ok(false);
            }
        }

        let updated = self.repository.update(User::from(input)).await?;
        if !updated {
            notifications.add(format!("Failed to update user {}", id));
        }
        Ok(updated)
    }

    #[instrument(skip(self, notifications))]
    pub async fn delete_by_id(
        &self,
        id: u64,
        notifications: &mut Notifications,
    ) -> UserResult<bool> {
        if self.repository.get_by_id(id).await?.is_none() {
            notifications.add(not_found(id));
            return Ok(false);
        }

        let deleted = self.repository.delete_by_id(id).await?;
        if !deleted {
            notifications.add(format!("Failed to delete user {}", id));
        }
        Ok(deleted)
    }
}

fn check_required(input: &UserInput, notifications: &mut Notifications) -> bool {
    let before = notifications.len();
    if input.name().is_none() {
        notifications.add(NAME_REQUIRED);
    }
    if input.email().is_none() {
        notifications.add(EMAIL_REQUIRED);
    }
    notifications.len() == before
}

fn not_found(id: u64) -> String {
    format!("User {} not found", id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryUserRepository;
    use crate::repository::MockUserRepository;

    fn ada(id: u64) -> User {
        User {
            id,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_new_user() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_get_by_email().times(1).returning(|_| Ok(None));
        mock_repo
            .expect_create()
            .times(1)
            .returning(|u| Ok(User { id: 1, ..u }));

        let service = UserService::new(mock_repo);
        let mut notes = Notifications::new();
        let created = service
            .create(UserInput::new(0, "Ada", "ada@example.com"), &mut notes)
            .await
            .unwrap();

        assert_eq!(created, Some(ada(1)));
        assert!(notes.is_empty());
    }

    #[tokio::test]
    async fn test_create_duplicate_email_is_not_stored() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_get_by_email()
            .times(1)
            .returning(|_| Ok(Some(ada(1))));
        mock_repo.expect_create().never();

        let service = UserService::new(mock_repo);
        let mut notes = Notifications::new();
        let created = service
            .create(UserInput::new(0, "Other Ada", "ADA@example.com"), &mut notes)
            .await
            .unwrap();

        assert!(created.is_none());
        assert!(notes.messages()[0].contains("already registered"));
    }

    #[tokio::test]
    async fn test_create_blank_fields_records_both() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_get_by_email().never();
        mock_repo.expect_create().never();

        let service = UserService::new(mock_repo);
        let mut notes = Notifications::new();
        let created = service
            .create(UserInput::new(0, " ", ""), &mut notes)
            .await
            .unwrap();

        assert!(created.is_none());
        assert_eq!(
            notes.messages(),
            vec![NAME_REQUIRED.to_string(), EMAIL_REQUIRED.to_string()]
        );
    }

    #[tokio::test]
    async fn test_update_keeping_own_email() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_get_by_id().returning(|id| Ok(Some(ada(id))));
        mock_repo
            .expect_get_by_email()
            .returning(|_| Ok(Some(ada(3))));
        mock_repo.expect_update().times(1).returning(|_| Ok(true));

        let service = UserService::new(mock_repo);
        let mut notes = Notifications::new();
        let updated = service
            .update(UserInput::new(3, "Ada L.", "ada@example.com"), &mut notes)
            .await
            .unwrap();

        assert!(updated);
        assert!(notes.is_empty());
    }

    #[tokio::test]
    async fn test_update_to_taken_email() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_get_by_id().returning(|id| Ok(Some(ada(id))));
        mock_repo
            .expect_get_by_email()
            .returning(|_| Ok(Some(ada(1))));
        mock_repo.expect_update().never();

        let service = UserService::new(mock_repo);
        let mut notes = Notifications::new();
        let updated = service
            .update(UserInput::new(2, "Bob", "ada@example.com"), &mut notes)
            .await
            .unwrap();

        assert!(!updated);
        assert!(notes.messages()[0].contains("already registered"));
    }

    #[tokio::test]
    async fn test_concurrent_registrations_share_an_email_once() {
        let service = UserService::new(InMemoryUserRepository::new());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let service = service.clone();
                tokio::spawn(async move {
                    let mut notes = Notifications::new();
                    let input = UserInput::new(0, format!("Ada {}", i), "ada@example.com");
                    service.create(input, &mut notes).await.unwrap()
                })
            })
            .collect();

        let mut created = 0;
        for handle in handles {
            if handle.await.unwrap().is_some() {
                created += 1;
            }
        }

        assert_eq!(created, 1);
        assert_eq!(service.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_unknown_user() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(None));
        mock_repo.expect_delete_by_id().never();

        let service = UserService::new(mock_repo);
        let mut notes = Notifications::new();

        assert!(!service.delete_by_id(8, &mut notes).await.unwrap());
        assert_eq!(notes.messages(), vec!["User 8 not found".to_string()]);
    }
}
