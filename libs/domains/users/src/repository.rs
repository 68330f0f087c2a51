use async_trait::async_trait;

use crate::error::UserResult;
use crate::models::User;

/// Repository trait for User persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users in ascending id order
    async fn get_all(&self) -> UserResult<Vec<User>>;

    async fn get_by_id(&self, id: u64) -> UserResult<Option<User>>;

    /// Find a user by email, ignoring case
    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>>;

    /// Store a new user under a freshly assigned id
    async fn create(&self, user: User) -> UserResult<User>;

    /// Replace the user with the same id. `false` if there is none.
    async fn update(&self, user: User) -> UserResult<bool>;

    /// `false` if there is no such user.
    async fn delete_by_id(&self, id: u64) -> UserResult<bool>;
}
