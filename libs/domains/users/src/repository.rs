use async_trait::async_trait;
use uuid::Uuid;

use crate::error::UserResult;
use crate::models::{CreateUser, UpdateUser, User};

/// Data access seam for users.
///
/// The MongoDB implementation lives in [`crate::mongodb`]; tests mock this
/// trait.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user and return it with its generated identifier
    async fn create(&self, input: CreateUser) -> UserResult<User>;

    /// Look a user up by identifier
    async fn find_by_id(&self, id: Uuid) -> UserResult<Option<User>>;

    /// Full collection scan, no filtering
    async fn list(&self) -> UserResult<Vec<User>>;

    /// Replace the provided fields of an existing user
    async fn update(&self, id: Uuid, input: UpdateUser) -> UserResult<User>;

    /// Remove a user; fails with `NotPresent` when the id is unknown
    async fn delete(&self, id: Uuid) -> UserResult<()>;

    /// Whether any user already has this email
    async fn exists_by_email(&self, email: &str) -> UserResult<bool>;
}
