//! User business rules.

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, UpdateUser, User};
use crate::repository::UserRepository;

/// Orchestrates the uniqueness and existence checks around repository
/// operations. Input validation happens at the HTTP boundary; the service
/// receives already-validated payloads.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        self.repository.list().await
    }

    /// Create a user, rejecting a duplicate email.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        if self.repository.exists_by_email(&input.email).await? {
            return Err(UserError::AlreadyPresent);
        }

        self.repository.create(input).await
    }

    /// Update an existing user; a changed email re-checks uniqueness.
    /// Never creates a document for an unknown id.
    #[instrument(skip(self, input))]
    pub async fn update_user(&self, id: Uuid, input: UpdateUser) -> UserResult<User> {
        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotPresent)?;

        if let Some(ref email) = input.email {
            if email != &existing.email && self.repository.exists_by_email(email).await? {
                return Err(UserError::AlreadyPresent);
            }
        }

        self.repository.update(id, input).await
    }

    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: Uuid) -> UserResult<()> {
        self.repository.delete(id).await
    }
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;

    fn create_input() -> CreateUser {
        CreateUser {
            name: "Narayan Prusty".to_string(),
            email: "narayan@example.com".to_string(),
            password: "hunter2hunter2".to_string(),
            phone: 9_876_543_210,
        }
    }

    #[tokio::test]
    async fn create_user_rejects_duplicate_email() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_exists_by_email()
            .returning(|_| Ok(true));

        let service = UserService::new(mock_repo);
        let err = service.create_user(create_input()).await.unwrap_err();

        assert!(matches!(err, UserError::AlreadyPresent));
    }

    #[tokio::test]
    async fn create_user_echoes_input() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_exists_by_email()
            .returning(|_| Ok(false));
        mock_repo
            .expect_create()
            .returning(|input| Ok(User::new(input)));

        let service = UserService::new(mock_repo);
        let user = service.create_user(create_input()).await.unwrap();

        assert_eq!(user.email, "narayan@example.com");
        assert_eq!(user.phone, 9_876_543_210);
    }

    #[tokio::test]
    async fn update_unknown_user_is_not_present_and_creates_nothing() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_find_by_id().returning(|_| Ok(None));
        // No expect_update: reaching the repository update would panic.

        let service = UserService::new(mock_repo);
        let err = service
            .update_user(Uuid::now_v7(), UpdateUser::default())
            .await
            .unwrap_err();

        assert!(matches!(err, UserError::NotPresent));
    }

    #[tokio::test]
    async fn update_rejects_email_taken_by_someone_else() {
        let existing = User::new(create_input());
        let id = existing.id;

        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_find_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        mock_repo
            .expect_exists_by_email()
            .returning(|_| Ok(true));

        let service = UserService::new(mock_repo);
        let err = service
            .update_user(
                id,
                UpdateUser {
                    email: Some("taken@example.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, UserError::AlreadyPresent));
    }

    #[tokio::test]
    async fn update_keeping_own_email_skips_uniqueness_check() {
        let existing = User::new(create_input());
        let id = existing.id;
        let email = existing.email.clone();
        let expected = existing.clone();

        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_find_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        // No expect_exists_by_email: the unchanged email must not be checked.
        mock_repo
            .expect_update()
            .returning(move |_, _| Ok(expected.clone()));

        let service = UserService::new(mock_repo);
        let result = service
            .update_user(
                id,
                UpdateUser {
                    email: Some(email),
                    ..Default::default()
                },
            )
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn delete_unknown_user_is_not_present() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_delete()
            .returning(|_| Err(UserError::NotPresent));

        let service = UserService::new(mock_repo);
        let err = service.delete_user(Uuid::now_v7()).await.unwrap_err();

        assert!(matches!(err, UserError::NotPresent));
    }
}
