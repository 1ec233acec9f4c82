//! In-memory repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use userstore_core::storage::{RepositoryError, Result, UserRepository};
use userstore_core::user::{User, UserChanges};

/// In-memory storage backend for testing.
///
/// Users are kept in insertion order so scans are deterministic.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    users: Arc<RwLock<Vec<User>>>,
    failure: Option<RepositoryError>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every operation fails with `error`.
    pub fn failing(error: RepositoryError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    fn check(&self) -> Result<()> {
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository {
    async fn get_user(&self, uuid: Uuid) -> Result<Option<User>> {
        self.check()?;
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.uuid == uuid).cloned())
    }

    async fn put_user(&self, user: &User) -> Result<()> {
        self.check()?;
        let mut users = self.users.write().await;
        match users.iter_mut().find(|u| u.uuid == user.uuid) {
            Some(existing) => *existing = user.clone(),
            None => users.push(user.clone()),
        }
        Ok(())
    }

    async fn scan_users(&self) -> Result<Vec<User>> {
        self.check()?;
        Ok(self.users.read().await.clone())
    }

    async fn update_user(&self, uuid: Uuid, changes: &UserChanges) -> Result<User> {
        self.check()?;
        let mut users = self.users.write().await;
        let user = users
            .iter_mut()
            .find(|u| u.uuid == uuid)
            .ok_or_else(|| RepositoryError::user_not_found(uuid))?;
        changes.apply_to(user);
        Ok(user.clone())
    }

    async fn delete_user(&self, uuid: Uuid) -> Result<()> {
        self.check()?;
        self.users.write().await.retain(|u| u.uuid != uuid);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use userstore_core::user::UpdateUserRequest;

    #[tokio::test]
    async fn test_put_and_get() {
        let repo = InMemoryRepository::new();
        let user = User::new("John", "john@example.com");

        repo.put_user(&user).await.unwrap();

        assert_eq!(repo.get_user(user.uuid).await.unwrap(), Some(user));
    }

    #[tokio::test]
    async fn test_get_nonexistent() {
        let repo = InMemoryRepository::new();
        assert!(repo.get_user(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_scan_keeps_insertion_order() {
        let repo = InMemoryRepository::new();
        let first = User::new("First", "first@example.com");
        let second = User::new("Second", "second@example.com");

        repo.put_user(&first).await.unwrap();
        repo.put_user(&second).await.unwrap();

        assert_eq!(repo.scan_users().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn test_update_merges_changes() {
        let repo = InMemoryRepository::new();
        let user = User::new("John", "john@example.com");
        repo.put_user(&user).await.unwrap();

        let changes = UpdateUserRequest::new()
            .with_email("johnny@example.com")
            .into_changes()
            .unwrap();
        let updated = repo.update_user(user.uuid, &changes).await.unwrap();

        assert_eq!(updated.name, "John");
        assert_eq!(updated.email, "johnny@example.com");
        assert_eq!(repo.get_user(user.uuid).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_nonexistent() {
        let repo = InMemoryRepository::new();
        let uuid = Uuid::new_v4();
        let changes = UpdateUserRequest::new().with_name("X").into_changes().unwrap();

        assert_eq!(
            repo.update_user(uuid, &changes).await.unwrap_err(),
            RepositoryError::user_not_found(uuid)
        );
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryRepository::new();
        let user = User::new("John", "john@example.com");
        repo.put_user(&user).await.unwrap();

        repo.delete_user(user.uuid).await.unwrap();

        assert!(repo.get_user(user.uuid).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_failing_repository() {
        let repo = InMemoryRepository::failing(RepositoryError::Store("boom".to_string()));

        assert_eq!(
            repo.scan_users().await.unwrap_err(),
            RepositoryError::Store("boom".to_string())
        );
    }
}
