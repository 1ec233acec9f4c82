use async_trait::async_trait;
use uuid::Uuid;

use crate::user::{User, UserChanges};

use super::Result;

/// Single-table access to stored users, keyed by `uuid`.
///
/// Each method maps to one store operation. Implementations do not retry.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Gets a user by its UUID.
    async fn get_user(&self, uuid: Uuid) -> Result<Option<User>>;

    /// Writes the full item, replacing any item with the same UUID.
    async fn put_user(&self, user: &User) -> Result<()>;

    /// Returns every stored user in store order.
    async fn scan_users(&self) -> Result<Vec<User>>;

    /// Merges `changes` onto an existing user and returns the stored result.
    ///
    /// Returns `RepositoryError::NotFound` when no item has this UUID.
    async fn update_user(&self, uuid: Uuid, changes: &UserChanges) -> Result<User>;

    /// Removes a user. Deleting an absent UUID is not an error.
    async fn delete_user(&self, uuid: Uuid) -> Result<()>;
}
