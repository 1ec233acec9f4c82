//! Shared application state.
//!
//! Holds the repository handle every handler works through. It is built once
//! at startup and never changes afterwards.

use std::sync::Arc;

use userstore_core::config::StoreConfig;
use userstore_core::storage::UserRepository;

use crate::storage::DynamoDbRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// User repository.
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    /// Creates an AppState around an existing repository.
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Creates AppState backed by DynamoDB for the configured profile.
    pub async fn from_config(config: &StoreConfig) -> Self {
        let repository = DynamoDbRepository::from_config(config).await;

        tracing::info!(
            profile = %config.profile,
            table = %repository.table_name(),
            target = %config.target_display(),
            "Using DynamoDB user store"
        );

        Self::new(Arc::new(repository))
    }
}

#[cfg(test)]
impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(crate::storage::inmemory::InMemoryRepository::new()))
    }
}
