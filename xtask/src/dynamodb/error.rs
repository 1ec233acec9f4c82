//! Error types for DynamoDB operations.

use thiserror::Error;
use userstore_core::config::StoreConfigError;

/// Result type alias for dynamodb module.
pub type Result<T> = std::result::Result<T, DynamodbError>;

/// Errors that can occur during DynamoDB operations.
#[derive(Error, Debug)]
pub enum DynamodbError {
    /// Failure reported by the SDK or the service, message kept as given.
    #[error("AWS SDK error: {0}")]
    AwsSdk(String),

    #[error("Invalid store configuration: {0}")]
    Config(#[from] StoreConfigError),

    #[error("Operation cancelled by user")]
    UserCancelled,

    #[error("Prompt failed: {0}")]
    Prompt(String),

    #[error("Timeout waiting for table to become active")]
    TableActivationTimeout,
}
