//! Storage backend implementations.
//!
//! Concrete implementations of `userstore_core::storage::UserRepository`.
//! The server always talks to DynamoDB (or an emulator speaking its API);
//! the in-memory backend only exists for tests.

pub mod dynamodb;

#[cfg(test)]
pub mod inmemory;

pub use dynamodb::DynamoDbRepository;
