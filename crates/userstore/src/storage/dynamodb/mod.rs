//! DynamoDB storage backend implementation.
//!
//! One table, one string hash key (`uuid`), one item per user.

mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbRepository;
