//! userstore_client - CLI client for the userstore API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::UserstoreClient;
pub use error::{ClientError, Result};
