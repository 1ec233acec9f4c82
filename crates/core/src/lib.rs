//! Core types for userstore.
//!
//! Holds the user entity, request and response payloads, validation, the
//! storage contract and the store connection settings. Nothing in this crate
//! performs I/O; the server, client and xtask crates supply the shell.

pub mod config;
pub mod serde;
pub mod storage;
pub mod user;
