//! API response payloads for user operations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::UserError;
use super::types::User;

/// Response carrying a message and the affected user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub message: String,
    pub user: User,
}

impl UserResponse {
    pub fn created(user: User) -> Self {
        Self {
            message: "User created successfully".to_string(),
            user,
        }
    }

    pub fn updated(user: User) -> Self {
        Self {
            message: "User updated successfully".to_string(),
            user,
        }
    }
}

/// Response carrying only a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn deleted() -> Self {
        Self::new("User deleted successfully")
    }
}

/// Body of a 422 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub message: String,
    pub errors: BTreeMap<String, Vec<String>>,
}

impl From<&UserError> for ValidationErrorResponse {
    fn from(err: &UserError) -> Self {
        Self {
            message: err.to_string(),
            errors: err.field_errors(),
        }
    }
}
