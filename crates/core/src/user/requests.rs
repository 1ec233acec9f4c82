//! API request types for user operations.
//!
//! These types are shared between the server and client. Validation happens
//! here, before anything reaches the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use super::error::UserError;
use super::types::User;
use crate::serde::StringField;

/// Request payload for creating a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(from = "CreateUserPayload")]
pub struct CreateUserRequest {
    #[validate(required(message = "The name field is required."))]
    pub name: Option<String>,
    #[validate(
        required(message = "The email field is required."),
        email(message = "The email field must be a valid email address.")
    )]
    pub email: Option<String>,
    /// Fields that arrived as a non-string JSON value.
    #[serde(skip)]
    mistyped: Vec<&'static str>,
}

#[derive(Deserialize)]
struct CreateUserPayload {
    #[serde(default)]
    name: StringField,
    #[serde(default)]
    email: StringField,
}

impl From<CreateUserPayload> for CreateUserRequest {
    fn from(payload: CreateUserPayload) -> Self {
        Self {
            mistyped: mistyped_fields(&[("name", &payload.name), ("email", &payload.email)]),
            name: payload.name.into_option(),
            email: payload.email.into_option(),
        }
    }
}

impl CreateUserRequest {
    /// Create a request with both fields set.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            mistyped: Vec::new(),
        }
    }

    /// Validate the request and build a new user with a fresh UUID.
    pub fn into_user(self) -> Result<User, UserError> {
        check(&self, &self.mistyped)?;
        Ok(User::new(
            self.name.unwrap_or_default(),
            self.email.unwrap_or_default(),
        ))
    }
}

/// Request payload for updating a user. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(from = "UpdateUserPayload")]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "The email field must be a valid email address."))]
    pub email: Option<String>,
    #[serde(skip)]
    mistyped: Vec<&'static str>,
}

#[derive(Deserialize)]
struct UpdateUserPayload {
    #[serde(default)]
    name: StringField,
    #[serde(default)]
    email: StringField,
}

impl From<UpdateUserPayload> for UpdateUserRequest {
    fn from(payload: UpdateUserPayload) -> Self {
        Self {
            mistyped: mistyped_fields(&[("name", &payload.name), ("email", &payload.email)]),
            name: payload.name.into_option(),
            email: payload.email.into_option(),
        }
    }
}

fn mistyped_fields(fields: &[(&'static str, &StringField)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, value)| value.is_wrong_type())
        .map(|(field, _)| *field)
        .collect()
}

/// Run the derived rules, then replace the errors of every mistyped field
/// with a single type error.
fn check(request: &impl Validate, mistyped: &[&'static str]) -> Result<(), UserError> {
    let mut errors = match request.validate() {
        Ok(()) => ValidationErrors::new(),
        Err(errors) => errors,
    };

    for &field in mistyped {
        errors.errors_mut().remove(field);
        let message = format!("The {field} field must be a string.");
        errors.add(field, ValidationError::new("string").with_message(message.into()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(UserError::from(errors))
    }
}

impl UpdateUserRequest {
    /// Create an empty update request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the user name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the user email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Validate the request and turn it into a set of attribute changes.
    pub fn into_changes(self) -> Result<UserChanges, UserError> {
        check(&self, &self.mistyped)?;
        Ok(UserChanges {
            name: self.name,
            email: self.email,
            updated_at: Utc::now(),
        })
    }
}

/// Validated attribute changes to merge onto a stored user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl UserChanges {
    /// Returns true when no user attribute would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }

    /// Merge the changes onto an existing user. `uuid` is never touched.
    pub fn apply_to(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        user.updated_at = self.updated_at;
    }
}
