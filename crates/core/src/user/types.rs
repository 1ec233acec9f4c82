use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user as stored in the `users` table.
///
/// `uuid` is the table's hash key and never changes once assigned.
/// `password` only travels between the service and the store; it is skipped
/// whenever a user is serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub uuid: Uuid,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub email_verified_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user with a generated UUID.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            uuid: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            email_verified_at: None,
            password: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets a specific UUID for this user (useful for testing).
    pub fn with_uuid(mut self, uuid: Uuid) -> Self {
        self.uuid = uuid;
        self
    }

    /// Sets the stored password hash.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Marks the email as verified at the given instant.
    pub fn with_email_verified_at(mut self, verified_at: DateTime<Utc>) -> Self {
        self.email_verified_at = Some(verified_at);
        self
    }
}
