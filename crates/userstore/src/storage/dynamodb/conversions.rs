//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and users.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, Utc};
use userstore_core::storage::RepositoryError;
use userstore_core::user::{User, UserChanges};
use uuid::Uuid;

pub const ATTR_UUID: &str = "uuid";
pub const ATTR_NAME: &str = "name";
pub const ATTR_EMAIL: &str = "email";
pub const ATTR_EMAIL_VERIFIED_AT: &str = "email_verified_at";
pub const ATTR_PASSWORD: &str = "password";
pub const ATTR_CREATED_AT: &str = "created_at";
pub const ATTR_UPDATED_AT: &str = "updated_at";

/// Guard for updates: only touch items that already exist.
pub const CONDITION_EXISTS: &str = "attribute_exists(#uuid)";

/// Primary key map for a user.
pub fn user_key(uuid: Uuid) -> HashMap<String, AttributeValue> {
    HashMap::from([(ATTR_UUID.to_string(), AttributeValue::S(uuid.to_string()))])
}

/// Convert a User to a DynamoDB item. Optional fields are left out when unset.
pub fn user_to_item(user: &User) -> HashMap<String, AttributeValue> {
    let mut item = user_key(user.uuid);

    item.insert(ATTR_NAME.to_string(), AttributeValue::S(user.name.clone()));
    item.insert(ATTR_EMAIL.to_string(), AttributeValue::S(user.email.clone()));
    if let Some(verified_at) = user.email_verified_at {
        item.insert(
            ATTR_EMAIL_VERIFIED_AT.to_string(),
            AttributeValue::S(verified_at.to_rfc3339()),
        );
    }
    if let Some(password) = &user.password {
        item.insert(
            ATTR_PASSWORD.to_string(),
            AttributeValue::S(password.clone()),
        );
    }
    item.insert(
        ATTR_CREATED_AT.to_string(),
        AttributeValue::S(user.created_at.to_rfc3339()),
    );
    item.insert(
        ATTR_UPDATED_AT.to_string(),
        AttributeValue::S(user.updated_at.to_rfc3339()),
    );

    item
}

/// Convert a DynamoDB item to a User.
pub fn item_to_user(item: &HashMap<String, AttributeValue>) -> Result<User, RepositoryError> {
    Ok(User {
        uuid: get_uuid(item, ATTR_UUID)?,
        name: get_string(item, ATTR_NAME)?,
        email: get_string(item, ATTR_EMAIL)?,
        email_verified_at: get_optional_datetime(item, ATTR_EMAIL_VERIFIED_AT)?,
        password: get_optional_string(item, ATTR_PASSWORD),
        created_at: get_datetime(item, ATTR_CREATED_AT)?,
        updated_at: get_datetime(item, ATTR_UPDATED_AT)?,
    })
}

/// The pieces of an UpdateItem request built from a set of changes.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdatePlan {
    pub update_expression: String,
    pub names: HashMap<String, String>,
    pub values: HashMap<String, AttributeValue>,
}

/// Build a `SET` expression for the supplied attributes plus `updated_at`.
///
/// Every attribute goes through a `#name` placeholder since `name` is a
/// DynamoDB reserved word. `#uuid` is always present for [`CONDITION_EXISTS`].
pub fn update_plan(changes: &UserChanges) -> UpdatePlan {
    let mut assignments = Vec::new();
    let mut names = HashMap::from([("#uuid".to_string(), ATTR_UUID.to_string())]);
    let mut values = HashMap::new();

    let mut set = |attr: &str, value: AttributeValue| {
        assignments.push(format!("#{attr} = :{attr}"));
        names.insert(format!("#{attr}"), attr.to_string());
        values.insert(format!(":{attr}"), value);
    };

    if let Some(name) = &changes.name {
        set(ATTR_NAME, AttributeValue::S(name.clone()));
    }
    if let Some(email) = &changes.email {
        set(ATTR_EMAIL, AttributeValue::S(email.clone()));
    }
    set(
        ATTR_UPDATED_AT,
        AttributeValue::S(changes.updated_at.to_rfc3339()),
    );

    UpdatePlan {
        update_expression: format!("SET {}", assignments.join(", ")),
        names,
        values,
    }
}

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get an optional string attribute.
fn get_optional_string(item: &HashMap<String, AttributeValue>, key: &str) -> Option<String> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
}

/// Get a required UUID attribute.
fn get_uuid(item: &HashMap<String, AttributeValue>, key: &str) -> Result<Uuid, RepositoryError> {
    let s = get_string(item, key)?;
    Uuid::parse_str(&s)
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid UUID {}: {}", key, e)))
}

fn parse_datetime(key: &str, s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid datetime {}: {}", key, e)))
}

/// Get a required datetime attribute (RFC 3339 format).
fn get_datetime(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<DateTime<Utc>, RepositoryError> {
    parse_datetime(key, &get_string(item, key)?)
}

fn get_optional_datetime(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<Option<DateTime<Utc>>, RepositoryError> {
    get_optional_string(item, key)
        .map(|s| parse_datetime(key, &s))
        .transpose()
}
