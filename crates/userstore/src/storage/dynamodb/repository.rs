//! DynamoDB repository implementation.
//!
//! Implements `UserRepository` from `userstore_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;
use uuid::Uuid;

use userstore_core::config::{create_dynamodb_client, StoreConfig};
use userstore_core::storage::{RepositoryError, Result, UserRepository};
use userstore_core::user::{User, UserChanges};

use super::conversions::{
    item_to_user, update_plan, user_key, user_to_item, ATTR_UUID, CONDITION_EXISTS,
};
use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_scan_error,
    map_update_item_error,
};

/// DynamoDB-based repository implementation.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a repository for the configured profile and table.
    pub async fn from_config(config: &StoreConfig) -> Self {
        let client = create_dynamodb_client(config).await;
        Self::new(client, config.table_name.clone())
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl UserRepository for DynamoDbRepository {
    async fn get_user(&self, uuid: Uuid) -> Result<Option<User>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(user_key(uuid)))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_user(&item)?)),
            None => Ok(None),
        }
    }

    async fn put_user(&self, user: &User) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(user_to_item(user)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn scan_users(&self) -> Result<Vec<User>> {
        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(map_scan_error)?;

        result
            .items
            .unwrap_or_default()
            .iter()
            .map(item_to_user)
            .collect()
    }

    async fn update_user(&self, uuid: Uuid, changes: &UserChanges) -> Result<User> {
        let plan = update_plan(changes);

        let result = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key(ATTR_UUID, AttributeValue::S(uuid.to_string()))
            .update_expression(plan.update_expression)
            .condition_expression(CONDITION_EXISTS)
            .set_expression_attribute_names(Some(plan.names))
            .set_expression_attribute_values(Some(plan.values))
            .return_values(ReturnValue::AllNew)
            .send()
            .await
            .map_err(|e| map_update_item_error(e, uuid))?;

        let attributes = result.attributes.ok_or_else(|| {
            RepositoryError::InvalidData("UpdateItem returned no attributes".to_string())
        })?;

        item_to_user(&attributes)
    }

    async fn delete_user(&self, uuid: Uuid) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(user_key(uuid)))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }
}
