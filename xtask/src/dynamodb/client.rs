//! AWS SDK error wrapping and table status lookups (Imperative Shell).

use std::error::Error;
use std::fmt::Debug;

use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::types::TableStatus;
use aws_sdk_dynamodb::Client;

use super::error::{DynamodbError, Result};

/// Wrap an SDK failure without rewording it.
pub fn sdk_error<E, R>(err: SdkError<E, R>) -> DynamodbError
where
    E: Error + 'static,
    R: Debug,
{
    DynamodbError::AwsSdk(DisplayErrorContext(&err).to_string())
}

/// Fetches the current table status.
pub async fn get_table_status(client: &Client, table_name: &str) -> Result<Option<TableStatus>> {
    let response = client
        .describe_table()
        .table_name(table_name)
        .send()
        .await
        .map_err(sdk_error)?;

    Ok(response.table().and_then(|t| t.table_status()).cloned())
}
