use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::config::{Credentials, Region};
use aws_sdk_dynamodb::Client;

use super::StoreConfig;

/// Build a DynamoDB client for the configured profile.
///
/// Static keys are used when present, otherwise the SDK's default
/// credential chain resolves them. The SDK has no path-style switch for
/// DynamoDB, so `use_path_style_endpoint` only shows up in logs.
pub async fn create_dynamodb_client(config: &StoreConfig) -> Client {
    let mut loader =
        aws_config::defaults(BehaviorVersion::latest()).region(Region::new(config.region.clone()));

    if let Some(endpoint_url) = &config.endpoint_url {
        loader = loader.endpoint_url(endpoint_url);
    }

    if let Some(credentials) = &config.credentials {
        loader = loader.credentials_provider(Credentials::new(
            &credentials.access_key_id,
            &credentials.secret_access_key,
            None,
            None,
            "userstore",
        ));
    }

    let sdk_config = loader.load().await;
    Client::new(&sdk_config)
}
