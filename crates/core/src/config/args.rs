use clap::Args;

use super::{StoreConfig, StoreConfigError, StoreCredentials, StoreProfile, DEFAULT_TABLE_NAME};

/// Command-line flags selecting and configuring the store.
///
/// Unset flags keep the defaults of the selected profile.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct StoreArgs {
    /// Store profile to connect to
    #[arg(long, value_enum, default_value_t = StoreProfile::Local, env = "USERSTORE_STORE")]
    pub store: StoreProfile,

    /// Name of the users table
    #[arg(long, default_value = DEFAULT_TABLE_NAME, env = "DYNAMODB_TABLE_NAME")]
    pub table_name: String,

    /// AWS region
    #[arg(long, env = "AWS_REGION")]
    pub region: Option<String>,

    /// Endpoint URL override
    #[arg(long, env = "AWS_ENDPOINT_URL")]
    pub endpoint_url: Option<String>,

    /// Static access key id
    #[arg(long, env = "AWS_ACCESS_KEY_ID")]
    pub access_key_id: Option<String>,

    /// Static secret access key
    #[arg(long, env = "AWS_SECRET_ACCESS_KEY", hide_env_values = true)]
    pub secret_access_key: Option<String>,

    /// Use path-style addressing
    #[arg(
        long,
        env = "DYNAMODB_USE_PATH_STYLE_ENDPOINT",
        value_name = "BOOL",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub path_style: Option<bool>,
}

impl StoreArgs {
    /// Resolve the flags on top of the selected profile's defaults.
    pub fn into_config(self) -> Result<StoreConfig, StoreConfigError> {
        let mut config = StoreConfig::for_profile(self.store).with_table_name(self.table_name);

        if let Some(region) = self.region {
            config = config.with_region(region);
        }
        if let Some(endpoint_url) = self.endpoint_url {
            config = config.with_endpoint_url(endpoint_url);
        }
        match (self.access_key_id, self.secret_access_key) {
            (Some(key), Some(secret)) => {
                config = config.with_credentials(StoreCredentials::new(key, secret));
            }
            (Some(_), None) => return Err(StoreConfigError::MissingSecretAccessKey),
            (None, Some(_)) => return Err(StoreConfigError::MissingAccessKeyId),
            (None, None) => {}
        }
        if let Some(path_style) = self.path_style {
            config = config.with_path_style_endpoint(path_style);
        }

        Ok(config)
    }
}
