//! Connection settings for the user store.
//!
//! One [`StoreConfig`] is resolved at startup and shared by the server and the
//! provisioning tasks. Only the `aws` feature's client builder touches the
//! network.

#[cfg(feature = "clap")]
mod args;
#[cfg(feature = "aws")]
mod client;

#[cfg(feature = "clap")]
pub use args::StoreArgs;
#[cfg(feature = "aws")]
pub use client::create_dynamodb_client;

use std::fmt;

use thiserror::Error;

/// Table holding users when no other name is configured.
pub const DEFAULT_TABLE_NAME: &str = "users";
/// Region used when none is configured.
pub const DEFAULT_REGION: &str = "us-east-1";
/// Endpoint of a DynamoDB Local instance on its default port.
pub const DEFAULT_LOCAL_ENDPOINT: &str = "http://localhost:8000";
/// Placeholder key used against the local emulator.
pub const LOCAL_ACCESS_KEY_ID: &str = "local";
/// Placeholder secret used against the local emulator.
pub const LOCAL_SECRET_ACCESS_KEY: &str = "local";

/// Which store the process talks to. Chosen once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum StoreProfile {
    /// Amazon DynamoDB with real credentials.
    Aws,
    /// DynamoDB Local or any other emulator reachable over HTTP.
    #[default]
    Local,
}

impl fmt::Display for StoreProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreProfile::Aws => write!(f, "aws"),
            StoreProfile::Local => write!(f, "local"),
        }
    }
}

/// Static access keys.
#[derive(Clone, PartialEq, Eq)]
pub struct StoreCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
}

impl StoreCredentials {
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
        }
    }
}

impl fmt::Debug for StoreCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .finish()
    }
}

/// Errors raised while resolving a store configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreConfigError {
    #[error("an access key id was given without a secret access key")]
    MissingSecretAccessKey,
    #[error("a secret access key was given without an access key id")]
    MissingAccessKeyId,
}

/// Everything needed to reach the users table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub profile: StoreProfile,
    pub table_name: String,
    pub region: String,
    /// Endpoint override. `None` lets the SDK resolve the regional endpoint.
    pub endpoint_url: Option<String>,
    /// Static keys. `None` falls back to the SDK's default credential chain.
    pub credentials: Option<StoreCredentials>,
    pub use_path_style_endpoint: bool,
}

impl StoreConfig {
    /// Settings for Amazon DynamoDB.
    pub fn aws() -> Self {
        Self {
            profile: StoreProfile::Aws,
            table_name: DEFAULT_TABLE_NAME.to_string(),
            region: DEFAULT_REGION.to_string(),
            endpoint_url: None,
            credentials: None,
            use_path_style_endpoint: false,
        }
    }

    /// Settings for a local emulator on its default port.
    pub fn local() -> Self {
        Self {
            profile: StoreProfile::Local,
            table_name: DEFAULT_TABLE_NAME.to_string(),
            region: DEFAULT_REGION.to_string(),
            endpoint_url: Some(DEFAULT_LOCAL_ENDPOINT.to_string()),
            credentials: Some(StoreCredentials::new(
                LOCAL_ACCESS_KEY_ID,
                LOCAL_SECRET_ACCESS_KEY,
            )),
            use_path_style_endpoint: true,
        }
    }

    pub fn for_profile(profile: StoreProfile) -> Self {
        match profile {
            StoreProfile::Aws => Self::aws(),
            StoreProfile::Local => Self::local(),
        }
    }

    pub fn with_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = table_name.into();
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    pub fn with_credentials(mut self, credentials: StoreCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn with_path_style_endpoint(mut self, enabled: bool) -> Self {
        self.use_path_style_endpoint = enabled;
        self
    }

    /// Short human-readable description of where requests go, for logs.
    pub fn target_display(&self) -> String {
        let endpoint = self.endpoint_url.as_deref().unwrap_or("default endpoint");
        let style = if self.use_path_style_endpoint {
            ", path-style"
        } else {
            ""
        };
        format!(
            "{} table '{}' in {} ({}{})",
            self.profile, self.table_name, self.region, endpoint, style
        )
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::for_profile(StoreProfile::default())
    }
}
