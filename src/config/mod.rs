//! Client configuration
//!
//! [`Config`] holds the account-wide defaults every call starts from. It is
//! owned by the [`ApiClient`](crate::ApiClient) that uses it; nothing here is
//! global.

mod builder;
mod loader;

pub use builder::ConfigBuilder;

use crate::utils::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Base URL used when no upload prefix is configured
pub const DEFAULT_UPLOAD_PREFIX: &str = "https://api.cloudinary.com";

/// Version segment of the Admin API
pub const API_VERSION: &str = "v1_1";

/// Account configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_secret: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oauth_token: Option<String>,

    /// Falls back to [`DEFAULT_UPLOAD_PREFIX`] when unset or empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_prefix: Option<String>,

    #[serde(default = "default_api_version")]
    pub api_version: String,
}

fn default_api_version() -> String {
    API_VERSION.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cloud_name: None,
            api_key: None,
            api_secret: None,
            oauth_token: None,
            upload_prefix: None,
            api_version: default_api_version(),
        }
    }
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// The configured upload prefix, or the default base URL
    pub fn upload_prefix_or_default(&self) -> &str {
        self.upload_prefix
            .as_deref()
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_UPLOAD_PREFIX)
    }
}
