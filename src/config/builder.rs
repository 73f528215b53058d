//! Fluent construction of [`Config`]

use super::Config;

/// Builder for [`Config`]
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    pub fn cloud_name(mut self, cloud_name: &str) -> Self {
        self.config.cloud_name = Some(cloud_name.to_string());
        self
    }

    /// Key/secret pair
    pub fn api_credentials(mut self, api_key: &str, api_secret: &str) -> Self {
        self.config.api_key = Some(api_key.to_string());
        self.config.api_secret = Some(api_secret.to_string());
        self
    }

    pub fn oauth_token(mut self, token: &str) -> Self {
        self.config.oauth_token = Some(token.to_string());
        self
    }

    pub fn upload_prefix(mut self, prefix: &str) -> Self {
        self.config.upload_prefix = Some(prefix.to_string());
        self
    }

    pub fn api_version(mut self, version: &str) -> Self {
        self.config.api_version = version.to_string();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
