//! Configuration loading from environment variables

use super::Config;
use crate::utils::error::{Error, Result};
use tracing::debug;
use url::Url;

const CLOUDINARY_URL: &str = "CLOUDINARY_URL";
const CLOUD_NAME: &str = "CLOUDINARY_CLOUD_NAME";
const API_KEY: &str = "CLOUDINARY_API_KEY";
const API_SECRET: &str = "CLOUDINARY_API_SECRET";
const OAUTH_TOKEN: &str = "CLOUDINARY_OAUTH_TOKEN";
const UPLOAD_PREFIX: &str = "CLOUDINARY_UPLOAD_PREFIX";
const API_VERSION: &str = "CLOUDINARY_API_VERSION";

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `CLOUDINARY_URL` is applied first; the individual `CLOUDINARY_*`
    /// variables then override whatever it set.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        debug!("Loading configuration from environment variables");

        let mut config = match lookup(CLOUDINARY_URL).filter(|v| !v.is_empty()) {
            Some(url) => Self::from_cloudinary_url(&url)?,
            None => Self::default(),
        };

        if let Some(cloud_name) = lookup(CLOUD_NAME) {
            config.cloud_name = Some(cloud_name);
        }
        if let Some(api_key) = lookup(API_KEY) {
            config.api_key = Some(api_key);
        }
        if let Some(api_secret) = lookup(API_SECRET) {
            config.api_secret = Some(api_secret);
        }
        if let Some(token) = lookup(OAUTH_TOKEN) {
            config.oauth_token = Some(token);
        }
        if let Some(prefix) = lookup(UPLOAD_PREFIX) {
            config.upload_prefix = Some(prefix);
        }
        if let Some(version) = lookup(API_VERSION).filter(|v| !v.is_empty()) {
            config.api_version = version;
        }

        Ok(config)
    }

    /// Parse `cloudinary://<api_key>:<api_secret>@<cloud_name>`.
    ///
    /// An `upload_prefix` query parameter is honored.
    pub fn from_cloudinary_url(value: &str) -> Result<Self> {
        let url = Url::parse(value)
            .map_err(|e| Error::Config(format!("Invalid {}: {}", CLOUDINARY_URL, e)))?;

        if url.scheme() != "cloudinary" {
            return Err(Error::Config(format!(
                "Invalid {} scheme: expected 'cloudinary', got '{}'",
                CLOUDINARY_URL,
                url.scheme()
            )));
        }

        let cloud_name = url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| Error::Config(format!("{} is missing the cloud name", CLOUDINARY_URL)))?;

        let mut config = Config {
            cloud_name: Some(cloud_name.to_string()),
            api_key: Some(url.username().to_string()).filter(|k| !k.is_empty()),
            api_secret: url.password().map(str::to_string),
            ..Default::default()
        };

        for (name, value) in url.query_pairs() {
            if name == "upload_prefix" {
                config.upload_prefix = Some(value.into_owned());
            }
        }

        Ok(config)
    }
}
