//! Per-call configuration overrides

use super::request::{Headers, TransportOptions};
use super::url::ApiSurface;

/// Overrides applied on top of the client's [`Config`](crate::Config) for one call.
///
/// Named fields replace the matching config value when set. Anything the
/// transport should see but this layer does not interpret goes in
/// `transport_options` and is forwarded untouched.
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    pub upload_prefix: Option<String>,
    pub cloud_name: Option<String>,
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    pub oauth_token: Option<String>,
    pub surface: ApiSurface,
    pub headers: Headers,
    pub transport_options: TransportOptions,
}

impl CallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upload_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.upload_prefix = Some(prefix.into());
        self
    }

    pub fn cloud_name(mut self, cloud_name: impl Into<String>) -> Self {
        self.cloud_name = Some(cloud_name.into());
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn api_secret(mut self, api_secret: impl Into<String>) -> Self {
        self.api_secret = Some(api_secret.into());
        self
    }

    pub fn oauth_token(mut self, token: impl Into<String>) -> Self {
        self.oauth_token = Some(token.into());
        self
    }

    pub fn surface(mut self, surface: ApiSurface) -> Self {
        self.surface = surface;
        self
    }

    /// Target the unversioned Media Optimizer surface
    pub fn media_optimizer(self) -> Self {
        self.surface(ApiSurface::MediaOptimizer)
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Add an option for the transport; this layer never reads it
    pub fn transport_option(
        mut self,
        name: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.transport_options.insert(name.into(), value.into());
        self
    }
}
