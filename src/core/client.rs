//! Request dispatch
//!
//! [`ApiClient`] resolves per-call overrides against its [`Config`], validates
//! the result, builds the URL and hands a [`RequestDescriptor`] to its
//! transport. Transport failures are returned as-is; there is no retry here.

use super::auth::Credentials;
use super::options::CallOptions;
use super::request::{HttpMethod, Params, RequestDescriptor};
use super::transport::Transport;
use super::url::build_api_url;
use crate::config::{Config, DEFAULT_UPLOAD_PREFIX};
use crate::utils::error::{Error, Result};
use bytes::Bytes;
use serde::Serialize;
use tracing::debug;

/// Segment prepended by [`ApiClient::call_metadata_api`]
pub const METADATA_FIELDS_SEGMENT: &str = "metadata_fields";

const CONTENT_TYPE: &str = "Content-Type";
const APPLICATION_JSON: &str = "application/json";

/// Dispatches calls to both REST surfaces over an explicitly supplied transport
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    config: Config,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: Config, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Call an endpoint with query or form params
    pub fn call_api<S: AsRef<str>>(
        &self,
        method: HttpMethod,
        segments: &[S],
        params: Params,
        options: CallOptions,
    ) -> Result<T::Response> {
        self.dispatch(method, segments, Some(params), None, options)
    }

    /// Call an endpoint with a JSON body.
    ///
    /// `Content-Type: application/json` is added to the headers from
    /// `options`; any other header there is kept.
    pub fn call_json_api<S, B>(
        &self,
        method: HttpMethod,
        segments: &[S],
        body: &B,
        mut options: CallOptions,
    ) -> Result<T::Response>
    where
        S: AsRef<str>,
        B: Serialize + ?Sized,
    {
        let data = serde_json::to_vec(body)?;

        options
            .headers
            .retain(|name, _| !name.eq_ignore_ascii_case(CONTENT_TYPE));
        options
            .headers
            .insert(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string());

        self.dispatch(method, segments, None, Some(Bytes::from(data)), options)
    }

    /// JSON call under the `metadata_fields` resource
    pub fn call_metadata_api<S, B>(
        &self,
        method: HttpMethod,
        segments: &[S],
        body: &B,
        options: CallOptions,
    ) -> Result<T::Response>
    where
        S: AsRef<str>,
        B: Serialize + ?Sized,
    {
        let segments: Vec<&str> = std::iter::once(METADATA_FIELDS_SEGMENT)
            .chain(segments.iter().map(AsRef::as_ref))
            .collect();

        self.call_json_api(method, &segments, body, options)
    }

    fn dispatch<S: AsRef<str>>(
        &self,
        method: HttpMethod,
        segments: &[S],
        params: Option<Params>,
        body: Option<Bytes>,
        options: CallOptions,
    ) -> Result<T::Response> {
        let CallOptions {
            upload_prefix,
            cloud_name,
            api_key,
            api_secret,
            oauth_token,
            surface,
            headers,
            transport_options,
        } = options;

        // An explicit empty override means the default base URL, not the config value
        let prefix = match upload_prefix.as_deref() {
            Some("") => DEFAULT_UPLOAD_PREFIX,
            Some(prefix) => prefix,
            None => self.config.upload_prefix_or_default(),
        };

        let cloud_name = cloud_name
            .or_else(|| self.config.cloud_name.clone())
            .unwrap_or_default();
        if cloud_name.is_empty() {
            return Err(Error::MissingCloudName);
        }

        let auth = Credentials::new(
            api_key.or_else(|| self.config.api_key.clone()),
            api_secret.or_else(|| self.config.api_secret.clone()),
            oauth_token.or_else(|| self.config.oauth_token.clone()),
        );
        auth.validate()?;

        let url = build_api_url(
            prefix,
            &cloud_name,
            segments,
            surface,
            &self.config.api_version,
        );
        debug!("Dispatching {} {}", method, url);

        let request = RequestDescriptor {
            method,
            url,
            params,
            body,
            headers,
            auth,
            transport_options,
        };

        Ok(self.transport.execute(request)?)
    }
}
