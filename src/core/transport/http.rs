//! Blocking HTTP transport on top of reqwest

use super::{Transport, TransportError};
use crate::core::request::{HttpMethod, Params, RequestDescriptor};
use bytes::Bytes;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Connection settings for [`HttpTransport`]
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout_secs: u64,
    pub pool_size: usize,
    pub keepalive_secs: u64,
    pub user_agent: String,
}

impl TransportConfig {
    pub const TIMEOUT_SECS: u64 = 60;
    pub const POOL_SIZE: usize = 10;
    pub const KEEPALIVE_SECS: u64 = 90;
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout_secs: Self::TIMEOUT_SECS,
            pool_size: Self::POOL_SIZE,
            keepalive_secs: Self::KEEPALIVE_SECS,
            user_agent: format!("{}/{}", crate::NAME, crate::VERSION),
        }
    }
}

/// Raw response from the service
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: Bytes,
}

impl ApiResponse {
    pub fn json<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_slice(&self.body)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Default [`Transport`] backed by a pooled `reqwest::blocking::Client`.
///
/// Construct it once and hand it to [`ApiClient`](crate::ApiClient); the
/// connection pool is reused across calls.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, TransportError> {
        Self::with_config(TransportConfig::default())
    }

    pub fn with_config(config: TransportConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_idle_timeout(Duration::from_secs(config.keepalive_secs))
            .pool_max_idle_per_host(config.pool_size)
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| {
                TransportError::InvalidRequest(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }

    /// Translate a descriptor into a reqwest builder without sending it
    fn prepare(&self, request: RequestDescriptor) -> RequestBuilder {
        let RequestDescriptor {
            method,
            url,
            params,
            body,
            headers,
            auth,
            transport_options,
        } = request;

        let mut builder = match method {
            HttpMethod::GET => self.client.get(&url),
            HttpMethod::POST => self.client.post(&url),
            HttpMethod::PUT => self.client.put(&url),
            HttpMethod::DELETE => self.client.delete(&url),
        };

        // Authorization is derived from `auth` below
        for (name, value) in &headers {
            if name.eq_ignore_ascii_case(AUTHORIZATION.as_str()) {
                debug!("Ignoring caller-supplied Authorization header");
                continue;
            }
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder = match auth.bearer_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder.basic_auth(
                auth.key.as_deref().unwrap_or_default(),
                auth.secret.as_deref(),
            ),
        };

        let pairs = params.as_ref().map(encode_params).unwrap_or_default();
        if method.params_in_query() {
            if !pairs.is_empty() {
                builder = builder.query(&pairs);
            }
        } else if body.is_none() && !pairs.is_empty() {
            builder = builder.form(&pairs);
        }

        if let Some(body) = body {
            builder = builder.body(body);
        }

        for (name, value) in &transport_options {
            match (name.as_str(), value.as_f64()) {
                ("timeout", Some(secs)) if secs > 0.0 => match Duration::try_from_secs_f64(secs) {
                    Ok(timeout) => builder = builder.timeout(timeout),
                    Err(e) => debug!("Ignoring out of range timeout {}: {}", secs, e),
                },
                _ => debug!("Ignoring unsupported transport option: {}", name),
            }
        }

        builder
    }
}

impl Transport for HttpTransport {
    type Response = ApiResponse;

    fn execute(&self, request: RequestDescriptor) -> Result<ApiResponse, TransportError> {
        let response = self.prepare(request).send()?;

        let status = response.status();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.as_str().to_string(), v.to_string())))
            .collect();
        let body = response.bytes()?;

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(ApiResponse {
            status: status.as_u16(),
            headers,
            body,
        })
    }
}

/// Flatten params into string pairs. Arrays become repeated `key[]` entries
/// and nulls are dropped. Keys are sorted for a stable encoding.
fn encode_params(params: &Params) -> Vec<(String, String)> {
    let mut keys: Vec<&String> = params.keys().collect();
    keys.sort();

    let mut pairs = Vec::with_capacity(keys.len());
    for key in keys {
        match &params[key] {
            serde_json::Value::Null => {}
            serde_json::Value::Array(items) => {
                let array_key = format!("{}[]", key);
                pairs.extend(
                    items
                        .iter()
                        .filter_map(scalar_to_string)
                        .map(|v| (array_key.clone(), v)),
                );
            }
            value => {
                if let Some(v) = scalar_to_string(value) {
                    pairs.push((key.clone(), v));
                }
            }
        }
    }
    pairs
}

fn scalar_to_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
