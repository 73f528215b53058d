//! Request descriptor handed to the transport

use super::auth::Credentials;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Query or form parameters
pub type Params = HashMap<String, serde_json::Value>;

/// Header map, case preserved as supplied
pub type Headers = HashMap<String, String>;

/// Opaque options only the transport understands
pub type TransportOptions = HashMap<String, serde_json::Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    GET,
    POST,
    PUT,
    DELETE,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::DELETE => "DELETE",
        }
    }

    /// GET and DELETE carry their params in the query string
    pub fn params_in_query(&self) -> bool {
        matches!(self, HttpMethod::GET | HttpMethod::DELETE)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully assembled request, built once per call and consumed by the transport
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: HttpMethod,
    pub url: String,
    pub params: Option<Params>,
    pub body: Option<Bytes>,
    pub headers: Headers,
    pub auth: Credentials,
    pub transport_options: TransportOptions,
}

impl RequestDescriptor {
    /// Look up a header ignoring ASCII case
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Decode the body as JSON, if there is one
    pub fn json_body(&self) -> Option<serde_json::Result<serde_json::Value>> {
        self.body.as_ref().map(|b| serde_json::from_slice(b))
    }
}
