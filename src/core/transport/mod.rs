//! Transport seam
//!
//! The dispatch layer builds a [`RequestDescriptor`] and hands it to a
//! [`Transport`]. Connection pooling, timeouts and the auth wire scheme all
//! live behind this trait.

mod http;

pub use http::{ApiResponse, HttpTransport, TransportConfig};

use super::request::RequestDescriptor;
use thiserror::Error;

/// Failure reported by a transport
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Non-success HTTP status
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The descriptor could not be turned into a request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Failed to read response: {0}")]
    Decode(String),
}

impl TransportError {
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_builder() {
            Self::InvalidRequest(err.to_string())
        } else if err.is_decode() || err.is_body() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Performs the network I/O for one request.
///
/// Implementations block until the response is available. The response type
/// is opaque to the dispatch layer.
#[cfg_attr(test, mockall::automock(type Response = String;))]
pub trait Transport {
    type Response;

    fn execute(&self, request: RequestDescriptor) -> Result<Self::Response, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    type Response = T::Response;

    fn execute(&self, request: RequestDescriptor) -> Result<Self::Response, TransportError> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    type Response = T::Response;

    fn execute(&self, request: RequestDescriptor) -> Result<Self::Response, TransportError> {
        (**self).execute(request)
    }
}
