//! Error handling for the dispatch layer
//!
//! Validation failures are raised before any network I/O. Transport failures
//! are carried through untouched.

use crate::core::transport::TransportError;
use thiserror::Error;

/// Result type alias for the dispatch layer
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type
#[derive(Error, Debug)]
pub enum Error {
    /// The resolved cloud name was empty
    #[error("Must supply cloud_name")]
    MissingCloudName,

    /// No oauth token and no api key
    #[error("Must supply api_key")]
    MissingApiKey,

    /// No oauth token, api key present, api secret empty
    #[error("Must supply api_secret")]
    MissingApiSecret,

    /// Failure surfaced by the transport component
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// JSON body encoding errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Chunk size of zero
    #[error("Chunk size must be greater than 0")]
    InvalidChunkSize,

    /// Configuration loading errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// True for the credential and cloud name checks that precede dispatch
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Error::MissingCloudName | Error::MissingApiKey | Error::MissingApiSecret
        )
    }

    pub fn is_transport_error(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// The underlying transport failure, if any
    pub fn transport_error(&self) -> Option<&TransportError> {
        match self {
            Error::Transport(err) => Some(err),
            _ => None,
        }
    }
}
