//! Credential set forwarded with every request

use crate::utils::error::{Error, Result};
use std::fmt;

/// Key/secret pair or oauth token, resolved per call
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub key: Option<String>,
    pub secret: Option<String>,
    pub oauth_token: Option<String>,
}

impl Credentials {
    pub fn new(
        key: Option<String>,
        secret: Option<String>,
        oauth_token: Option<String>,
    ) -> Self {
        Self {
            key,
            secret,
            oauth_token,
        }
    }

    /// Check the credentials are sufficient to authenticate.
    ///
    /// A non-empty oauth token is accepted on its own. Otherwise both the api
    /// key and the api secret must be non-empty, checked in that order.
    pub fn validate(&self) -> Result<()> {
        if is_present(&self.oauth_token) {
            return Ok(());
        }

        if !is_present(&self.key) {
            return Err(Error::MissingApiKey);
        }

        if !is_present(&self.secret) {
            return Err(Error::MissingApiSecret);
        }

        Ok(())
    }

    /// The oauth token, when it takes precedence over key/secret
    pub fn bearer_token(&self) -> Option<&str> {
        self.oauth_token.as_deref().filter(|t| !t.is_empty())
    }
}

fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

// Secrets never reach logs
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &self.key)
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .field("oauth_token", &self.oauth_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
