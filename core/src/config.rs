//! News API settings.
//!
//! Resolved once when the client is built and never refreshed.

use std::env;

use crate::error::ConfigError;

pub const URL_VAR: &str = "NEWS_API_URL";
pub const KEY_VAR: &str = "NEWS_API_KEY";

/// Endpoint and credential for the news API.
#[derive(Clone, PartialEq, Eq)]
pub struct NewsConfig {
    /// Base endpoint, used verbatim (e.g. `http://api.mediastack.com/v1/news`).
    pub url: String,
    /// Sent as the `access_key` query parameter.
    pub key: String,
}

impl NewsConfig {
    pub fn new(url: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            key: key.into(),
        }
    }

    /// Read `NEWS_API_URL` and `NEWS_API_KEY` from the environment.
    ///
    /// Loading a `.env` file is left to the binary or test entry point.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(URL_VAR, KEY_VAR)
    }

    fn from_vars(url_var: &'static str, key_var: &'static str) -> Result<Self, ConfigError> {
        Ok(Self {
            url: required(url_var)?,
            key: required(key_var)?,
        })
    }
}

fn required(var: &'static str) -> Result<String, ConfigError> {
    match env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(var)),
    }
}

// The key is a credential; keep it out of `{:?}` output and logs.
impl std::fmt::Debug for NewsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsConfig")
            .field("url", &self.url)
            .field("key", &"<redacted>")
            .finish()
    }
}
