//! Mock server settings, read from the environment.

use std::env;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ACCESS_KEY: &str = "test-key";

#[derive(Debug, Clone)]
pub struct MockConfig {
    pub port: u16,
    /// The only key `/v1/news` accepts.
    pub access_key: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be a valid port number, got {0:?}")]
    InvalidPort(String),
}

impl MockConfig {
    /// Read `PORT` and `MOCK_ACCESS_KEY`, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            port: parse_port(env::var("PORT").ok())?,
            access_key: env::var("MOCK_ACCESS_KEY")
                .unwrap_or_else(|_| DEFAULT_ACCESS_KEY.to_string()),
        })
    }
}

fn parse_port(raw: Option<String>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw)),
    }
}
