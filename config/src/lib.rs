//! # Configuration
//!
//! Environment-variable configuration for the Notekeep client, following
//! 12-factor app principles.
//!
//! # Environment Variables
//! - `NOTEKEEP_API_URL`: base address of the persistence service
//!   (required; there is no fallback)

use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

pub const API_URL_VAR: &str = "NOTEKEEP_API_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {name}")]
    Missing { name: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub base_url: String,
}

impl Config {
    /// Build a config directly, normalizing the base address the same way
    /// [`from_env`](Self::from_env) does.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Load configuration from environment variables. The base address has
    /// no default: an absent or empty `NOTEKEEP_API_URL` is an error, not
    /// a silent fallback.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(API_URL_VAR) {
            Ok(value) if !value.trim().is_empty() => Ok(Self::new(value.trim())),
            _ => Err(ConfigError::Missing { name: API_URL_VAR }),
        }
    }
}
