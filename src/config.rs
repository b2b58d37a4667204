//! Runtime configuration, read from the environment.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `RESOURCES_API_URL` | [`DEFAULT_BASE_URL`] | Collection base URL |
//! | `RESOURCES_REFETCH_ON_MUTATION` | `true` | Re-list after each mutation instead of merging |
//! | `RESOURCES_BACKEND` | `remote` | `remote` or `memory` |
//!
//! The binary loads a `.env` file first (via `dotenvy`), so the same keys can
//! live there.

use crate::clients::DEFAULT_BASE_URL;
use crate::store::MutationStrategy;
use std::str::FromStr;
use thiserror::Error;

pub const API_URL_VAR: &str = "RESOURCES_API_URL";
pub const REFETCH_VAR: &str = "RESOURCES_REFETCH_ON_MUTATION";
pub const BACKEND_VAR: &str = "RESOURCES_BACKEND";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be true or false, got {value:?}")]
    InvalidFlag { key: &'static str, value: String },
    #[error("{key} must be remote or memory, got {value:?}")]
    UnknownBackend { key: &'static str, value: String },
    #[error("{key} must not be empty")]
    Empty { key: &'static str },
}

/// Where the store's records live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// The hosted REST collection.
    #[default]
    Remote,
    /// An in-process collection, seeded with sample records.
    Memory,
}

impl FromStr for Backend {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "remote" | "http" => Ok(Backend::Remote),
            "memory" | "in-memory" => Ok(Backend::Memory),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub refetch_on_mutation: bool,
    pub backend: Backend,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            refetch_on_mutation: true,
            backend: Backend::Remote,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(url) = lookup(API_URL_VAR) {
            let url = url.trim();
            if url.is_empty() {
                return Err(ConfigError::Empty { key: API_URL_VAR });
            }
            config.base_url = url.to_string();
        }

        if let Some(value) = lookup(REFETCH_VAR) {
            config.refetch_on_mutation = parse_flag(REFETCH_VAR, &value)?;
        }

        if let Some(value) = lookup(BACKEND_VAR) {
            config.backend = value.parse().map_err(|_| ConfigError::UnknownBackend {
                key: BACKEND_VAR,
                value,
            })?;
        }

        Ok(config)
    }

    pub fn mutation_strategy(&self) -> MutationStrategy {
        MutationStrategy::from_refetch_flag(self.refetch_on_mutation)
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key,
            value: value.to_string(),
        }),
    }
}
