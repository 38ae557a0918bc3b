//! Environment-driven API configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const BIND_ADDR_ENV: &str = "CATALOG_BIND_ADDR";
pub const SEED_PATH_ENV: &str = "CATALOG_SEED_PATH";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:18085";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidBindAddr { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// Optional JSON seed for the in-memory repository.
    pub seed_path: Option<PathBuf>,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests pass a map here).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = match lookup(BIND_ADDR_ENV) {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidBindAddr {
                var: BIND_ADDR_ENV,
                value: raw,
            })?,
            None => default_bind_addr(),
        };

        let seed_path = lookup(SEED_PATH_ENV)
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        Ok(Self { bind_addr, seed_path })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            seed_path: None,
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 18085))
}
