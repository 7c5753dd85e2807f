use std::env;
use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
pub const DEFAULT_WORKERS: usize = 8;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("ATLAS_API_URL is not a valid URL: {0}")]
    ApiUrl(String),
    #[error("ATLAS_BIND is not a socket address: {0}")]
    Bind(String),
    #[error("ATLAS_WORKERS must be a positive integer: {0}")]
    Workers(String),
}

/// Runtime settings, read from `ATLAS_*` variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_url: Url,
    pub bind: SocketAddr,
    pub workers: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any variable source. Unset or blank variables
    /// take their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let api_url = var("ATLAS_API_URL", DEFAULT_API_URL);
        let api_url = Url::parse(&api_url)
            .ok()
            .filter(|u| !u.cannot_be_a_base())
            .ok_or(ConfigError::ApiUrl(api_url))?;

        let bind = var("ATLAS_BIND", DEFAULT_BIND);
        let bind = bind.parse().map_err(|_| ConfigError::Bind(bind))?;

        let workers = var("ATLAS_WORKERS", &DEFAULT_WORKERS.to_string());
        let workers = workers
            .parse::<usize>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or(ConfigError::Workers(workers))?;

        Ok(Self {
            api_url,
            bind,
            workers,
        })
    }
}
