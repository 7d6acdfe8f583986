//! Service configuration from environment variables

use anyhow::Context;
use std::time::Duration;

/// Service configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub host: String,
    pub port: u16,
    /// Currency code attached to money in responses
    pub currency: String,
    /// Shown in page titles
    pub hotel_name: String,
    pub cache_warm_interval: Duration,
    pub static_dir: String,
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`; only `DATABASE_URL` is required
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        Ok(Self {
            database_url,
            database_max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            currency: lookup("CURRENCY").unwrap_or_else(|| "USD".into()),
            hotel_name: lookup("HOTEL_NAME").unwrap_or_else(|| "Front Desk".into()),
            cache_warm_interval: Duration::from_secs(
                lookup("CACHE_WARM_INTERVAL_SECS")
                    .and_then(|v| v.parse().ok())
                    .filter(|secs| *secs > 0)
                    .unwrap_or(300),
            ),
            static_dir: lookup("STATIC_DIR").unwrap_or_else(|| "static".into()),
        })
    }

    /// Address to bind the HTTP listener to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
