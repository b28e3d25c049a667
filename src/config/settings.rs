//! Runtime settings from environment variables (optionally seeded from `.env`).

use crate::error::ConfigError;
use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://TechGearWebShop.db";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_BODY_LIMIT_BYTES: usize = 64 * 1024;

#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    pub body_limit_bytes: usize,
}

impl Settings {
    /// Read `DATABASE_URL`, `BIND_ADDR`, `DB_MAX_CONNECTIONS`, `BODY_LIMIT_BYTES`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` but with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = bind_raw
            .parse()
            .map_err(|_| ConfigError::Invalid { key: "BIND_ADDR", value: bind_raw.clone() })?;
        let max_connections = parse_or("DB_MAX_CONNECTIONS", lookup("DB_MAX_CONNECTIONS"), DEFAULT_MAX_CONNECTIONS)?;
        let body_limit_bytes = parse_or("BODY_LIMIT_BYTES", lookup("BODY_LIMIT_BYTES"), DEFAULT_BODY_LIMIT_BYTES)?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid { key: "DB_MAX_CONNECTIONS", value: "0".into() });
        }
        Ok(Settings {
            database_url,
            bind_addr,
            max_connections,
            body_limit_bytes,
        })
    }
}

fn parse_or<T: std::str::FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(v) => v.trim().parse().map_err(|_| ConfigError::Invalid { key, value: v }),
    }
}
