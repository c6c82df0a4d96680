//! Configuration loaded from environment variables.
//!
//! Every variable is optional. Unset and empty values both fall back to the
//! defaults below.

use sqlx::mysql::MySqlConnectOptions;
use std::env;
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

/// Maximum open connections in the pool
pub const POOL_MAX_CONNECTIONS: u32 = 10;
/// Connections older than this are closed and replaced
pub const POOL_MAX_LIFETIME: Duration = Duration::from_secs(5 * 60);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// HTTP listen port
    pub port: u16,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            database: DatabaseConfig::default(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 3306,
            user: "root".to_string(),
            password: String::new(),
            name: "jones_county_xc".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment (and `.env` if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        Ok(Self {
            port: parse_port(&lookup, "PORT", defaults.port)?,
            database: DatabaseConfig {
                host: var("DB_HOST").unwrap_or(defaults.database.host),
                port: parse_port(&lookup, "DB_PORT", defaults.database.port)?,
                user: var("DB_USER").unwrap_or(defaults.database.user),
                password: var("DB_PASSWORD").unwrap_or(defaults.database.password),
                name: var("DB_NAME").unwrap_or(defaults.database.name),
            },
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
    }
}

fn parse_port<F>(lookup: &F, key: &'static str, default: u16) -> Result<u16, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).filter(|v| !v.is_empty()) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var: key, value }),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}
