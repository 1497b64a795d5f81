//! Service configuration
//!
//! Values come from the process environment (optionally seeded from a `.env`
//! file). Parsing goes through a lookup function so the same code can be fed
//! from a map in tests.

use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
const DEFAULT_SERVER_PORT: u16 = 8080;
const DEFAULT_POOL_SIZE: u32 = 10;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("variabel {0} belum diatur")]
    Missing(&'static str),
    #[error("nilai {value:?} tidak valid untuk {var}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

/// Connection settings for the entry table
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Connection string handed to diesel
    pub url: String,
    /// Upper bound on pooled connections
    pub pool_size: u32,
    /// How long to wait for a pooled connection, including at startup
    pub connect_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            database: DatabaseConfig::from_lookup(&lookup)?,
            server: ServerConfig::from_lookup(&lookup)?,
        })
    }
}

impl DatabaseConfig {
    fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = match non_empty(lookup, "DATABASE_URL") {
            Some(url) => url,
            None => connection_url(lookup)?,
        };

        let pool_size = parsed(lookup, "DB_POOL_SIZE", DEFAULT_POOL_SIZE)?;
        if pool_size == 0 {
            return Err(ConfigError::Invalid {
                var: "DB_POOL_SIZE",
                value: pool_size.to_string(),
            });
        }

        let timeout_secs = parsed(
            lookup,
            "DB_CONNECT_TIMEOUT_SECS",
            DEFAULT_CONNECT_TIMEOUT_SECS,
        )?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                var: "DB_CONNECT_TIMEOUT_SECS",
                value: timeout_secs.to_string(),
            });
        }

        Ok(Self {
            url,
            pool_size,
            connect_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl ServerConfig {
    fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: non_empty(lookup, "SERVER_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
            port: parsed(lookup, "SERVER_PORT", DEFAULT_SERVER_PORT)?,
        })
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// MySQL DSN assembled from the individual DB_* variables. DB_PASS may be empty.
#[cfg(feature = "mysql")]
fn connection_url<F>(lookup: &F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let user = required(lookup, "DB_USER")?;
    let pass = lookup("DB_PASS").unwrap_or_default();
    let host = required(lookup, "DB_HOST")?;
    let port = required(lookup, "DB_PORT")?;
    let port: u16 = port.trim().parse().map_err(|_| ConfigError::Invalid {
        var: "DB_PORT",
        value: port.clone(),
    })?;
    let name = required(lookup, "DB_NAME")?;

    Ok(format!("mysql://{user}:{pass}@{host}:{port}/{name}"))
}

// SQLite only needs the database file, named by DB_NAME.
#[cfg(not(feature = "mysql"))]
fn connection_url<F>(lookup: &F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    required(lookup, "DB_NAME")
}

fn non_empty<F>(lookup: &F, var: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var).filter(|value| !value.trim().is_empty())
}

fn required<F>(lookup: &F, var: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    non_empty(lookup, var).ok_or(ConfigError::Missing(var))
}

fn parsed<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match non_empty(lookup, var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}
