use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Connection settings for the employee document store.
///
/// Every wait on the database is bounded by one of the timeouts below.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub collection: String,
    pub max_pool_size: u32,
    pub min_pool_size: u32,
    pub max_idle_time: Duration,
    pub connect_timeout: Duration,
    pub server_selection_timeout: Duration,
    pub operation_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 27017,
            database: "employees_db".to_string(),
            collection: "employeeinformation".to_string(),
            max_pool_size: 10,
            min_pool_size: 0,
            max_idle_time: Duration::from_secs(300),
            connect_timeout: Duration::from_secs(5),
            server_selection_timeout: Duration::from_secs(5),
            operation_timeout: Duration::from_secs(10),
        }
    }
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let config = Self {
            host: env::var("MONGODB_HOST").unwrap_or(defaults.host),
            port: parse_env("MONGODB_PORT", defaults.port)?,
            database: env::var("MONGODB_DATABASE").unwrap_or(defaults.database),
            collection: env::var("MONGODB_COLLECTION").unwrap_or(defaults.collection),
            max_pool_size: parse_env("MONGODB_MAX_POOL_SIZE", defaults.max_pool_size)?,
            min_pool_size: parse_env("MONGODB_MIN_POOL_SIZE", defaults.min_pool_size)?,
            max_idle_time: parse_secs("MONGODB_MAX_IDLE_TIME_SECONDS", defaults.max_idle_time)?,
            connect_timeout: parse_secs(
                "MONGODB_CONNECT_TIMEOUT_SECONDS",
                defaults.connect_timeout,
            )?,
            server_selection_timeout: parse_secs(
                "MONGODB_SERVER_SELECTION_TIMEOUT_SECONDS",
                defaults.server_selection_timeout,
            )?,
            operation_timeout: parse_secs(
                "MONGODB_OPERATION_TIMEOUT_SECONDS",
                defaults.operation_timeout,
            )?,
        };

        if config.min_pool_size > config.max_pool_size {
            anyhow::bail!(
                "MONGODB_MIN_POOL_SIZE ({}) must not exceed MONGODB_MAX_POOL_SIZE ({})",
                config.min_pool_size,
                config.max_pool_size
            );
        }

        Ok(config)
    }

    pub fn connection_uri(&self) -> String {
        format!("mongodb://{}:{}/", self.host, self.port)
    }
}

pub fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{} must be a valid value, got {:?}", key, value)),
        Err(_) => Ok(default),
    }
}

fn parse_secs(key: &str, default: Duration) -> Result<Duration> {
    parse_env(key, default.as_secs()).map(Duration::from_secs)
}
