use anyhow::Result;
use shared::{parse_env, DatabaseConfig};
use std::env;

#[derive(Debug, Clone)]
pub struct EmployeeServiceConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
}

impl EmployeeServiceConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("EMPLOYEE_SERVICE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_env("EMPLOYEE_SERVICE_PORT", 8000)?,
            database: DatabaseConfig::from_env()?,
        })
    }
}
