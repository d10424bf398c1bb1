use anyhow::Result;
use std::env;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::mongo::Mongo;
use tracing::info;

use crate::config::{parse_env, DatabaseConfig};
use crate::db::pool::DatabasePool;
use crate::utils::generate_ulid;

const MONGO_PORT: u16 = 27017;

/// A MongoDB instance with a database of its own, for integration tests.
///
/// Set `MONGODB_TEST_HOST` (and optionally `MONGODB_TEST_PORT`) to run
/// against an existing server instead of starting a container.
pub struct TestEnvironment {
    pub db_pool: DatabasePool,
    _container: Option<ContainerAsync<Mongo>>,
}

impl TestEnvironment {
    pub async fn new() -> Result<Self> {
        let (host, port, container) = match env::var("MONGODB_TEST_HOST") {
            Ok(host) => (host, parse_env("MONGODB_TEST_PORT", MONGO_PORT)?, None),
            Err(_) => {
                let container = Mongo::default().start().await?;
                let host = container.get_host().await?.to_string();
                let port = container.get_host_port_ipv4(MONGO_PORT).await?;
                (host, port, Some(container))
            }
        };

        let config = DatabaseConfig {
            host,
            port,
            database: format!("employees_test_{}", generate_ulid().to_lowercase()),
            ..DatabaseConfig::default()
        };
        info!(
            "Test database {} on {}:{}",
            config.database, config.host, config.port
        );

        let db_pool = DatabasePool::new(&config).await?;

        Ok(Self {
            db_pool,
            _container: container,
        })
    }

    /// Drops the per-test database. Containers are removed on drop regardless.
    pub async fn cleanup(&self) -> Result<()> {
        self.db_pool.database().drop().await?;
        Ok(())
    }
}
