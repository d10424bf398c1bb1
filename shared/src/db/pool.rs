use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use tracing::info;

use super::bounded;
use crate::config::DatabaseConfig;
use crate::db::error::DatabaseError;

const APP_NAME: &str = "employee-service";

/// Process-wide MongoDB client. Cloning is cheap; every clone shares the same
/// connection pool.
#[derive(Clone, Debug)]
pub struct DatabasePool {
    client: Client,
    database: Database,
    config: DatabaseConfig,
}

impl DatabasePool {
    /// Builds the client from `config` and verifies the server answers a ping.
    pub async fn new(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let mut options = ClientOptions::parse(config.connection_uri()).await?;
        options.app_name = Some(APP_NAME.to_string());
        options.max_pool_size = Some(config.max_pool_size);
        options.min_pool_size = Some(config.min_pool_size);
        options.max_idle_time = Some(config.max_idle_time);
        options.connect_timeout = Some(config.connect_timeout);
        options.server_selection_timeout = Some(config.server_selection_timeout);

        let client = Client::with_options(options)?;
        let database = client.database(&config.database);

        let pool = Self {
            client,
            database,
            config: config.clone(),
        };
        pool.ping().await?;

        info!(
            "Connected to MongoDB at {}:{} (database: {}, max pool size: {})",
            config.host, config.port, config.database, config.max_pool_size
        );

        Ok(pool)
    }

    pub async fn ping(&self) -> Result<(), DatabaseError> {
        bounded(
            self.config.operation_timeout,
            self.database.run_command(doc! { "ping": 1 }),
        )
        .await?;
        Ok(())
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.database.collection(name)
    }

    /// Closes pooled connections. In-flight operations on clones of this pool
    /// fail afterwards.
    pub async fn shutdown(self) {
        info!("Closing MongoDB connection pool");
        self.client.shutdown().await;
    }
}
