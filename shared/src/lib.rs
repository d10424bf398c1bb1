pub mod config;
pub mod db;
pub mod models;
pub mod telemetry;
pub mod test_environment;
pub mod traits;
pub mod utils;

pub use config::{parse_env, DatabaseConfig};
pub use db::error::DatabaseError;
pub use db::pool::DatabasePool;
pub use db::repositories::EmployeeRepository;
pub use traits::Repository;
