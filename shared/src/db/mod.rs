pub mod error;
pub mod pool;
pub mod repositories;

use error::DatabaseError;
use std::future::IntoFuture;
use std::time::Duration;

/// Runs a driver call, failing with [`DatabaseError::Timeout`] once `limit`
/// has elapsed.
pub(crate) async fn bounded<T, F>(limit: Duration, operation: F) -> Result<T, DatabaseError>
where
    F: IntoFuture<Output = Result<T, mongodb::error::Error>>,
{
    match tokio::time::timeout(limit, operation.into_future()).await {
        Ok(result) => result.map_err(DatabaseError::from),
        Err(_) => Err(DatabaseError::Timeout(limit)),
    }
}
