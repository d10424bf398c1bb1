use crate::db::error::DatabaseError;
use async_trait::async_trait;

/// Keyed persistence for a single entity type.
#[async_trait]
pub trait Repository<T, ID> {
    /// Payload accepted by [`Repository::update_partial`].
    type Update: Send + Sync;

    async fn find_by_id(&self, id: ID) -> Result<Option<T>, DatabaseError>;

    async fn create(&self, entity: T) -> Result<T, DatabaseError>;

    /// Returns `false` when no entity matched `id`.
    async fn update_partial(&self, id: ID, update: &Self::Update) -> Result<bool, DatabaseError>;

    /// Returns `false` when no entity matched `id`.
    async fn delete(&self, id: ID) -> Result<bool, DatabaseError>;
}
