use mongodb::error::ErrorKind;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Database unavailable: {0}")]
    Unavailable(String),
    #[error("Database operation timed out after {0:?}")]
    Timeout(Duration),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Database error: {0}")]
    Query(#[source] mongodb::error::Error),
}

impl DatabaseError {
    /// Whether the failure says nothing about the request itself, only about
    /// reaching the database.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, DatabaseError::Unavailable(_) | DatabaseError::Timeout(_))
    }
}

impl From<mongodb::error::Error> for DatabaseError {
    fn from(err: mongodb::error::Error) -> Self {
        let unreachable = matches!(
            err.kind.as_ref(),
            ErrorKind::ServerSelection { .. }
                | ErrorKind::Io(_)
                | ErrorKind::ConnectionPoolCleared { .. }
        );
        let malformed = matches!(
            err.kind.as_ref(),
            ErrorKind::BsonSerialization(_) | ErrorKind::BsonDeserialization(_)
        );

        if unreachable {
            DatabaseError::Unavailable(err.to_string())
        } else if malformed {
            DatabaseError::Serialization(err.to_string())
        } else {
            DatabaseError::Query(err)
        }
    }
}

impl From<mongodb::bson::ser::Error> for DatabaseError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        DatabaseError::Serialization(err.to_string())
    }
}

impl From<mongodb::bson::de::Error> for DatabaseError {
    fn from(err: mongodb::bson::de::Error) -> Self {
        DatabaseError::Serialization(err.to_string())
    }
}
