//! Unified error type for store operations that command code can handle

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Mutation or lookup targeting an identifier with no row behind it
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    /// Delete blocked by rows that still reference the target
    #[error("{entity} {id} cannot be deleted: {message}")]
    Conflict {
        entity: &'static str,
        id: i32,
        message: String,
    },

    /// Insert or update naming a reference that does not exist
    #[error("invalid reference: {message}")]
    ForeignKey { message: String },

    /// The store could not be reached at connection time
    #[error("could not connect to the database at {host}:{port}")]
    Connection {
        host: String,
        port: u16,
        #[source]
        source: sqlx::Error,
    },

    /// The blocking runtime backing the store could not be started
    #[error("failed to start the store runtime")]
    Runtime(#[from] std::io::Error),

    /// Catch-all for driver failures the caller cannot recover from
    #[error("database query failed")]
    Query(#[from] sqlx::Error),
}

/// Type alias for store operation results
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_entity_and_id() {
        let err = StoreError::NotFound {
            entity: "material",
            id: 42,
        };
        assert_eq!(err.to_string(), "material 42 not found");
    }

    #[test]
    fn test_conflict_message_carries_reason() {
        let err = StoreError::Conflict {
            entity: "material",
            id: 3,
            message: "it is still used by at least one product".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "material 3 cannot be deleted: it is still used by at least one product"
        );
    }

    #[test]
    fn test_connection_message_names_endpoint() {
        let err = StoreError::Connection {
            host: "db.internal".to_string(),
            port: 5433,
            source: sqlx::Error::PoolClosed,
        };
        assert_eq!(
            err.to_string(),
            "could not connect to the database at db.internal:5433"
        );
    }

    #[test]
    fn test_foreign_key_message_carries_reference() {
        let err = StoreError::ForeignKey {
            message: "no material type with id 9".to_string(),
        };
        assert_eq!(err.to_string(), "invalid reference: no material type with id 9");
    }
}
