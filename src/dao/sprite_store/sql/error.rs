//! Error types shared by the SQL storage implementation.

use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

/// Convenient result alias returning [`SqlDaoError`] failures.
pub type SqlResult<T> = Result<T, SqlDaoError>;

/// Failures that can occur while interacting with the SQL database.
#[derive(Debug, Error)]
pub enum SqlDaoError {
    /// The initial connection could not be established.
    #[error("failed to connect to database at `{url}`")]
    Connect {
        /// Connection URL that was attempted.
        url: String,
        /// Underlying ORM failure.
        #[source]
        source: DbErr,
    },
    /// Running the schema migrations failed.
    #[error("failed to run schema migrations")]
    Migrate {
        /// Underlying ORM failure.
        #[source]
        source: DbErr,
    },
    /// A query failed at runtime.
    #[error("database query `{operation}` failed")]
    Query {
        /// Name of the store operation that failed.
        operation: &'static str,
        /// Underlying ORM failure.
        #[source]
        source: DbErr,
    },
    /// A sprite row references a user row that does not exist.
    #[error("sprite `{sprite}` has no owner row")]
    MissingOwner {
        /// Sprite whose owner lookup came back empty.
        sprite: Uuid,
    },
    /// An icon row references a sprite or user row that does not exist.
    #[error("icon `{icon}` references a missing sprite or user row")]
    OrphanIcon {
        /// Icon whose parent lookup came back empty.
        icon: Uuid,
    },
}

impl SqlDaoError {
    /// Wrap an ORM failure with the name of the store operation.
    pub fn query(operation: &'static str, source: DbErr) -> Self {
        SqlDaoError::Query { operation, source }
    }
}
