//! PostgreSQL adapters for the persistence ports.

mod insight_repository;
mod user_repository;

pub use insight_repository::PgInsightRepository;
pub use user_repository::PgUserRepository;

use crate::ports::RepositoryError;

/// Maps a sqlx error into the port failure vocabulary, keeping unique
/// violations distinguishable for the creation-race path.
pub(crate) fn map_sqlx_err(e: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_unique_violation() {
            return RepositoryError::unique_violation(db.constraint().unwrap_or("unique"));
        }
    }
    RepositoryError::database(e.to_string())
}
