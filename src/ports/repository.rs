//! Shared failure vocabulary for persistence ports.

use thiserror::Error;

/// Failures surfaced by the persistence engine.
///
/// Constraint violations and timeouts are distinguishable variants because
/// callers treat them differently: a unique violation on insight creation is
/// a benign lost race, while a timeout on the profile write is an error the
/// caller must see.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// A unique constraint rejected the write.
    #[error("Unique constraint violated: {constraint}")]
    UniqueViolation { constraint: String },

    /// The operation exceeded its timeout budget.
    #[error("Operation timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Any other database failure (connection, serialization, contention).
    #[error("Database error: {0}")]
    Database(String),
}

impl RepositoryError {
    /// Creates a unique violation error naming the constraint.
    pub fn unique_violation(constraint: impl Into<String>) -> Self {
        Self::UniqueViolation {
            constraint: constraint.into(),
        }
    }

    /// Creates a generic database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(message.into())
    }

    /// Returns true if the write lost a race against a concurrent creator.
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, Self::UniqueViolation { .. })
    }
}
