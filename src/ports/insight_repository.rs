//! InsightRepository port for industry insight persistence.

use async_trait::async_trait;

use crate::domain::foundation::Industry;
use crate::domain::insight::{IndustryInsight, NewIndustryInsight};

use super::RepositoryError;

/// Repository for industry insight records.
///
/// The industry key is unique at the persistence layer; that constraint is
/// the sole arbiter of concurrent creation races. This port deliberately has
/// no update method - existing records are never mutated by this crate.
#[async_trait]
pub trait InsightRepository: Send + Sync {
    /// Look up an insight by its industry key.
    async fn find_by_industry(
        &self,
        industry: &Industry,
    ) -> Result<Option<IndustryInsight>, RepositoryError>;

    /// Insert a freshly generated insight.
    ///
    /// Returns `RepositoryError::UniqueViolation` when a concurrent caller
    /// already created the same key; the caller treats that as a benign
    /// lost race.
    async fn create(&self, insight: NewIndustryInsight) -> Result<IndustryInsight, RepositoryError>;
}
