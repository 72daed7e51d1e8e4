//! InsightProvisioner - lazy find-or-create for industry insights.
//!
//! Given an industry key, returns the existing insight or produces a new one
//! through the external generator. Every failure path collapses into an
//! `Unavailable` outcome: insight availability is best-effort enrichment and
//! must never surface as an error to the profile update that triggered it.

use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;

use crate::domain::foundation::Industry;
use crate::domain::insight::{IndustryInsight, NewIndustryInsight};
use crate::ports::{GeneratorError, InsightGenerator, InsightRepository, RepositoryError};

/// Outcome of an `ensure_insight` call. Never a raised error.
#[derive(Debug)]
pub enum InsightResult {
    /// A record already existed; no generation attempted, no write performed.
    Found(IndustryInsight),
    /// A record was generated and created by this call.
    Created(IndustryInsight),
    /// No record could be provided. Non-fatal to the caller.
    Unavailable(UnavailableReason),
}

/// Why an insight could not be provided.
#[derive(Debug, Error)]
pub enum UnavailableReason {
    /// The external generation call failed.
    #[error("generation failed: {0}")]
    GenerationFailed(#[source] GeneratorError),

    /// A concurrent caller created the same industry key first. The unique
    /// key at the persistence layer is the sole arbiter of this race.
    #[error("lost creation race to a concurrent caller")]
    LostCreationRace,

    /// The lookup or insert failed at the persistence layer.
    #[error("storage failed: {0}")]
    StorageFailed(#[source] RepositoryError),
}

/// Provisions industry insights on demand.
pub struct InsightProvisioner {
    insights: Arc<dyn InsightRepository>,
    generator: Arc<dyn InsightGenerator>,
}

impl InsightProvisioner {
    pub fn new(insights: Arc<dyn InsightRepository>, generator: Arc<dyn InsightGenerator>) -> Self {
        Self { insights, generator }
    }

    /// Return the existing insight for `industry`, or generate and create
    /// one if absent.
    ///
    /// At most one row is created per call and existing rows are never
    /// mutated. The generation call runs here, outside any transaction held
    /// by the caller. All failures are logged with the industry key and
    /// reported as [`InsightResult::Unavailable`].
    pub async fn ensure_insight(&self, industry: &Industry) -> InsightResult {
        match self.insights.find_by_industry(industry).await {
            Ok(Some(existing)) => return InsightResult::Found(existing),
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(industry = %industry, error = %e, "insight lookup failed");
                return InsightResult::Unavailable(UnavailableReason::StorageFailed(e));
            }
        }

        let payload = match self.generator.generate(industry).await {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(industry = %industry, error = %e, "insight generation failed");
                return InsightResult::Unavailable(UnavailableReason::GenerationFailed(e));
            }
        };

        let insight = NewIndustryInsight::generated_at(industry.clone(), payload, Utc::now());
        match self.insights.create(insight).await {
            Ok(created) => InsightResult::Created(created),
            Err(e) if e.is_unique_violation() => {
                tracing::debug!(industry = %industry, "insight already created by a concurrent caller");
                InsightResult::Unavailable(UnavailableReason::LostCreationRace)
            }
            Err(e) => {
                tracing::warn!(industry = %industry, error = %e, "insight creation failed");
                InsightResult::Unavailable(UnavailableReason::StorageFailed(e))
            }
        }
    }
}
