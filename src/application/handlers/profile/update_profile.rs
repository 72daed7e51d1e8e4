//! UpdateProfile - orchestrates the profile mutation and its auxiliary
//! insight provisioning.
//!
//! Sequencing: resolve identity, look up the profile, ensure an insight
//! exists for the selected industry (best-effort, outside the write), commit
//! the atomic four-field mutation under a timeout, then fire the
//! invalidation signal. The auxiliary cache must never block the primary
//! write: insight failures are absorbed, invalidation failures are absorbed,
//! and only the mutation itself can produce `UpdateFailed`.

use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::application::handlers::insight::{InsightProvisioner, InsightResult};
use crate::domain::user::{ProfileFields, UserProfile};
use crate::ports::{CacheInvalidator, IdentityResolver, UserRepository, HOME_SURFACE_PATH};

/// Timeout budget for the atomic profile write. Generous on purpose: the
/// write is the only step whose failure must reach the caller.
pub const PROFILE_WRITE_TIMEOUT: Duration = Duration::from_secs(10);

/// Command to update the caller's profile.
#[derive(Debug, Clone)]
pub struct UpdateProfileCommand {
    /// Bearer credential as presented; `None` when the caller sent nothing.
    pub access_token: Option<String>,
    /// The four always-written fields.
    pub fields: ProfileFields,
}

/// Caller-facing failure kinds. This enum is the stable contract any front
/// end integrates against; no stack traces or internal identifiers cross
/// this boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UpdateProfileError {
    /// The caller could not be resolved to an identity.
    #[error("Unauthorized")]
    Unauthorized,

    /// The identity resolved but has no backing profile.
    #[error("Profile not found")]
    ProfileNotFound,

    /// The atomic mutation could not complete (contention, timeout, or
    /// constraint error).
    #[error("Profile update failed")]
    UpdateFailed,
}

/// Handler for profile updates.
pub struct UpdateProfileHandler {
    identity: Arc<dyn IdentityResolver>,
    users: Arc<dyn UserRepository>,
    provisioner: Arc<InsightProvisioner>,
    invalidator: Arc<dyn CacheInvalidator>,
}

impl UpdateProfileHandler {
    pub fn new(
        identity: Arc<dyn IdentityResolver>,
        users: Arc<dyn UserRepository>,
        provisioner: Arc<InsightProvisioner>,
        invalidator: Arc<dyn CacheInvalidator>,
    ) -> Self {
        Self {
            identity,
            users,
            provisioner,
            invalidator,
        }
    }

    /// Update the caller's profile, returning the post-update snapshot.
    ///
    /// Identity and lookup failures short-circuit before any write; insight
    /// provisioning failures are absorbed; invalidation failures never
    /// downgrade a successful update.
    pub async fn handle(&self, cmd: UpdateProfileCommand) -> Result<UserProfile, UpdateProfileError> {
        let token = match cmd.access_token.as_deref() {
            Some(token) => token,
            None => {
                tracing::warn!("profile update rejected: no credential presented");
                return Err(UpdateProfileError::Unauthorized);
            }
        };

        let identity = match self.identity.resolve(token).await {
            Ok(identity) => identity,
            Err(e) => {
                tracing::warn!(error = %e, "profile update rejected: identity resolution failed");
                return Err(UpdateProfileError::Unauthorized);
            }
        };

        let profile = match self.users.find_by_identity(&identity).await {
            Ok(Some(profile)) => profile,
            Ok(None) => {
                tracing::warn!(identity = %identity, "profile update rejected: no profile for identity");
                return Err(UpdateProfileError::ProfileNotFound);
            }
            Err(e) => {
                tracing::error!(identity = %identity, error = %e, "profile lookup failed");
                return Err(UpdateProfileError::UpdateFailed);
            }
        };

        // Best-effort enrichment, observed for logging only. Runs before and
        // outside the profile write so the slow external call never holds
        // the transaction open.
        match self.provisioner.ensure_insight(&cmd.fields.industry).await {
            InsightResult::Found(_) => {
                tracing::debug!(industry = %cmd.fields.industry, "industry insight already present");
            }
            InsightResult::Created(_) => {
                tracing::info!(industry = %cmd.fields.industry, "industry insight created");
            }
            InsightResult::Unavailable(reason) => {
                tracing::warn!(
                    industry = %cmd.fields.industry,
                    reason = %reason,
                    "industry insight unavailable; continuing with profile update"
                );
            }
        }

        let updated = self
            .users
            .update_profile(profile.id, &cmd.fields, PROFILE_WRITE_TIMEOUT)
            .await
            .map_err(|e| {
                tracing::error!(profile_id = %profile.id, error = %e, "profile write failed");
                UpdateProfileError::UpdateFailed
            })?;

        if let Err(e) = self.invalidator.invalidate(HOME_SURFACE_PATH).await {
            tracing::warn!(
                path = HOME_SURFACE_PATH,
                error = %e,
                "cache invalidation failed after profile update"
            );
        }

        Ok(updated)
    }
}
