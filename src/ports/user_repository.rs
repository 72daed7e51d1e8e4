//! UserRepository port for profile persistence operations.

use async_trait::async_trait;
use std::time::Duration;

use crate::domain::foundation::{CallerIdentity, UserProfileId};
use crate::domain::user::{ProfileFields, UserProfile};

use super::RepositoryError;

/// Repository for user profiles.
///
/// Profiles are created at account provisioning, outside this crate; the
/// port only reads them and applies the single atomic field update.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a profile by the caller's stable external identity (unique key).
    async fn find_by_identity(
        &self,
        identity: &CallerIdentity,
    ) -> Result<Option<UserProfile>, RepositoryError>;

    /// Overwrite the four update fields of exactly one profile row as a
    /// single atomic operation, bounded by `timeout`.
    ///
    /// Returns the post-update snapshot. Exceeding the timeout surfaces as
    /// `RepositoryError::Timeout`; there are no partial-field writes.
    async fn update_profile(
        &self,
        id: UserProfileId,
        fields: &ProfileFields,
        timeout: Duration,
    ) -> Result<UserProfile, RepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_repository_trait_is_object_safe_and_send_sync() {
        fn _assert_trait_object(_: &dyn UserRepository) {}
        fn _assert_arc_send_sync<T: Send + Sync + ?Sized>() {}
        _assert_arc_send_sync::<std::sync::Arc<dyn UserRepository>>();
    }
}
