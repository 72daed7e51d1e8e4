//! OnboardingStatus - read-only check of whether the caller has picked an
//! industry.
//!
//! The routing layer treats any non-onboarded signal uniformly, so the
//! boolean deliberately does not distinguish "not logged in" from "no
//! industry yet"; the kind field carries that distinction for diagnostics.

use std::sync::Arc;

use crate::ports::{IdentityResolver, UserRepository};

/// Diagnostic outcome kind accompanying the onboarding boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingOutcome {
    /// Identity and profile resolved; the boolean is authoritative.
    Ok,
    /// The caller could not be resolved to an identity.
    Unauthorized,
    /// The identity resolved but has no backing profile.
    ProfileNotFound,
    /// The persistence read failed; onboarding could not be verified.
    CheckFailed,
}

/// Result of the onboarding check. Never a raised error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnboardingStatus {
    pub is_onboarded: bool,
    pub kind: OnboardingOutcome,
}

impl OnboardingStatus {
    fn not_onboarded(kind: OnboardingOutcome) -> Self {
        Self {
            is_onboarded: false,
            kind,
        }
    }
}

/// Handler for the onboarding status query.
pub struct OnboardingStatusHandler {
    identity: Arc<dyn IdentityResolver>,
    users: Arc<dyn UserRepository>,
}

impl OnboardingStatusHandler {
    pub fn new(identity: Arc<dyn IdentityResolver>, users: Arc<dyn UserRepository>) -> Self {
        Self { identity, users }
    }

    /// Report whether the caller's profile has an industry assigned.
    pub async fn handle(&self, access_token: Option<&str>) -> OnboardingStatus {
        let token = match access_token {
            Some(token) => token,
            None => return OnboardingStatus::not_onboarded(OnboardingOutcome::Unauthorized),
        };

        let identity = match self.identity.resolve(token).await {
            Ok(identity) => identity,
            Err(e) => {
                tracing::debug!(error = %e, "onboarding check: identity resolution failed");
                return OnboardingStatus::not_onboarded(OnboardingOutcome::Unauthorized);
            }
        };

        match self.users.find_by_identity(&identity).await {
            Ok(Some(profile)) => OnboardingStatus {
                is_onboarded: profile.is_onboarded(),
                kind: OnboardingOutcome::Ok,
            },
            Ok(None) => OnboardingStatus::not_onboarded(OnboardingOutcome::ProfileNotFound),
            Err(e) => {
                tracing::error!(identity = %identity, error = %e, "onboarding check: profile read failed");
                OnboardingStatus::not_onboarded(OnboardingOutcome::CheckFailed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{
        AuthError, CallerIdentity, Industry, UserProfileId,
    };
    use crate::domain::user::{ProfileFields, UserProfile};
    use crate::ports::RepositoryError;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Mutex;
    use std::time::Duration;

    struct MockIdentityResolver {
        known_token: &'static str,
        identity: CallerIdentity,
    }

    #[async_trait]
    impl IdentityResolver for MockIdentityResolver {
        async fn resolve(&self, access_token: &str) -> Result<CallerIdentity, AuthError> {
            if access_token == self.known_token {
                Ok(self.identity.clone())
            } else {
                Err(AuthError::InvalidCredential)
            }
        }
    }

    struct MockUserRepository {
        profiles: Mutex<Vec<UserProfile>>,
        fail_reads: bool,
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn find_by_identity(
            &self,
            identity: &CallerIdentity,
        ) -> Result<Option<UserProfile>, RepositoryError> {
            if self.fail_reads {
                return Err(RepositoryError::database("connection reset"));
            }
            Ok(self
                .profiles
                .lock()
                .unwrap()
                .iter()
                .find(|p| &p.identity == identity)
                .cloned())
        }

        async fn update_profile(
            &self,
            _id: UserProfileId,
            _fields: &ProfileFields,
            _timeout: Duration,
        ) -> Result<UserProfile, RepositoryError> {
            unimplemented!("status check never writes")
        }
    }

    const TOKEN: &str = "valid-token";

    fn test_identity() -> CallerIdentity {
        CallerIdentity::new("user_2abc").unwrap()
    }

    fn profile_with_industry(industry: Option<Industry>) -> UserProfile {
        UserProfile {
            id: UserProfileId::new(),
            identity: test_identity(),
            industry,
            experience: 0,
            bio: None,
            skills: Vec::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn handler(profiles: Vec<UserProfile>, fail_reads: bool) -> OnboardingStatusHandler {
        OnboardingStatusHandler::new(
            Arc::new(MockIdentityResolver {
                known_token: TOKEN,
                identity: test_identity(),
            }),
            Arc::new(MockUserRepository {
                profiles: Mutex::new(profiles),
                fail_reads,
            }),
        )
    }

    #[tokio::test]
    async fn onboarded_when_industry_is_assigned() {
        let profile = profile_with_industry(Some(Industry::new("Tech").unwrap()));
        let status = handler(vec![profile], false).handle(Some(TOKEN)).await;

        assert!(status.is_onboarded);
        assert_eq!(status.kind, OnboardingOutcome::Ok);
    }

    #[tokio::test]
    async fn not_onboarded_when_industry_is_missing() {
        let profile = profile_with_industry(None);
        let status = handler(vec![profile], false).handle(Some(TOKEN)).await;

        assert!(!status.is_onboarded);
        assert_eq!(status.kind, OnboardingOutcome::Ok);
    }

    #[tokio::test]
    async fn missing_credential_maps_to_unauthorized_kind() {
        let status = handler(Vec::new(), false).handle(None).await;

        assert!(!status.is_onboarded);
        assert_eq!(status.kind, OnboardingOutcome::Unauthorized);
    }

    #[tokio::test]
    async fn invalid_credential_maps_to_unauthorized_kind() {
        let status = handler(Vec::new(), false).handle(Some("forged")).await;

        assert!(!status.is_onboarded);
        assert_eq!(status.kind, OnboardingOutcome::Unauthorized);
    }

    #[tokio::test]
    async fn missing_profile_maps_to_not_found_kind() {
        let status = handler(Vec::new(), false).handle(Some(TOKEN)).await;

        assert!(!status.is_onboarded);
        assert_eq!(status.kind, OnboardingOutcome::ProfileNotFound);
    }

    #[tokio::test]
    async fn read_failure_maps_to_check_failed_kind() {
        let status = handler(Vec::new(), true).handle(Some(TOKEN)).await;

        assert!(!status.is_onboarded);
        assert_eq!(status.kind, OnboardingOutcome::CheckFailed);
    }
}
