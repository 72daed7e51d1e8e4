//! HTTP routes for profile endpoints.

use axum::{
    routing::{get, put},
    Router,
};

use super::handlers::{onboarding_status, update_profile, ProfileHandlers};

/// Creates the profile router with all endpoints.
///
/// Routes:
/// - `PUT /` - Update the caller's profile
/// - `GET /onboarding` - Onboarding status for the routing layer
pub fn profile_routes(handlers: ProfileHandlers) -> Router {
    Router::new()
        .route("/", put(update_profile))
        .route("/onboarding", get(onboarding_status))
        .with_state(handlers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockInsightGenerator;
    use crate::adapters::auth::MockIdentityResolver;
    use crate::adapters::cache::InMemoryInvalidator;
    use crate::application::handlers::insight::InsightProvisioner;
    use crate::application::handlers::profile::{OnboardingStatusHandler, UpdateProfileHandler};
    use crate::domain::foundation::{CallerIdentity, Industry, IndustryInsightId, UserProfileId};
    use crate::domain::insight::{IndustryInsight, InsightPayload, NewIndustryInsight};
    use crate::domain::user::{ProfileFields, UserProfile};
    use crate::ports::{InsightRepository, RepositoryError, UserRepository};
    use async_trait::async_trait;
    use axum::body::Body;
    use chrono::Utc;
    use http::{header, Request, StatusCode};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tower::ServiceExt;

    // ───────────────────────────────────────────────────────────────
    // Mock implementations (minimal for route testing)
    // ───────────────────────────────────────────────────────────────

    struct MockUserRepository {
        profiles: Mutex<Vec<UserProfile>>,
        fail_update: bool,
    }

    impl MockUserRepository {
        fn with_profile(profile: UserProfile) -> Self {
            Self {
                profiles: Mutex::new(vec![profile]),
                fail_update: false,
            }
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn find_by_identity(
            &self,
            identity: &CallerIdentity,
        ) -> Result<Option<UserProfile>, RepositoryError> {
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
            id: UserProfileId,
            fields: &ProfileFields,
            _timeout: Duration,
        ) -> Result<UserProfile, RepositoryError> {
            if self.fail_update {
                return Err(RepositoryError::Timeout { timeout_secs: 10 });
            }
            let mut profiles = self.profiles.lock().unwrap();
            let profile = profiles
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or_else(|| RepositoryError::database("row vanished"))?;
            profile.industry = Some(fields.industry.clone());
            profile.experience = fields.experience;
            profile.bio = fields.bio.clone();
            profile.skills = fields.skills.clone();
            Ok(profile.clone())
        }
    }

    struct MockInsightRepository;

    #[async_trait]
    impl InsightRepository for MockInsightRepository {
        async fn find_by_industry(
            &self,
            _industry: &Industry,
        ) -> Result<Option<IndustryInsight>, RepositoryError> {
            Ok(None)
        }

        async fn create(
            &self,
            insight: NewIndustryInsight,
        ) -> Result<IndustryInsight, RepositoryError> {
            Ok(IndustryInsight {
                id: IndustryInsightId::new(),
                industry: insight.industry,
                payload: insight.payload,
                next_update: insight.next_update,
                created_at: Utc::now(),
            })
        }
    }

    const TOKEN: &str = "valid-token";

    fn test_identity() -> CallerIdentity {
        CallerIdentity::new("user_2abc").unwrap()
    }

    fn test_profile() -> UserProfile {
        UserProfile {
            id: UserProfileId::new(),
            identity: test_identity(),
            industry: None,
            experience: 0,
            bio: None,
            skills: Vec::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn test_payload() -> InsightPayload {
        let mut fields = serde_json::Map::new();
        fields.insert("demandLevel".into(), serde_json::json!("High"));
        InsightPayload::new(fields)
    }

    fn router_with(users: MockUserRepository) -> Router {
        let identity = Arc::new(MockIdentityResolver::new().with_identity(TOKEN, test_identity()));
        let users = Arc::new(users);
        let provisioner = Arc::new(InsightProvisioner::new(
            Arc::new(MockInsightRepository),
            Arc::new(MockInsightGenerator::returning(test_payload())),
        ));
        let update_handler = Arc::new(UpdateProfileHandler::new(
            identity.clone(),
            users.clone(),
            provisioner,
            Arc::new(InMemoryInvalidator::new()),
        ));
        let onboarding_handler = Arc::new(OnboardingStatusHandler::new(identity, users));
        profile_routes(ProfileHandlers::new(update_handler, onboarding_handler))
    }

    fn update_request(token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("PUT")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        builder
            .body(Body::from(
                r#"{"industry":"Tech","experience":3,"bio":"x","skills":["Go"]}"#,
            ))
            .unwrap()
    }

    // ───────────────────────────────────────────────────────────────
    // Tests
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn profile_router_mounts_update_endpoint() {
        let app = router_with(MockUserRepository::with_profile(test_profile()));

        let response = app.oneshot(update_request(Some(TOKEN))).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn update_without_credential_is_unauthorized() {
        let app = router_with(MockUserRepository::with_profile(test_profile()));

        let response = app.oneshot(update_request(None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn failed_write_surfaces_as_internal_error() {
        let mut users = MockUserRepository::with_profile(test_profile());
        users.fail_update = true;
        let app = router_with(users);

        let response = app.oneshot(update_request(Some(TOKEN))).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn profile_router_mounts_onboarding_endpoint() {
        let app = router_with(MockUserRepository::with_profile(test_profile()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/onboarding")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
