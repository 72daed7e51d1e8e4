//! HTTP handlers for profile endpoints.
//!
//! The bearer credential is forwarded raw to the application handlers; the
//! orchestrator owns identity resolution, so an absent or invalid token
//! still produces a tagged outcome rather than a middleware rejection.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::profile::{
    OnboardingStatusHandler, UpdateProfileCommand, UpdateProfileError, UpdateProfileHandler,
};
use crate::domain::foundation::Industry;
use crate::domain::user::ProfileFields;

use super::dto::{
    ErrorResponse, OnboardingStatusResponse, ProfileResponse, UpdateProfileRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ProfileHandlers {
    update_handler: Arc<UpdateProfileHandler>,
    onboarding_handler: Arc<OnboardingStatusHandler>,
}

impl ProfileHandlers {
    pub fn new(
        update_handler: Arc<UpdateProfileHandler>,
        onboarding_handler: Arc<OnboardingStatusHandler>,
    ) -> Self {
        Self {
            update_handler,
            onboarding_handler,
        }
    }
}

/// Extracts the bearer token from the Authorization header, if any.
fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::to_string)
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// PUT /api/profile - Update the caller's profile
pub async fn update_profile(
    State(handlers): State<ProfileHandlers>,
    headers: HeaderMap,
    Json(req): Json<UpdateProfileRequest>,
) -> Response {
    let industry = match Industry::new(req.industry) {
        Ok(industry) => industry,
        Err(e) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse::new("VALIDATION_FAILED", e.to_string())),
            )
                .into_response()
        }
    };
    let fields = match ProfileFields::new(industry, req.experience, req.bio, req.skills) {
        Ok(fields) => fields,
        Err(e) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse::new("VALIDATION_FAILED", e.to_string())),
            )
                .into_response()
        }
    };

    let cmd = UpdateProfileCommand {
        access_token: bearer_token(&headers),
        fields,
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(profile) => (StatusCode::OK, Json(ProfileResponse::from(profile))).into_response(),
        Err(e) => update_error_response(e),
    }
}

/// GET /api/profile/onboarding - Onboarding status for the routing layer
pub async fn onboarding_status(
    State(handlers): State<ProfileHandlers>,
    headers: HeaderMap,
) -> Response {
    let token = bearer_token(&headers);
    let status = handlers.onboarding_handler.handle(token.as_deref()).await;

    (StatusCode::OK, Json(OnboardingStatusResponse::from(status))).into_response()
}

fn update_error_response(error: UpdateProfileError) -> Response {
    let (status, code) = match error {
        UpdateProfileError::Unauthorized => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
        UpdateProfileError::ProfileNotFound => (StatusCode::NOT_FOUND, "PROFILE_NOT_FOUND"),
        UpdateProfileError::UpdateFailed => {
            tracing::error!("Profile update failed at the HTTP boundary");
            (StatusCode::INTERNAL_SERVER_ERROR, "UPDATE_FAILED")
        }
    };
    (
        status,
        Json(ErrorResponse::new(code, error.to_string())),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_token_strips_prefix() {
        let mut headers = HeaderMap::new();
        headers.insert("Authorization", "Bearer abc123".parse().unwrap());
        assert_eq!(bearer_token(&headers), Some("abc123".to_string()));
    }

    #[test]
    fn bearer_token_absent_when_header_missing() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn bearer_token_absent_for_other_schemes() {
        let mut headers = HeaderMap::new();
        headers.insert("Authorization", "Basic dXNlcjpwdw==".parse().unwrap());
        assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn update_errors_map_to_expected_statuses() {
        let cases = [
            (UpdateProfileError::Unauthorized, StatusCode::UNAUTHORIZED),
            (UpdateProfileError::ProfileNotFound, StatusCode::NOT_FOUND),
            (
                UpdateProfileError::UpdateFailed,
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (error, expected) in cases {
            assert_eq!(update_error_response(error).status(), expected);
        }
    }
}
