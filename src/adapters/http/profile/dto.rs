//! HTTP DTOs for profile endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent
//! evolution.

use serde::{Deserialize, Serialize};

use crate::application::handlers::profile::{OnboardingOutcome, OnboardingStatus};
use crate::domain::user::UserProfile;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to update the caller's profile. All four fields are always
/// supplied and always written together.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProfileRequest {
    pub industry: String,
    pub experience: i32,
    pub bio: Option<String>,
    pub skills: Vec<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Post-update profile snapshot returned to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: String,
    pub industry: Option<String>,
    pub experience: i32,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<UserProfile> for ProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id.to_string(),
            industry: profile.industry.map(|i| i.as_str().to_string()),
            experience: profile.experience,
            bio: profile.bio,
            skills: profile.skills,
            updated_at: profile.updated_at,
        }
    }
}

/// Onboarding status for the routing layer.
#[derive(Debug, Clone, Serialize)]
pub struct OnboardingStatusResponse {
    pub is_onboarded: bool,
    pub kind: &'static str,
}

impl From<OnboardingStatus> for OnboardingStatusResponse {
    fn from(status: OnboardingStatus) -> Self {
        let kind = match status.kind {
            OnboardingOutcome::Ok => "OK",
            OnboardingOutcome::Unauthorized => "UNAUTHORIZED",
            OnboardingOutcome::ProfileNotFound => "PROFILE_NOT_FOUND",
            OnboardingOutcome::CheckFailed => "CHECK_FAILED",
        };
        Self {
            is_onboarded: status.is_onboarded,
            kind,
        }
    }
}

/// Coarse error shape; no stack traces or internal identifiers cross this
/// boundary.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
}

impl ErrorResponse {
    pub fn new(code: &'static str, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code,
        }
    }
}
