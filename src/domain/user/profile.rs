//! User profile record and the always-written update field set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CallerIdentity, Industry, UserProfileId, ValidationError};

/// Upper bound on years of professional experience accepted in an update.
pub const MAX_EXPERIENCE_YEARS: i32 = 60;

/// A user's professional profile.
///
/// Created at account provisioning (outside this crate), mutated only
/// through the profile update orchestrator, never deleted here. `industry`
/// stays `None` until the user completes onboarding; once set it is a soft
/// reference to an [`IndustryInsight`](crate::domain::insight::IndustryInsight)
/// keyed by the same value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Internal surrogate id.
    pub id: UserProfileId,

    /// Stable external identity from the identity provider (unique).
    pub identity: CallerIdentity,

    /// Selected industry key; `None` until onboarded.
    pub industry: Option<Industry>,

    /// Years of professional experience.
    pub experience: i32,

    /// Free-form professional bio.
    pub bio: Option<String>,

    /// Ordered list of skills.
    pub skills: Vec<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Returns true once the user has selected an industry.
    pub fn is_onboarded(&self) -> bool {
        self.industry.is_some()
    }
}

/// The four profile fields written together by every update.
///
/// There are no partial-field semantics: all four are always supplied and
/// always overwritten as one atomic mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileFields {
    pub industry: Industry,
    pub experience: i32,
    pub bio: Option<String>,
    pub skills: Vec<String>,
}

impl ProfileFields {
    /// Creates a validated field set for an update.
    pub fn new(
        industry: Industry,
        experience: i32,
        bio: Option<String>,
        skills: Vec<String>,
    ) -> Result<Self, ValidationError> {
        if !(0..=MAX_EXPERIENCE_YEARS).contains(&experience) {
            return Err(ValidationError::out_of_range(
                "experience",
                0,
                MAX_EXPERIENCE_YEARS,
                experience,
            ));
        }
        Ok(Self {
            industry,
            experience,
            bio,
            skills,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_industry() -> Industry {
        Industry::new("tech-software-development").unwrap()
    }

    #[test]
    fn profile_is_onboarded_iff_industry_present() {
        let mut profile = UserProfile {
            id: UserProfileId::new(),
            identity: CallerIdentity::new("user_1").unwrap(),
            industry: None,
            experience: 0,
            bio: None,
            skills: Vec::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert!(!profile.is_onboarded());

        profile.industry = Some(test_industry());
        assert!(profile.is_onboarded());
    }

    #[test]
    fn profile_fields_accept_valid_experience() {
        let fields = ProfileFields::new(test_industry(), 3, Some("bio".into()), vec!["Go".into()]);
        assert!(fields.is_ok());
    }

    #[test]
    fn profile_fields_reject_negative_experience() {
        assert!(ProfileFields::new(test_industry(), -1, None, Vec::new()).is_err());
    }

    #[test]
    fn profile_fields_reject_implausible_experience() {
        assert!(ProfileFields::new(test_industry(), 75, None, Vec::new()).is_err());
    }
}
