mod onboarding_status;
mod update_profile;

pub use onboarding_status::{OnboardingOutcome, OnboardingStatus, OnboardingStatusHandler};
pub use update_profile::{
    UpdateProfileCommand, UpdateProfileError, UpdateProfileHandler, PROFILE_WRITE_TIMEOUT,
};
