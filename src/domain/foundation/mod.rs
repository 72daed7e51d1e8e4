//! Foundation value objects shared across the domain.

mod auth;
mod errors;
mod ids;
mod industry;

pub use auth::{AuthError, CallerIdentity};
pub use errors::ValidationError;
pub use ids::{IndustryInsightId, UserProfileId};
pub use industry::Industry;
