//! User profile aggregate.

mod profile;

pub use profile::{ProfileFields, UserProfile, MAX_EXPERIENCE_YEARS};
