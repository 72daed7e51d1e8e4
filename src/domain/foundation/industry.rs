//! Industry key value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Validated industry key, e.g. `"tech-software-development"`.
///
/// One [`IndustryInsight`](crate::domain::insight::IndustryInsight) exists
/// per distinct key; the key is the unique lookup value at the persistence
/// layer. Non-empty by construction, so a profile holding an `Industry` is
/// by definition onboarded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Industry(String);

impl Industry {
    /// Creates an industry key, rejecting empty or whitespace-only input.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::empty_field("industry"));
        }
        Ok(Self(value))
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
