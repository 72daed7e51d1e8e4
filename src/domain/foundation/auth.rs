//! Authentication types for the domain layer.
//!
//! These types carry the stable caller identity produced by an identity
//! provider. They have **no external dependencies** - any provider (Clerk,
//! Zitadel, Auth0) can populate them via the `IdentityResolver` port.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::ValidationError;

/// Stable external identity of an authenticated caller.
///
/// This is the identifier the identity provider assigns (e.g. the token's
/// `sub` claim), not the internal surrogate id of the profile row. Profiles
/// are looked up by this value through a unique key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallerIdentity(String);

impl CallerIdentity {
    /// Creates a caller identity, rejecting empty input.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::empty_field("caller_identity"));
        }
        Ok(Self(value))
    }

    /// Returns the identity as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CallerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors that can occur while resolving a caller to a stable identity.
///
/// Domain-centric, not provider-specific.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The credential is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired credential")]
    InvalidCredential,

    /// The credential has expired.
    #[error("Credential expired")]
    CredentialExpired,

    /// The identity provider is unavailable (network, config, etc.).
    #[error("Identity provider unavailable: {0}")]
    ProviderUnavailable(String),
}

impl AuthError {
    /// Creates a provider unavailable error with a message.
    pub fn provider_unavailable(message: impl Into<String>) -> Self {
        Self::ProviderUnavailable(message.into())
    }
}
