//! IdentityResolver port - maps a caller credential to a stable identity.
//!
//! The profile orchestrator owns identity resolution as its first step, so
//! the port takes the raw access token rather than a pre-validated user.
//! Whether the provider is Clerk, Zitadel, or a mock for testing, the
//! handlers don't change.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, CallerIdentity};

/// Resolves an access token to the caller's stable identity.
///
/// # Contract
///
/// Implementations must:
/// - Return the stable identity when the credential is valid
/// - Return `AuthError::InvalidCredential` / `CredentialExpired` for bad tokens
/// - Return `AuthError::ProviderUnavailable` for transient provider failures
/// - Perform no retries; one validation attempt per call
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// Resolve the given access token to a caller identity.
    async fn resolve(&self, access_token: &str) -> Result<CallerIdentity, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_resolver_trait_is_object_safe_and_send_sync() {
        fn _assert_trait_object(_: &dyn IdentityResolver) {}
        fn _assert_arc_send_sync<T: Send + Sync + ?Sized>() {}
        _assert_arc_send_sync::<std::sync::Arc<dyn IdentityResolver>>();
    }
}
