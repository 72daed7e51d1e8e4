//! Mock identity resolver for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::foundation::{AuthError, CallerIdentity};
use crate::ports::IdentityResolver;

/// Token-to-identity map for tests; unknown tokens are rejected.
pub struct MockIdentityResolver {
    identities: RwLock<HashMap<String, CallerIdentity>>,
}

impl MockIdentityResolver {
    /// Creates an empty resolver that rejects every token.
    pub fn new() -> Self {
        Self {
            identities: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a token as resolving to `identity`.
    pub fn with_identity(self, token: impl Into<String>, identity: CallerIdentity) -> Self {
        self.identities
            .write()
            .expect("MockIdentityResolver: lock poisoned")
            .insert(token.into(), identity);
        self
    }
}

impl Default for MockIdentityResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityResolver for MockIdentityResolver {
    async fn resolve(&self, access_token: &str) -> Result<CallerIdentity, AuthError> {
        self.identities
            .read()
            .expect("MockIdentityResolver: lock poisoned")
            .get(access_token)
            .cloned()
            .ok_or(AuthError::InvalidCredential)
    }
}
