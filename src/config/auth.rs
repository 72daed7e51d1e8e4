//! Authentication configuration (JWT validation)

use secrecy::Secret;
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Authentication configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// HMAC signing secret shared with the identity provider
    pub jwt_secret: Secret<String>,

    /// Expected issuer claim
    pub jwt_issuer: String,
}

impl AuthConfig {
    /// Validate authentication configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.jwt_issuer.is_empty() {
            return Err(ValidationError::MissingRequired("auth.jwt_issuer"));
        }
        if *environment == Environment::Production && !self.jwt_issuer.starts_with("https://") {
            return Err(ValidationError::IssuerMustBeHttps);
        }
        Ok(())
    }
}
