//! JWT adapter for the IdentityResolver port.
//!
//! Validates an HS256-signed bearer token and maps its `sub` claim to the
//! stable caller identity. Issuer and expiry are validated; the signing
//! secret is shared with the identity provider that mints the tokens.

use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use crate::domain::foundation::{AuthError, CallerIdentity};
use crate::ports::IdentityResolver;

/// Configuration for the JWT identity resolver.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC signing secret shared with the identity provider.
    secret: Secret<String>,
    /// Expected issuer claim; tokens from other issuers are rejected.
    pub issuer: String,
}

impl JwtConfig {
    /// Creates a new configuration.
    pub fn new(secret: impl Into<String>, issuer: impl Into<String>) -> Self {
        Self {
            secret: Secret::new(secret.into()),
            issuer: issuer.into(),
        }
    }

    fn secret(&self) -> &str {
        self.secret.expose_secret()
    }
}

/// Claims we read from a validated token.
#[derive(Debug, Deserialize)]
struct Claims {
    /// Subject - the stable caller identity.
    sub: String,

    /// Expiry timestamp (validated by jsonwebtoken).
    #[allow(dead_code)]
    exp: i64,
}

/// JWT implementation of the IdentityResolver port.
pub struct JwtIdentityResolver {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtIdentityResolver {
    /// Creates a resolver from the given configuration.
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        Self {
            decoding_key: DecodingKey::from_secret(config.secret().as_bytes()),
            validation,
        }
    }
}

#[async_trait]
impl IdentityResolver for JwtIdentityResolver {
    async fn resolve(&self, access_token: &str) -> Result<CallerIdentity, AuthError> {
        let token = decode::<Claims>(access_token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::CredentialExpired,
                _ => AuthError::InvalidCredential,
            })?;

        CallerIdentity::new(token.claims.sub).map_err(|_| AuthError::InvalidCredential)
    }
}
