//! InsightGenerator port - interface to the external model call.
//!
//! The generator is the only high-latency, externally-fallible step in the
//! update flow. It must never run inside the profile's atomic transaction,
//! and no retries are attempted: one generation attempt per missing-industry
//! event.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::Industry;
use crate::domain::insight::InsightPayload;

/// Generates a structured insight payload for an industry.
#[async_trait]
pub trait InsightGenerator: Send + Sync {
    /// Generate insight content for the given industry.
    async fn generate(&self, industry: &Industry) -> Result<InsightPayload, GeneratorError>;
}

/// Failures from the external generation call.
#[derive(Debug, Clone, Error)]
pub enum GeneratorError {
    /// The provider did not respond within the request timeout.
    #[error("Generation timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Network-level failure reaching the provider.
    #[error("Network error: {0}")]
    Network(String),

    /// The provider answered with an error status.
    #[error("Provider error (status {status}): {message}")]
    Provider { status: u16, message: String },

    /// The provider's response could not be parsed into a payload.
    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),
}

impl GeneratorError {
    /// Creates a network error with a message.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates an invalid response error with a message.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }
}
