//! Insight generator configuration (Gemini)

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ValidationError;

/// Insight generator configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Gemini API key
    pub gemini_api_key: Secret<String>,

    /// Model to use
    #[serde(default = "default_model")]
    pub model: String,

    /// Generation request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl AiConfig {
    /// Validate generator configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.gemini_api_key.expose_secret().is_empty() {
            return Err(ValidationError::MissingGeneratorKey);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_timeout() -> u64 {
    30
}
