//! Gemini adapter for the InsightGenerator port.
//!
//! Calls the `generateContent` endpoint with a prompt asking for a single
//! JSON object of industry insight fields, then parses that object out of
//! the model's text response. One attempt per call; retries are not this
//! crate's concern.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::foundation::Industry;
use crate::domain::insight::InsightPayload;
use crate::ports::{GeneratorError, InsightGenerator};

/// Configuration for the Gemini generator.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use (e.g. "gemini-1.5-flash").
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gemini-1.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Gemini implementation of the InsightGenerator port.
pub struct GeminiInsightGenerator {
    config: GeminiConfig,
    client: Client,
}

impl GeminiInsightGenerator {
    /// Creates a new generator with the given configuration.
    pub fn new(config: GeminiConfig) -> Result<Self, GeneratorError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GeneratorError::network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    fn prompt_for(industry: &Industry) -> String {
        format!(
            "Analyze the current state of the {industry} industry and provide \
             insights in ONLY the following JSON format without any additional \
             notes or explanation:\n\
             {{\n\
               \"salaryRanges\": [{{ \"role\": \"string\", \"min\": number, \"max\": number, \"median\": number, \"location\": \"string\" }}],\n\
               \"growthRate\": number,\n\
               \"demandLevel\": \"High\" | \"Medium\" | \"Low\",\n\
               \"topSkills\": [\"skill1\", \"skill2\"],\n\
               \"marketOutlook\": \"Positive\" | \"Neutral\" | \"Negative\",\n\
               \"keyTrends\": [\"trend1\", \"trend2\"],\n\
               \"recommendedSkills\": [\"skill1\", \"skill2\"]\n\
             }}\n\
             Include at least 5 common roles for salary ranges, growth rate as \
             a percentage, and at least 5 skills and trends.",
            industry = industry.as_str()
        )
    }

    /// Pulls the JSON object out of the model's text answer, tolerating
    /// markdown code fences around it.
    fn parse_payload(text: &str) -> Result<InsightPayload, GeneratorError> {
        let cleaned = text
            .trim()
            .trim_start_matches("```json")
            .trim_start_matches("```")
            .trim_end_matches("```")
            .trim();

        match serde_json::from_str::<serde_json::Value>(cleaned) {
            Ok(serde_json::Value::Object(fields)) => Ok(InsightPayload::new(fields)),
            Ok(other) => Err(GeneratorError::invalid_response(format!(
                "Expected a JSON object, got {}",
                other
            ))),
            Err(e) => Err(GeneratorError::invalid_response(format!(
                "Response is not valid JSON: {}",
                e
            ))),
        }
    }
}

#[async_trait]
impl InsightGenerator for GeminiInsightGenerator {
    async fn generate(&self, industry: &Industry) -> Result<InsightPayload, GeneratorError> {
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: Self::prompt_for(industry),
                }],
            }],
        };

        let response = self
            .client
            .post(self.generate_url())
            .header("x-goog-api-key", self.config.api_key())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeneratorError::Timeout {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else {
                    GeneratorError::network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GeneratorError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let body: GeminiResponse = response
            .json()
            .await
            .map_err(|e| GeneratorError::invalid_response(e.to_string()))?;

        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| GeneratorError::invalid_response("No candidates in response"))?;

        Self::parse_payload(&text)
    }
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiResponseContent,
}

#[derive(Debug, Deserialize)]
struct GeminiResponseContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponsePart {
    text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_json_object() {
        let payload =
            GeminiInsightGenerator::parse_payload(r#"{"growthRate": 4.2}"#).unwrap();
        assert_eq!(
            payload.as_object().get("growthRate"),
            Some(&serde_json::json!(4.2))
        );
    }

    #[test]
    fn parses_fenced_json_object() {
        let text = "```json\n{\"demandLevel\": \"High\"}\n```";
        let payload = GeminiInsightGenerator::parse_payload(text).unwrap();
        assert_eq!(
            payload.as_object().get("demandLevel"),
            Some(&serde_json::json!("High"))
        );
    }

    #[test]
    fn rejects_non_object_response() {
        assert!(GeminiInsightGenerator::parse_payload("[1, 2, 3]").is_err());
        assert!(GeminiInsightGenerator::parse_payload("not json at all").is_err());
    }

    #[test]
    fn prompt_names_the_industry() {
        let industry = Industry::new("finance-banking").unwrap();
        let prompt = GeminiInsightGenerator::prompt_for(&industry);
        assert!(prompt.contains("finance-banking"));
    }
}
