//! Gemini API client
//!
//! Single-turn text generation against the hosted `generateContent` endpoint.
//! One request/response round trip per call: no retry, no timeout, no
//! streaming. A missing API key is sent as an empty string and surfaces as an
//! authentication failure at call time, not at construction.

use crate::ModelInvocationError;
use async_trait::async_trait;
use copydesk_domain::{ModelVariant, TextGenerator};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default API endpoint
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Model used for latency-sensitive short answers
pub const FAST_MODEL: &str = "gemini-1.5-flash";

/// Model used for structured generation
pub const CAPABLE_MODEL: &str = "gemini-2.5-flash";

/// Client for the hosted Gemini API
pub struct GeminiClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GeminiClient {
    /// Create a new client against the default endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a new client against a custom endpoint (tests, proxies)
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Concrete model identifier for a variant
    pub fn model_id(variant: ModelVariant) -> &'static str {
        match variant {
            ModelVariant::Fast => FAST_MODEL,
            ModelVariant::Capable => CAPABLE_MODEL,
        }
    }

    async fn generate_content(
        &self,
        variant: ModelVariant,
        prompt: &str,
    ) -> Result<String, ModelInvocationError> {
        let model = Self::model_id(variant);
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, model
        );

        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        debug!(model, prompt_len = prompt.len(), "invoking model");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| ModelInvocationError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| status.to_string());
            return Err(ModelInvocationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ModelInvocationError::InvalidResponse(e.to_string()))?;

        let text: String = payload
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(ModelInvocationError::EmptyCompletion);
        }

        debug!(model, response_len = text.len(), "model responded");
        Ok(text)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    type Error = ModelInvocationError;

    async fn generate(&self, variant: ModelVariant, prompt: &str) -> Result<String, Self::Error> {
        self.generate_content(variant, prompt).await
    }
}
