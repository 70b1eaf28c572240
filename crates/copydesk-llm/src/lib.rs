//! Copydesk LLM Provider Layer
//!
//! Implementations of the `TextGenerator` trait from `copydesk-domain`.
//!
//! # Providers
//!
//! - `MockGenerator`: Deterministic mock for testing
//! - `GeminiClient`: Hosted Gemini API integration
//!
//! # Examples
//!
//! ```
//! use copydesk_llm::MockGenerator;
//! use copydesk_domain::{ModelVariant, TextGenerator};
//!
//! # async fn example() {
//! let provider = MockGenerator::new("Hello from the model!");
//! let result = provider.generate(ModelVariant::Fast, "test prompt").await.unwrap();
//! assert_eq!(result, "Hello from the model!");
//! # }
//! ```

#![warn(missing_docs)]

pub mod gemini;

use async_trait::async_trait;
use copydesk_domain::{ModelVariant, TextGenerator};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use gemini::{GeminiClient, DEFAULT_BASE_URL};

/// Errors that can occur while invoking the hosted model
#[derive(Error, Debug)]
pub enum ModelInvocationError {
    /// Network-level failure reaching the API
    #[error("Transport error: {0}")]
    Transport(String),

    /// The API answered with a non-success status (including auth failures)
    #[error("API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or status text
        message: String,
    },

    /// The API answered but the payload could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The API answered with no completion text at all
    #[error("Model returned an empty completion")]
    EmptyCompletion,
}

/// Mock generator for deterministic testing
///
/// Returns pre-configured responses without making any network calls.
///
/// # Examples
///
/// ```
/// use copydesk_llm::MockGenerator;
/// use copydesk_domain::{ModelVariant, TextGenerator};
///
/// # async fn example() {
/// let mut provider = MockGenerator::new("default");
/// provider.add_response("prompt1", "response1");
/// assert_eq!(provider.generate(ModelVariant::Fast, "prompt1").await.unwrap(), "response1");
/// assert_eq!(provider.generate(ModelVariant::Fast, "other").await.unwrap(), "default");
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MockGenerator {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, String>>>,
    calls: Arc<Mutex<Vec<(ModelVariant, String)>>>,
}

// Sentinel value marking a prompt that should fail
const ERROR_SENTINEL: &str = "__ERROR__";

impl MockGenerator {
    /// Create a new MockGenerator with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a specific response for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), response.into());
    }

    /// Configure a transport failure for a specific prompt
    pub fn add_error(&mut self, prompt: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), ERROR_SENTINEL.to_string());
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// The model variant of the most recent call, if any
    pub fn last_variant(&self) -> Option<ModelVariant> {
        self.calls.lock().unwrap().last().map(|(v, _)| *v)
    }

    /// The prompt of the most recent call, if any
    pub fn last_prompt(&self) -> Option<String> {
        self.calls.lock().unwrap().last().map(|(_, p)| p.clone())
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    type Error = ModelInvocationError;

    async fn generate(&self, variant: ModelVariant, prompt: &str) -> Result<String, Self::Error> {
        self.calls
            .lock()
            .unwrap()
            .push((variant, prompt.to_string()));

        let responses = self.responses.lock().unwrap();
        if let Some(response) = responses.get(prompt) {
            if response == ERROR_SENTINEL {
                return Err(ModelInvocationError::Transport(
                    "Mock transport failure".to_string(),
                ));
            }
            return Ok(response.clone());
        }

        Ok(self.default_response.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_default_response() {
        let provider = MockGenerator::new("Test response");
        let result = provider.generate(ModelVariant::Fast, "any prompt").await;
        assert_eq!(result.unwrap(), "Test response");
    }

    #[tokio::test]
    async fn test_mock_specific_responses() {
        let mut provider = MockGenerator::default();
        provider.add_response("hello", "world");
        provider.add_response("foo", "bar");

        assert_eq!(
            provider.generate(ModelVariant::Fast, "hello").await.unwrap(),
            "world"
        );
        assert_eq!(
            provider.generate(ModelVariant::Capable, "foo").await.unwrap(),
            "bar"
        );
        assert_eq!(
            provider.generate(ModelVariant::Fast, "unknown").await.unwrap(),
            "Default mock response"
        );
    }

    #[tokio::test]
    async fn test_mock_records_calls() {
        let provider = MockGenerator::new("test");
        assert_eq!(provider.call_count(), 0);

        provider
            .generate(ModelVariant::Capable, "prompt1")
            .await
            .unwrap();
        assert_eq!(provider.call_count(), 1);
        assert_eq!(provider.last_variant(), Some(ModelVariant::Capable));
        assert_eq!(provider.last_prompt().as_deref(), Some("prompt1"));
    }

    #[tokio::test]
    async fn test_mock_error_injection() {
        let mut provider = MockGenerator::default();
        provider.add_error("bad prompt");

        let result = provider.generate(ModelVariant::Fast, "bad prompt").await;
        assert!(matches!(
            result.unwrap_err(),
            ModelInvocationError::Transport(_)
        ));
    }

    #[tokio::test]
    async fn test_mock_clone_shares_state() {
        let provider1 = MockGenerator::new("test");
        let provider2 = provider1.clone();

        provider1.generate(ModelVariant::Fast, "test").await.unwrap();

        // Both share call history through the Arc
        assert_eq!(provider1.call_count(), 1);
        assert_eq!(provider2.call_count(), 1);
    }
}
