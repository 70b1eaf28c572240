//! Trait definitions for external interactions
//!
//! These traits define the boundary between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use async_trait::async_trait;

/// Which of the two hosted model variants to invoke.
///
/// The mapping to concrete model identifiers lives in the infrastructure
/// layer (`copydesk-llm`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelVariant {
    /// Faster, cheaper variant for latency-sensitive short answers
    Fast,
    /// More capable variant for structured generation
    Capable,
}

impl ModelVariant {
    /// Get the variant name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelVariant::Fast => "fast",
            ModelVariant::Capable => "capable",
        }
    }
}

/// Trait for generative model operations
///
/// Implemented by the infrastructure layer (`copydesk-llm`). One prompt in,
/// raw completion text out; a single request/response round trip with no
/// retry or streaming.
#[async_trait]
pub trait TextGenerator {
    /// Error type for model invocations
    type Error: std::fmt::Display;

    /// Send a single-turn prompt to the chosen model variant
    async fn generate(&self, variant: ModelVariant, prompt: &str) -> Result<String, Self::Error>;
}
