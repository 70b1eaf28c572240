//! Copydesk Engine
//!
//! Structured extraction from generative text: the one pattern this system is
//! built around, repeated across four operations.
//!
//! # Architecture
//!
//! ```text
//! Request → PromptBuilder → TextGenerator → Extract → Validate → Response
//!                                              │          │
//!                                              └──────────┴──> fixed fallback
//! ```
//!
//! Each operation builds a natural-language prompt with strict output-format
//! directives, sends it to the hosted model, then makes a best-effort attempt
//! to recover structure (a JSON object or a fenced code block) from the raw
//! completion. Anything downstream of a successful network call degrades to a
//! deterministic fallback value rather than surfacing an error; only transport
//! failures are returned as errors.
//!
//! # Example
//!
//! ```no_run
//! use copydesk_engine::Engine;
//! use copydesk_llm::MockGenerator;
//! use copydesk_domain::{CopyRequest, ServiceDomain, Tone, UiComponent};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = Engine::new(MockGenerator::new(r#"{"suggestions": ["a", "b", "c"]}"#));
//!
//! let request = CopyRequest {
//!     component: UiComponent::Button,
//!     tone: Tone::Friendly,
//!     service: ServiceDomain::Delivery,
//!     detail: "order confirmed".to_string(),
//! };
//!
//! let response = engine.generate_copy(&request).await?;
//! assert_eq!(response.suggestions.len(), 3);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod engine;
mod error;
pub mod extract;
pub mod normalize;
pub mod prompt;
pub mod state;

#[cfg(test)]
mod tests;

pub use engine::Engine;
pub use error::EngineError;
pub use extract::ExtractFailure;
pub use normalize::ShapeFailure;
pub use state::{RequestSlot, SessionState, SlotAction, SlotState};
