//! Error types for the engine

use thiserror::Error;

/// Errors an engine operation can return.
///
/// Only transport-level failure surfaces as an error. Extraction and
/// validation failures downstream of a successful network call are recovered
/// with fallback values and never reach the caller as errors.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The generative model could not be reached or refused the call
    #[error("Model error: {0}")]
    Model(String),
}
