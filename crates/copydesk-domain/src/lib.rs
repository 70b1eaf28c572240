//! Copydesk Domain Layer
//!
//! This crate contains the core data model for copydesk: the request and
//! response shapes for the four generative operations, the enums the UI layer
//! offers as fixed choices, and the trait interface to the generative model.
//!
//! ## Key Concepts
//!
//! - **Requests** are immutable once submitted; enum fields are valid by
//!   construction and never revalidated downstream.
//! - **Responses** always carry data: every response type has a deterministic
//!   fallback value, so callers receive best-effort data or placeholder data,
//!   never "no data".
//! - **TextGenerator** is the single seam to the hosted model. Infrastructure
//!   implementations live in `copydesk-llm`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod conversion;
pub mod copy;
pub mod theme;
pub mod traits;

// Re-exports for convenience
pub use analysis::{ErrorAnalysisRequest, ErrorAnalysisResponse, Language};
pub use conversion::{ConversionRequest, ConversionResponse};
pub use copy::{CopyRequest, CopyResponse, FavoriteCopy, ServiceDomain, Tone, UiComponent};
pub use theme::Theme;
pub use traits::{ModelVariant, TextGenerator};
