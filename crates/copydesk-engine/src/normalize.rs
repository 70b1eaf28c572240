//! Shape validation and coercion of extracted structures
//!
//! A parsed value is not yet a usable response: required keys may be missing,
//! arrays may have the wrong length. Normalizers verify the shape and coerce
//! it into the caller's expected type, or name the failure so the engine can
//! substitute the task-specific fallback in one visible branch.

use copydesk_domain::{CopyResponse, ErrorAnalysisResponse};
use serde_json::Value;
use thiserror::Error;

/// Number of copy suggestions a normalized response carries
pub const SUGGESTION_COUNT: usize = 3;

/// Named reasons shape validation can fail
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeFailure {
    /// A required field is absent or empty
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// A field exists but has the wrong shape
    #[error("field `{0}` has the wrong shape")]
    WrongShape(&'static str),
}

/// Normalize a parsed copy-generation response.
///
/// `suggestions` must be a non-empty array of strings; output is capped at
/// exactly [`SUGGESTION_COUNT`] entries by taking the first ones in original
/// order.
pub fn normalize_copy(value: &Value) -> Result<CopyResponse, ShapeFailure> {
    let array = value
        .get("suggestions")
        .ok_or(ShapeFailure::MissingField("suggestions"))?
        .as_array()
        .ok_or(ShapeFailure::WrongShape("suggestions"))?;

    if array.is_empty() {
        return Err(ShapeFailure::MissingField("suggestions"));
    }

    let suggestions = array
        .iter()
        .take(SUGGESTION_COUNT)
        .map(|entry| {
            entry
                .as_str()
                .map(str::to_string)
                .ok_or(ShapeFailure::WrongShape("suggestions"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let description = value
        .get("description")
        .and_then(Value::as_str)
        .map(str::to_string);

    Ok(CopyResponse {
        suggestions,
        description,
    })
}

/// Normalize a parsed error-analysis response.
///
/// Both `summary` and `solution` are required and must be non-empty. On any
/// failure the engine substitutes the full fallback pair; a real summary is
/// never merged with a fallback solution.
pub fn normalize_error_analysis(value: &Value) -> Result<ErrorAnalysisResponse, ShapeFailure> {
    let summary = required_string(value, "summary")?;
    let solution = required_string(value, "solution")?;

    Ok(ErrorAnalysisResponse { summary, solution })
}

fn required_string(value: &Value, field: &'static str) -> Result<String, ShapeFailure> {
    let s = value
        .get(field)
        .ok_or(ShapeFailure::MissingField(field))?
        .as_str()
        .ok_or(ShapeFailure::WrongShape(field))?;

    if s.trim().is_empty() {
        return Err(ShapeFailure::MissingField(field));
    }

    Ok(s.to_string())
}
