//! Error message analysis - requests and responses

use serde::{Deserialize, Serialize};

/// Language the analysis should be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Korean
    Ko,
    /// English
    En,
    /// Japanese
    Ja,
    /// Chinese
    Zh,
}

impl Language {
    /// Get the language code as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
            Language::Ja => "ja",
            Language::Zh => "zh",
        }
    }

    /// Name of the language, used to tell the model what to answer in
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Ko => "Korean",
            Language::En => "English",
            Language::Ja => "Japanese",
            Language::Zh => "Chinese",
        }
    }

    /// Parse a language from a code
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ko" => Some(Language::Ko),
            "en" => Some(Language::En),
            "ja" => Some(Language::Ja),
            "zh" => Some(Language::Zh),
            _ => None,
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid language: {}", s))
    }
}

/// Request to analyze an error message. Immutable once submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorAnalysisRequest {
    /// The raw error message to analyze
    pub error_message: String,

    /// Language the explanation should be written in
    pub language: Language,
}

/// Explanation of an error message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorAnalysisResponse {
    /// Short summary of the root cause
    pub summary: String,

    /// Concrete steps to resolve the error
    pub solution: String,
}

impl ErrorAnalysisResponse {
    /// Fallback when the model output contains no parseable JSON
    pub fn parse_fallback() -> Self {
        Self {
            summary: "The error message could not be analyzed.".to_string(),
            solution: "Check the error message again or provide more detail.".to_string(),
        }
    }

    /// Fallback when the parsed output is missing a required field.
    ///
    /// The whole pair is substituted; a real summary is never merged with a
    /// fallback solution.
    pub fn shape_fallback() -> Self {
        Self {
            summary: "Error analysis failed.".to_string(),
            solution: "Please try again.".to_string(),
        }
    }
}
