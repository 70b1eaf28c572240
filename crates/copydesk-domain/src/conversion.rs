//! JSON/type-definition conversion - requests and responses

use serde::{Deserialize, Serialize};

/// Default type name when the caller does not supply one
pub const DEFAULT_TYPE_NAME: &str = "Data";

/// Conversion request, tagged by direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "direction", rename_all = "kebab-case")]
pub enum ConversionRequest {
    /// Convert JSON data into a type definition
    JsonToType {
        /// The JSON document to convert
        json: String,

        /// Name for the top-level type; defaults to [`DEFAULT_TYPE_NAME`]
        #[serde(skip_serializing_if = "Option::is_none")]
        type_name: Option<String>,
    },

    /// Generate a JSON example from a type definition
    TypeToJson {
        /// The type definition to instantiate
        definition: String,
    },
}

impl ConversionRequest {
    /// The type name to use, applying the default when absent
    pub fn type_name(&self) -> &str {
        match self {
            ConversionRequest::JsonToType {
                type_name: Some(name),
                ..
            } if !name.is_empty() => name,
            _ => DEFAULT_TYPE_NAME,
        }
    }
}

/// Result of a conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResponse {
    /// The converted code or JSON example
    pub result: String,

    /// Optional commentary from the model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}
