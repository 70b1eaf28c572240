//! The engine: four operations over one extraction pipeline

use crate::error::EngineError;
use crate::extract;
use crate::normalize;
use crate::prompt;
use copydesk_domain::{
    ConversionRequest, ConversionResponse, CopyRequest, CopyResponse, ErrorAnalysisRequest,
    ErrorAnalysisResponse, ModelVariant, TextGenerator,
};
use tracing::{debug, info, warn};

/// Runs the four generative operations against a [`TextGenerator`].
///
/// Each operation is one request/response round trip: build the prompt,
/// invoke the model, extract structure from the raw completion, validate the
/// shape. Extraction or validation failure substitutes the task's fixed
/// fallback value; only a failed model invocation is returned as an error.
pub struct Engine<G: TextGenerator> {
    generator: G,
}

impl<G> Engine<G>
where
    G: TextGenerator + Send + Sync,
{
    /// Create a new engine over a generator
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Generate three UX copy suggestions for a request
    pub async fn generate_copy(&self, request: &CopyRequest) -> Result<CopyResponse, EngineError> {
        let prompt = prompt::copy_prompt(request);
        let raw = self.invoke(ModelVariant::Capable, &prompt).await?;

        let response = match extract::parse_json_object(&raw) {
            Ok(value) => match normalize::normalize_copy(&value) {
                Ok(response) => response,
                Err(reason) => {
                    warn!(%reason, "copy response failed shape validation, substituting fallback");
                    CopyResponse::shape_fallback()
                }
            },
            Err(reason) => {
                warn!(%reason, "no usable JSON in copy response, substituting fallback");
                CopyResponse::parse_fallback()
            }
        };

        info!(
            component = request.component.as_str(),
            suggestions = response.suggestions.len(),
            "copy generated"
        );
        Ok(response)
    }

    /// Analyze an error message and explain cause and fix
    pub async fn analyze_error(
        &self,
        request: &ErrorAnalysisRequest,
    ) -> Result<ErrorAnalysisResponse, EngineError> {
        let prompt = prompt::error_analysis_prompt(request);
        let raw = self.invoke(ModelVariant::Fast, &prompt).await?;

        let response = match extract::parse_json_object(&raw) {
            Ok(value) => match normalize::normalize_error_analysis(&value) {
                Ok(response) => response,
                Err(reason) => {
                    warn!(%reason, "analysis response failed shape validation, substituting fallback");
                    ErrorAnalysisResponse::shape_fallback()
                }
            },
            Err(reason) => {
                warn!(%reason, "no usable JSON in analysis response, substituting fallback");
                ErrorAnalysisResponse::parse_fallback()
            }
        };

        info!(language = request.language.as_str(), "error analyzed");
        Ok(response)
    }

    /// Convert between JSON data and type definitions
    pub async fn convert(
        &self,
        request: &ConversionRequest,
    ) -> Result<ConversionResponse, EngineError> {
        let prompt = prompt::conversion_prompt(request);
        let raw = self.invoke(ModelVariant::Capable, &prompt).await?;

        let result = match request {
            ConversionRequest::JsonToType { .. } => {
                // No fenced block means the model answered with bare code
                extract::extract_fenced_block(&raw, prompt::TYPE_BLOCK_TAGS)
                    .unwrap_or_else(|| raw.trim().to_string())
            }
            ConversionRequest::TypeToJson { .. } => {
                let candidate = extract::extract_fenced_block(&raw, prompt::JSON_BLOCK_TAGS)
                    .unwrap_or_else(|| raw.trim().to_string());

                // Validity is checked but the text is returned either way
                if serde_json::from_str::<serde_json::Value>(&candidate).is_err() {
                    warn!("generated JSON example does not parse, returning it as-is");
                }
                candidate
            }
        };

        info!(result_len = result.len(), "conversion complete");
        Ok(ConversionResponse {
            result,
            explanation: None,
        })
    }

    /// Fetch the daily front-end concept as cleaned prose
    pub async fn daily_concept(&self) -> Result<String, EngineError> {
        let prompt = prompt::daily_concept_prompt();
        let raw = self.invoke(ModelVariant::Capable, &prompt).await?;

        // Code blocks are dropped, the rest of the markdown is kept
        let concept = extract::strip_fenced_blocks(&raw);
        info!(concept_len = concept.len(), "daily concept fetched");
        Ok(concept)
    }

    async fn invoke(&self, variant: ModelVariant, prompt: &str) -> Result<String, EngineError> {
        debug!(
            variant = variant.as_str(),
            prompt_len = prompt.len(),
            "invoking model"
        );
        self.generator
            .generate(variant, prompt)
            .await
            .map_err(|e| EngineError::Model(e.to_string()))
    }
}
