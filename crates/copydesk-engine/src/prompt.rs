//! Prompt construction for the four operations
//!
//! Every prompt follows the same template: role framing, explicit
//! requirements as a bullet list, the user content interpolated verbatim, an
//! output-format example, and an instruction to emit only that format.
//!
//! User content is interpolated without any escaping, so a crafted input can
//! steer the model off-format. The extraction layer absorbs the damage by
//! falling back, but this is a known prompt-injection exposure.

use copydesk_domain::{ConversionRequest, CopyRequest, ErrorAnalysisRequest};

/// Fenced-block tags accepted for type-definition output, in priority order
pub const TYPE_BLOCK_TAGS: &[&str] = &["typescript", "ts"];

/// Fenced-block tags accepted for JSON example output, in priority order
pub const JSON_BLOCK_TAGS: &[&str] = &["json"];

/// Build the UX copy generation prompt
pub fn copy_prompt(request: &CopyRequest) -> String {
    format!(
        r#"You are a professional UX writer.

Based on the inputs below (component type, tone, service domain, situation),
write clear, user-friendly UX copy of roughly 20-30 characters.

Requirements:
- Follow UX writing principles: concise, clear, purposeful
- The copy must fit the character of the component
- Provide exactly 3 versions of the copy
- Each version must work on its own

Input:
UI component: {component}
Tone: {tone}
Service domain: {service}
Situation: {detail}

Output format (JSON):
{{
  "suggestions": ["copy 1", "copy 2", "copy 3"]
}}

Respond with JSON only, in exactly that format."#,
        component = request.component.label(),
        tone = request.tone.label(),
        service = request.service.label(),
        detail = request.detail,
    )
}

/// Build the error-analysis prompt
pub fn error_analysis_prompt(request: &ErrorAnalysisRequest) -> String {
    let language = request.language.display_name();
    format!(
        r#"You are an experienced developer and technical support specialist.

Analyze the error message below and explain the cause and the fix in {language},
briefly and clearly.

Requirements:
- Summary: explain the root cause in 2-3 sentences
- Solution: give concrete, actionable steps
- Answer in {language}
- Use technical terms precisely

Error message:
{message}

Output format (JSON):
{{
  "summary": "root cause (2-3 sentences)",
  "solution": "fix (step by step)"
}}

Respond with JSON only, in exactly that format."#,
        language = language,
        message = request.error_message,
    )
}

/// Build the conversion prompt for either direction
pub fn conversion_prompt(request: &ConversionRequest) -> String {
    match request {
        ConversionRequest::JsonToType { json, .. } => {
            json_to_type_prompt(json, request.type_name())
        }
        ConversionRequest::TypeToJson { definition } => type_to_json_prompt(definition),
    }
}

fn json_to_type_prompt(json: &str, type_name: &str) -> String {
    format!(
        r#"You are an expert TypeScript developer.

Convert the following JSON data into TypeScript interfaces.

Requirements:
- Infer exact types (string, number, boolean, null, undefined, ...)
- Split nested objects into separate interfaces
- Represent array types appropriately
- Use ? for optional fields
- Do not include comments
- Top-level interface name: {type_name}

JSON data:
```json
{json}
```

Output format:
```typescript
// converted TypeScript code
```

Output TypeScript code only. No explanation."#,
        type_name = type_name,
        json = json,
    )
}

fn type_to_json_prompt(definition: &str) -> String {
    format!(
        r#"You are an expert TypeScript developer.

Generate a realistic JSON data example from the following TypeScript
interface/type definitions.

Requirements:
- Use realistic values that match each declared type
- Include every required field
- Optional fields may be omitted
- Arrays should contain 1-2 elements
- The example must be directly usable data

TypeScript code:
```typescript
{definition}
```

Output format:
```json
// generated JSON example
```

Output valid JSON only. No explanation."#,
        definition = definition,
    )
}

/// Build the daily-concept prompt
pub fn daily_concept_prompt() -> String {
    DAILY_CONCEPT_INSTRUCTIONS.to_string()
}

const DAILY_CONCEPT_INSTRUCTIONS: &str = r#"You are a front-end development expert.

Explain one core front-end concept that is commonly used but subtly confusing
or often misunderstood.

Requirements:
- A React, TypeScript, or JavaScript concept front-end developers meet daily
- One that developers frequently confuse or understand only vaguely
- A concise, clear explanation (2-3 sentences)
- Include an insight that applies directly in day-to-day work
- An example or analogy is welcome

Output format:
- Title: the concept name
- Explanation: 2-3 concise sentences

Example:
"Reconciliation is not re-rendering. React only applies the changed parts to the DOM."

Answer in English."#;

#[cfg(test)]
mod tests {
    use super::*;
    use copydesk_domain::{Language, ServiceDomain, Tone, UiComponent};

    fn sample_copy_request() -> CopyRequest {
        CopyRequest {
            component: UiComponent::Dialog,
            tone: Tone::Formal,
            service: ServiceDomain::Finance,
            detail: "confirm account closure".to_string(),
        }
    }

    #[test]
    fn test_copy_prompt_interpolates_labels() {
        let prompt = copy_prompt(&sample_copy_request());
        assert!(prompt.contains("confirm/cancel dialog"));
        assert!(prompt.contains("formal"));
        assert!(prompt.contains("finance"));
        assert!(prompt.contains("confirm account closure"));
    }

    #[test]
    fn test_copy_prompt_demands_json_only() {
        let prompt = copy_prompt(&sample_copy_request());
        assert!(prompt.contains(r#""suggestions""#));
        assert!(prompt.contains("Respond with JSON only"));
    }

    #[test]
    fn test_error_analysis_prompt_names_language() {
        let request = ErrorAnalysisRequest {
            error_message: "TypeError: undefined is not a function".to_string(),
            language: Language::Ja,
        };
        let prompt = error_analysis_prompt(&request);
        assert!(prompt.contains("Japanese"));
        assert!(prompt.contains("TypeError: undefined is not a function"));
        assert!(prompt.contains(r#""summary""#));
        assert!(prompt.contains(r#""solution""#));
    }

    #[test]
    fn test_json_to_type_prompt_uses_type_name() {
        let request = ConversionRequest::JsonToType {
            json: r#"{"id": 1}"#.to_string(),
            type_name: Some("User".to_string()),
        };
        let prompt = conversion_prompt(&request);
        assert!(prompt.contains("interface name: User"));
        assert!(prompt.contains(r#"{"id": 1}"#));
    }

    #[test]
    fn test_json_to_type_prompt_defaults_name() {
        let request = ConversionRequest::JsonToType {
            json: "{}".to_string(),
            type_name: None,
        };
        let prompt = conversion_prompt(&request);
        assert!(prompt.contains("interface name: Data"));
    }

    #[test]
    fn test_type_to_json_prompt_embeds_definition() {
        let request = ConversionRequest::TypeToJson {
            definition: "interface User { id: number }".to_string(),
        };
        let prompt = conversion_prompt(&request);
        assert!(prompt.contains("interface User { id: number }"));
        assert!(prompt.contains("Output valid JSON only"));
    }

    #[test]
    fn test_daily_concept_prompt_is_fixed() {
        let prompt = daily_concept_prompt();
        assert!(prompt.contains("front-end development expert"));
        assert!(prompt.contains("2-3 sentences"));
    }
}
