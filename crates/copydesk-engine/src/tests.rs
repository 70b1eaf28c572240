//! Engine tests driven by the deterministic mock generator

use crate::{Engine, EngineError};
use copydesk_domain::{
    ConversionRequest, CopyRequest, CopyResponse, ErrorAnalysisRequest, ErrorAnalysisResponse,
    Language, ModelVariant, ServiceDomain, Tone, UiComponent,
};
use copydesk_llm::MockGenerator;

fn copy_request() -> CopyRequest {
    CopyRequest {
        component: UiComponent::Button,
        tone: Tone::Friendly,
        service: ServiceDomain::Delivery,
        detail: "order confirmed".to_string(),
    }
}

fn analysis_request() -> ErrorAnalysisRequest {
    ErrorAnalysisRequest {
        error_message: "ECONNREFUSED 127.0.0.1:5432".to_string(),
        language: Language::En,
    }
}

#[tokio::test]
async fn test_copy_happy_path_with_prose_wrapping() {
    let mock = MockGenerator::new(
        "Sure! Here you go:\n{\"suggestions\": [\"Order placed!\", \"On its way!\", \"All set!\"]}",
    );
    let engine = Engine::new(mock);

    let response = engine.generate_copy(&copy_request()).await.unwrap();
    assert_eq!(
        response.suggestions,
        vec!["Order placed!", "On its way!", "All set!"]
    );
}

#[tokio::test]
async fn test_copy_caps_five_suggestions_to_three() {
    let mock =
        MockGenerator::new(r#"{"suggestions": ["1", "2", "3", "4", "5"]}"#);
    let engine = Engine::new(mock);

    let response = engine.generate_copy(&copy_request()).await.unwrap();
    assert_eq!(response.suggestions, vec!["1", "2", "3"]);
}

#[tokio::test]
async fn test_copy_unparseable_output_yields_parse_fallback_verbatim() {
    let mock = MockGenerator::new("I'm sorry, I can't help with that.");
    let engine = Engine::new(mock);

    let response = engine.generate_copy(&copy_request()).await.unwrap();
    assert_eq!(response, CopyResponse::parse_fallback());
}

#[tokio::test]
async fn test_copy_wrong_shape_yields_shape_fallback() {
    let mock = MockGenerator::new(r#"{"suggestions": "just one string"}"#);
    let engine = Engine::new(mock);

    let response = engine.generate_copy(&copy_request()).await.unwrap();
    assert_eq!(response, CopyResponse::shape_fallback());
}

#[tokio::test]
async fn test_copy_uses_capable_variant() {
    let mock = MockGenerator::new(r#"{"suggestions": ["a"]}"#);
    let engine = Engine::new(mock.clone());

    engine.generate_copy(&copy_request()).await.unwrap();
    assert_eq!(mock.last_variant(), Some(ModelVariant::Capable));
}

#[tokio::test]
async fn test_transport_error_surfaces_as_engine_error() {
    let mut mock = MockGenerator::default();
    let prompt = crate::prompt::copy_prompt(&copy_request());
    mock.add_error(prompt);
    let engine = Engine::new(mock);

    let result = engine.generate_copy(&copy_request()).await;
    assert!(matches!(result, Err(EngineError::Model(_))));
}

#[tokio::test]
async fn test_analysis_happy_path() {
    let mock = MockGenerator::new(
        r#"{"summary": "The database is not accepting connections.", "solution": "Start postgres and check the port."}"#,
    );
    let engine = Engine::new(mock.clone());

    let response = engine.analyze_error(&analysis_request()).await.unwrap();
    assert_eq!(response.summary, "The database is not accepting connections.");
    assert_eq!(mock.last_variant(), Some(ModelVariant::Fast));
}

#[tokio::test]
async fn test_analysis_missing_solution_substitutes_full_pair() {
    let mock = MockGenerator::new(r#"{"summary": "A very real and useful summary."}"#);
    let engine = Engine::new(mock);

    let response = engine.analyze_error(&analysis_request()).await.unwrap();
    // The real summary must not leak into the fallback pair
    assert_eq!(response, ErrorAnalysisResponse::shape_fallback());
}

#[tokio::test]
async fn test_analysis_unparseable_output_yields_parse_fallback() {
    let mock = MockGenerator::new("no structure here");
    let engine = Engine::new(mock);

    let response = engine.analyze_error(&analysis_request()).await.unwrap();
    assert_eq!(response, ErrorAnalysisResponse::parse_fallback());
}

#[tokio::test]
async fn test_json_to_type_extracts_primary_tagged_block() {
    let raw = "Here is the interface:\n```typescript\ninterface Data { id: number }\n```\nEnjoy!";
    let engine = Engine::new(MockGenerator::new(raw));

    let request = ConversionRequest::JsonToType {
        json: r#"{"id": 1}"#.to_string(),
        type_name: None,
    };
    let response = engine.convert(&request).await.unwrap();
    assert_eq!(response.result, "interface Data { id: number }");
}

#[tokio::test]
async fn test_json_to_type_accepts_ts_alias() {
    let raw = "```ts\ninterface Data { id: number }\n```";
    let engine = Engine::new(MockGenerator::new(raw));

    let request = ConversionRequest::JsonToType {
        json: r#"{"id": 1}"#.to_string(),
        type_name: None,
    };
    let response = engine.convert(&request).await.unwrap();
    assert_eq!(response.result, "interface Data { id: number }");
}

#[tokio::test]
async fn test_json_to_type_without_fences_returns_full_trimmed_text() {
    let raw = "  interface Data { id: number }  ";
    let engine = Engine::new(MockGenerator::new(raw));

    let request = ConversionRequest::JsonToType {
        json: r#"{"id": 1}"#.to_string(),
        type_name: None,
    };
    let response = engine.convert(&request).await.unwrap();
    assert_eq!(response.result, "interface Data { id: number }");
}

#[tokio::test]
async fn test_type_to_json_extracts_json_block() {
    let raw = "```json\n{\"id\": 1}\n```";
    let engine = Engine::new(MockGenerator::new(raw));

    let request = ConversionRequest::TypeToJson {
        definition: "interface Data { id: number }".to_string(),
    };
    let response = engine.convert(&request).await.unwrap();
    assert_eq!(response.result, "{\"id\": 1}");
}

#[tokio::test]
async fn test_type_to_json_returns_invalid_json_as_is() {
    let raw = "```json\n{id: 1,}\n```";
    let engine = Engine::new(MockGenerator::new(raw));

    let request = ConversionRequest::TypeToJson {
        definition: "interface Data { id: number }".to_string(),
    };
    let response = engine.convert(&request).await.unwrap();
    assert_eq!(response.result, "{id: 1,}");
}

#[tokio::test]
async fn test_daily_concept_strips_code_blocks() {
    let raw = "Closures capture variables, not values.\n```js\nlet x = 1;\n```\nUse them deliberately.";
    let engine = Engine::new(MockGenerator::new(raw));

    let concept = engine.daily_concept().await.unwrap();
    assert_eq!(
        concept,
        "Closures capture variables, not values.\nUse them deliberately."
    );
    assert!(!concept.contains("let x = 1;"));
}
