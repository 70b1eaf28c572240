//! The convert command - JSON data to type definitions and back.

use crate::cli::{ConvertArgs, ConvertDirection};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use copydesk_domain::{ConversionRequest, TextGenerator};
use copydesk_engine::Engine;

/// Run a conversion in either direction.
pub async fn execute<G>(args: &ConvertArgs, engine: &Engine<G>, formatter: &Formatter) -> Result<()>
where
    G: TextGenerator + Send + Sync,
{
    let request = build_request(&args.direction)?;
    let response = engine.convert(&request).await?;
    println!("{}", formatter.format_conversion(&response));
    Ok(())
}

fn build_request(direction: &ConvertDirection) -> Result<ConversionRequest> {
    match direction {
        ConvertDirection::JsonToType { input, file, name } => Ok(ConversionRequest::JsonToType {
            json: resolve_input(input.as_deref(), file.as_deref(), "JSON input")?,
            type_name: name.clone(),
        }),
        ConvertDirection::TypeToJson { input, file } => Ok(ConversionRequest::TypeToJson {
            definition: resolve_input(input.as_deref(), file.as_deref(), "type definition")?,
        }),
    }
}

fn resolve_input(input: Option<&str>, file: Option<&str>, what: &str) -> Result<String> {
    let text = match (input, file) {
        (Some(text), None) => text.to_string(),
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (Some(_), Some(_)) => {
            return Err(CliError::InvalidInput(format!(
                "Provide the {} inline or with --file, not both",
                what
            )))
        }
        (None, None) => {
            return Err(CliError::InvalidInput(format!(
                "Provide the {} inline or with --file",
                what
            )))
        }
    };

    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(CliError::InvalidInput(format!("The {} is empty", what)));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_input() {
        assert_eq!(
            resolve_input(Some("{\"a\": 1}"), None, "JSON input").unwrap(),
            "{\"a\": 1}"
        );
    }

    #[test]
    fn test_both_sources_rejected() {
        assert!(matches!(
            resolve_input(Some("x"), Some("y.json"), "JSON input"),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_neither_source_rejected() {
        assert!(matches!(
            resolve_input(None, None, "JSON input"),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_json_to_type_defaults_name() {
        let request = build_request(&ConvertDirection::JsonToType {
            input: Some("{\"id\": 1}".to_string()),
            file: None,
            name: None,
        })
        .unwrap();
        assert_eq!(request.type_name(), "Data");
    }
}
