//! Structured extraction from raw model output
//!
//! Models wrap structured answers in prose and markdown fences. This module
//! makes a best-effort attempt to locate the structure: the first balanced
//! JSON object span, or the content of a fenced code block chosen by tag
//! priority. The first matching span in document order always wins; there is
//! no search for a "best" match among candidates.

use serde_json::Value;
use thiserror::Error;

/// Named reasons JSON extraction can fail, so each path is testable on its own
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractFailure {
    /// The text contains no `{` at all
    #[error("no JSON object found in model output")]
    NoJsonObject,

    /// A `{` was found but never balanced by a closing `}`
    #[error("JSON object span is never closed")]
    UnbalancedJson,

    /// The balanced span did not parse as JSON.
    ///
    /// This is a hard failure for the call; later candidate spans are not
    /// retried.
    #[error("JSON parse error: {0}")]
    Parse(String),
}

/// Locate the first balanced `{...}` span in the text.
///
/// The scan is string-aware: braces inside JSON string literals (including
/// escaped quotes) do not affect nesting depth.
pub fn extract_json_span(text: &str) -> Result<&str, ExtractFailure> {
    let start = text.find('{').ok_or(ExtractFailure::NoJsonObject)?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Ok(&text[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    Err(ExtractFailure::UnbalancedJson)
}

/// Extract and parse the first balanced JSON object in the text
pub fn parse_json_object(text: &str) -> Result<Value, ExtractFailure> {
    let span = extract_json_span(text)?;
    serde_json::from_str(span).map_err(|e| ExtractFailure::Parse(e.to_string()))
}

/// Extract the content of a fenced code block.
///
/// For each tag in priority order, the first block fenced with that tag wins.
/// When no tag matches, the first unlabeled block is used. Returns `None`
/// when neither exists; callers fall back to the full trimmed text.
pub fn extract_fenced_block(text: &str, tags: &[&str]) -> Option<String> {
    let blocks = fenced_blocks(text);

    for tag in tags {
        if let Some((_, content)) = blocks.iter().find(|(t, _)| t == tag) {
            return Some(content.trim().to_string());
        }
    }

    blocks
        .iter()
        .find(|(t, _)| t.is_empty())
        .map(|(_, content)| content.trim().to_string())
}

/// Remove every fenced code block, keeping the surrounding text
pub fn strip_fenced_blocks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_fence = false;

    for line in text.lines() {
        if line.trim_start().starts_with("```") {
            in_fence = !in_fence;
            continue;
        }
        if !in_fence {
            out.push_str(line);
            out.push('\n');
        }
    }

    out.trim().to_string()
}

/// Collect all fenced blocks in document order as (tag, content) pairs
fn fenced_blocks(text: &str) -> Vec<(String, String)> {
    let mut blocks = Vec::new();
    let mut current: Option<(String, String)> = None;

    for line in text.lines() {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix("```") {
            match current.take() {
                Some((tag, content)) => blocks.push((tag, content)),
                None => current = Some((rest.trim().to_lowercase(), String::new())),
            }
            continue;
        }
        if let Some((_, content)) = current.as_mut() {
            content.push_str(line);
            content.push('\n');
        }
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip_through_prose() {
        // One balanced brace pair wrapped in prose recovers the exact object
        let json = r#"{"suggestions": ["a", "b", "c"]}"#;
        let text = format!("Here is the result:\n{}\nLet me know!", json);
        assert_eq!(extract_json_span(&text).unwrap(), json);

        let value = parse_json_object(&text).unwrap();
        assert_eq!(value["suggestions"][0], "a");
    }

    #[test]
    fn test_first_matching_span_wins() {
        let text = r#"{"first": 1} and later {"second": 2}"#;
        assert_eq!(extract_json_span(text).unwrap(), r#"{"first": 1}"#);
    }

    #[test]
    fn test_braces_inside_strings_are_ignored() {
        let json = r#"{"msg": "use {braces} like } this"}"#;
        assert_eq!(extract_json_span(json).unwrap(), json);
    }

    #[test]
    fn test_escaped_quotes_inside_strings() {
        let json = r#"{"msg": "she said \"hi}\" today"}"#;
        assert_eq!(extract_json_span(json).unwrap(), json);
    }

    #[test]
    fn test_nested_objects() {
        let json = r#"{"outer": {"inner": {"deep": true}}}"#;
        let text = format!("prefix {} suffix", json);
        assert_eq!(extract_json_span(&text).unwrap(), json);
    }

    #[test]
    fn test_no_object_at_all() {
        assert_eq!(
            extract_json_span("plain prose, no data"),
            Err(ExtractFailure::NoJsonObject)
        );
    }

    #[test]
    fn test_unbalanced_object() {
        assert_eq!(
            extract_json_span(r#"{"open": true"#),
            Err(ExtractFailure::UnbalancedJson)
        );
    }

    #[test]
    fn test_balanced_span_that_is_not_json_is_a_hard_failure() {
        // A later valid object exists, but the first span is not retried
        let text = r#"{not json} {"valid": true}"#;
        assert!(matches!(
            parse_json_object(text),
            Err(ExtractFailure::Parse(_))
        ));
    }

    #[test]
    fn test_fenced_block_tag_priority() {
        // The secondary alias appears first, but the primary tag wins
        let text = "```ts\nalias content\n```\n\n```typescript\nprimary content\n```\n";
        let result = extract_fenced_block(text, &["typescript", "ts"]).unwrap();
        assert_eq!(result, "primary content");
    }

    #[test]
    fn test_fenced_block_falls_through_tag_order() {
        let text = "```ts\nalias content\n```\n";
        let result = extract_fenced_block(text, &["typescript", "ts"]).unwrap();
        assert_eq!(result, "alias content");
    }

    #[test]
    fn test_fenced_block_unlabeled_fallback() {
        let text = "some prose\n```\nbare content\n```\n";
        let result = extract_fenced_block(text, &["typescript", "ts"]).unwrap();
        assert_eq!(result, "bare content");
    }

    #[test]
    fn test_no_fenced_block_returns_none() {
        assert_eq!(extract_fenced_block("no fences here", &["json"]), None);
    }

    #[test]
    fn test_first_block_of_matching_tag_wins() {
        let text = "```json\nfirst\n```\n```json\nsecond\n```\n";
        assert_eq!(extract_fenced_block(text, &["json"]).unwrap(), "first");
    }

    #[test]
    fn test_strip_fenced_blocks_keeps_prose() {
        let text = "Intro line.\n```js\nconst x = 1;\n```\nOutro line.";
        assert_eq!(strip_fenced_blocks(text), "Intro line.\nOutro line.");
    }

    #[test]
    fn test_strip_fenced_blocks_without_fences() {
        assert_eq!(strip_fenced_blocks("  plain text  "), "plain text");
    }
}
