//! Parse LLM output into structured specification values

use crate::error::ExtractorError;
use serde_json::Value;
use specforge_domain::{Category, StructuredValue};

/// Parse an LLM JSON response into the category's record shape.
///
/// Markdown code fences are tolerated and stripped. Display and Storage
/// responses may wrap multiple records in a collection key ("displays",
/// "storage_options"); the wrapper is unwrapped before decoding. Anything
/// that does not decode into the category's record type is an error.
pub fn parse_response(
    category: &Category,
    response: &str,
) -> Result<StructuredValue, ExtractorError> {
    let json_str = extract_json(response)?;

    let json: Value = serde_json::from_str(&json_str)
        .map_err(|e| ExtractorError::InvalidFormat(format!("JSON parse error: {}", e)))?;

    let json = unwrap_collection(category, json);

    StructuredValue::decode(category, json)
        .map_err(|e| ExtractorError::InvalidFormat(format!("unexpected record shape: {}", e)))
}

/// Extract JSON from response, handling markdown code blocks
fn extract_json(response: &str) -> Result<String, ExtractorError> {
    let trimmed = response.trim();

    // Check if wrapped in markdown code block
    if trimmed.starts_with("```json") || trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() < 2 {
            return Err(ExtractorError::InvalidFormat("Empty code block".to_string()));
        }

        // Skip first line (```json or ```) and last line (```)
        let json_lines = &lines[1..lines.len().saturating_sub(1)];
        Ok(json_lines.join("\n"))
    } else {
        Ok(trimmed.to_string())
    }
}

/// JSON mode forces an object at the top level, so multi-record answers
/// arrive as `{"displays": [...]}` rather than a bare array. Unwrap the
/// known collection keys for the categories that allow multiples.
fn unwrap_collection(category: &Category, json: Value) -> Value {
    let keys: &[&str] = match category {
        Category::Display => &["displays"],
        Category::Storage => &["storage_options", "storage", "options"],
        _ => return json,
    };

    if let Value::Object(ref obj) = json {
        for key in keys {
            if let Some(inner) = obj.get(*key) {
                if inner.is_array() {
                    return inner.clone();
                }
            }
        }
    }
    json
}

#[cfg(test)]
mod tests {
    use super::*;
    use specforge_domain::OneOrMany;

    #[test]
    fn test_parse_battery_response() {
        let response = r#"{"capacity_wh": 47, "chemistry": "Li-ion", "rapid_charge": true}"#;
        let value = parse_response(&Category::Battery, response).unwrap();
        match value {
            StructuredValue::Battery(battery) => {
                assert_eq!(battery.capacity_wh, Some(47.0));
                assert_eq!(battery.chemistry.as_deref(), Some("Li-ion"));
            }
            other => panic!("expected Battery, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_with_markdown_wrapper() {
        let response = "```json\n{\"max_capacity_gb\": 40}\n```";
        let value = parse_response(&Category::Memory, response).unwrap();
        match value {
            StructuredValue::Memory(memory) => assert_eq!(memory.max_capacity_gb, Some(40.0)),
            other => panic!("expected Memory, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_displays_wrapper_key() {
        let response = r#"{"displays": [
            {"resolution": "1920x1200", "is_touchscreen": false},
            {"resolution": "1920x1200", "is_touchscreen": true}
        ]}"#;
        let value = parse_response(&Category::Display, response).unwrap();
        match value {
            StructuredValue::Display(OneOrMany::Many(panels)) => {
                assert_eq!(panels.len(), 2);
                assert_eq!(panels[1].is_touchscreen, Some(true));
            }
            other => panic!("expected multiple displays, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_single_display_object() {
        let response = r#"{"resolution": "2560x1600", "refresh_rate_hz": 120}"#;
        let value = parse_response(&Category::Display, response).unwrap();
        assert!(matches!(
            value,
            StructuredValue::Display(OneOrMany::One(_))
        ));
    }

    #[test]
    fn test_parse_storage_range() {
        let response = r#"{"storage_options": [
            {"capacity_gb": [512, 1000], "type": "SSD", "interface": "PCIe NVMe"}
        ]}"#;
        let value = parse_response(&Category::Storage, response).unwrap();
        match value {
            StructuredValue::Storage(OneOrMany::Many(options)) => {
                assert_eq!(options.len(), 1);
            }
            other => panic!("expected storage array, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_invalid_json_is_error() {
        let result = parse_response(&Category::Battery, "not json at all");
        assert!(matches!(result, Err(ExtractorError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_empty_code_block_is_error() {
        let result = parse_response(&Category::Battery, "```");
        assert!(result.is_err());
    }

    #[test]
    fn test_extract_json_plain() {
        let json = r#"{"key": "value"}"#;
        assert_eq!(extract_json(json).unwrap(), json);
    }

    #[test]
    fn test_extract_json_fenced_without_language() {
        let response = "```\n{\"key\": \"value\"}\n```";
        assert!(extract_json(response).unwrap().contains("key"));
    }
}
