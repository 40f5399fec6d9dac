//! JSON Merge-Patch (RFC 7396) bodies for PATCH operations

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{DirectLinkError, Result};

/// Converts a sparse update template into a merge-patch document
///
/// Templates mark every field `skip_serializing_if = "Option::is_none"`, so
/// the resulting map holds exactly the fields the caller set.
pub trait AsPatch: Serialize {
    fn as_patch(&self) -> Result<Map<String, Value>> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(DirectLinkError::Json(format!(
                "a merge patch must be a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Default)]
    struct Template {
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        speed_mbps: Option<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        nested: Option<Nested>,
    }

    #[derive(Serialize)]
    struct Nested {
        crn: String,
    }

    impl AsPatch for Template {}

    #[derive(Serialize)]
    struct NotAnObject(u32);

    impl AsPatch for NotAnObject {}

    #[test]
    fn test_empty_template_is_empty_patch() {
        assert!(Template::default().as_patch().unwrap().is_empty());
    }

    #[test]
    fn test_only_set_fields_are_emitted() {
        let patch = Template {
            speed_mbps: Some(1000),
            ..Default::default()
        }
        .as_patch()
        .unwrap();

        assert_eq!(patch.len(), 1);
        assert_eq!(patch["speed_mbps"], 1000);
        assert!(!patch.contains_key("name"));
    }

    #[test]
    fn test_nested_objects_are_emitted_whole() {
        let patch = Template {
            name: Some("gw".to_string()),
            nested: Some(Nested {
                crn: "crn:v1:key".to_string(),
            }),
            ..Default::default()
        }
        .as_patch()
        .unwrap();

        assert_eq!(patch["name"], "gw");
        assert_eq!(patch["nested"]["crn"], "crn:v1:key");
    }

    #[test]
    fn test_non_object_is_rejected() {
        match NotAnObject(3).as_patch() {
            Err(DirectLinkError::Json(msg)) => assert!(msg.contains("a number")),
            other => panic!("Expected Json error, got {:?}", other),
        }
    }
}
