//! Task definition shape checks

use serde_json::{Map, Value};

use crate::error::{RenderError, Result};

/// Find the container definition named `name`.
///
/// Only the shape needed to locate the container is checked: the task
/// definition must be an object whose `containerDefinitions` is an array.
/// Matching is exact and case-sensitive; the first match wins.
pub fn locate_container<'a>(
    task_definition: &'a mut Value,
    name: &str,
) -> Result<&'a mut Map<String, Value>> {
    let definitions = task_definition
        .get_mut("containerDefinitions")
        .and_then(Value::as_array_mut)
        .ok_or(RenderError::InvalidFormat)?;

    definitions
        .iter_mut()
        .filter_map(Value::as_object_mut)
        .find(|container| container.get("name").and_then(Value::as_str) == Some(name))
        .ok_or(RenderError::ContainerNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn finds_named_container() {
        let mut td = json!({
            "family": "f",
            "containerDefinitions": [
                {"name": "main", "image": "a"},
                {"name": "web", "image": "b"}
            ]
        });
        let container = locate_container(&mut td, "web").expect("found");
        assert_eq!(container["image"], json!("b"));
    }

    #[test]
    fn name_match_is_case_sensitive() {
        let mut td = json!({"containerDefinitions": [{"name": "Web", "image": "a"}]});
        let err = locate_container(&mut td, "web").expect_err("missing");
        assert_eq!(
            err.to_string(),
            "Invalid task definition: Could not find container definition with matching name"
        );
    }

    #[test]
    fn rejects_non_array_definitions() {
        let expected = "Invalid task definition format: containerDefinitions section is not present or is not an array";
        for mut td in [
            json!({"family": "f", "containerDefinitions": {}}),
            json!({"family": "f"}),
            json!("hello"),
            json!({"containerDefinitions": "web"}),
        ] {
            let err = locate_container(&mut td, "web").expect_err("invalid");
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn skips_non_object_entries() {
        let mut td = json!({"containerDefinitions": ["web", {"name": "web", "image": "x"}]});
        let container = locate_container(&mut td, "web").expect("found");
        assert_eq!(container["image"], json!("x"));
    }
}
