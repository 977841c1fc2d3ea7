//! Merge parsed overrides into a container definition

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::{EnvironmentVariable, OverrideSet};
use crate::error::{RenderError, Result};

/// Apply `overrides` to `container` in place.
///
/// Fields without a corresponding override are left exactly as they were.
/// New keys are added in the order image, environmentFiles, environment,
/// logConfiguration, dockerLabels, command.
pub fn apply(container: &mut Map<String, Value>, overrides: &OverrideSet) -> Result<()> {
    if let Some(image) = &overrides.image {
        container.insert("image".to_string(), Value::String(image.clone()));
    }
    if let Some(files) = &overrides.environment_files {
        container.insert("environmentFiles".to_string(), to_value(files)?);
    }
    if let Some(vars) = &overrides.environment {
        merge_environment(container, vars)?;
    }
    if let Some(log) = &overrides.log_configuration {
        container.insert("logConfiguration".to_string(), to_value(log)?);
    }
    if let Some(labels) = &overrides.docker_labels {
        container.insert("dockerLabels".to_string(), to_value(labels)?);
    }
    if let Some(command) = &overrides.command {
        container.insert("command".to_string(), to_value(command)?);
    }
    Ok(())
}

/// Replace values of existing names in place, append the rest.
fn merge_environment(
    container: &mut Map<String, Value>,
    vars: &[EnvironmentVariable],
) -> Result<()> {
    if !matches!(container.get("environment"), Some(Value::Array(_))) {
        container.insert("environment".to_string(), Value::Array(Vec::new()));
    }
    let Some(Value::Array(entries)) = container.get_mut("environment") else {
        return Ok(());
    };

    for var in vars {
        let position = entries
            .iter()
            .position(|entry| entry.get("name").and_then(Value::as_str) == Some(var.name.as_str()));
        match position.and_then(|i| entries[i].as_object_mut()) {
            Some(entry) => {
                entry.insert("value".to_string(), Value::String(var.value.clone()));
            }
            None => entries.push(to_value(var)?),
        }
    }
    Ok(())
}

fn to_value<T: Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(RenderError::Serialize)
}
