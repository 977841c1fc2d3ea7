//! Override parsing
//!
//! Raw override inputs arrive as flat strings. They are parsed here, all at
//! once, into an [`OverrideSet`]; a malformed line anywhere fails the whole
//! set so nothing is merged from a partially valid input.

pub mod parse;

use crate::domain::{LogConfiguration, OverrideSet, StringMap};
use crate::error::Result;

pub use parse::{parse_command, parse_environment, parse_environment_files, parse_key_values};

/// Unparsed override inputs as received from the caller.
#[derive(Debug, Clone, Default)]
pub struct RawOverrides {
    pub container_name: String,
    pub image: Option<String>,
    pub environment_variables: Option<String>,
    pub env_files: Option<String>,
    pub log_driver: Option<String>,
    pub log_options: Option<String>,
    pub docker_labels: Option<String>,
    pub command: Option<String>,
}

/// Blank inputs are treated the same as missing ones.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Parse every supplied override into its typed form.
pub fn parse_overrides(raw: &RawOverrides) -> Result<OverrideSet> {
    let environment = present(&raw.environment_variables).map(parse_environment).transpose()?;
    let environment_files = present(&raw.env_files).map(parse_environment_files);

    let log_configuration = match present(&raw.log_driver) {
        Some(driver) => {
            let options = present(&raw.log_options)
                .map(parse_key_values)
                .transpose()?
                .unwrap_or_else(StringMap::new);
            Some(LogConfiguration { log_driver: driver.to_string(), options })
        }
        None => {
            if present(&raw.log_options).is_some() {
                tracing::debug!("log options supplied without a log driver; ignoring them");
            }
            None
        }
    };

    let docker_labels = present(&raw.docker_labels).map(parse_key_values).transpose()?;
    let command = present(&raw.command).map(parse_command);

    Ok(OverrideSet {
        container_name: raw.container_name.clone(),
        image: present(&raw.image).map(str::to_string),
        environment,
        environment_files,
        log_configuration,
        docker_labels,
        command,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EnvironmentVariable;

    fn raw() -> RawOverrides {
        RawOverrides { container_name: "web".to_string(), ..Default::default() }
    }

    #[test]
    fn empty_inputs_produce_no_overrides() {
        let mut input = raw();
        input.image = Some(String::new());
        input.environment_variables = Some("  \n".to_string());
        let set = parse_overrides(&input).expect("parse");
        assert_eq!(set, OverrideSet { container_name: "web".to_string(), ..Default::default() });
    }

    #[test]
    fn log_driver_without_options_gets_empty_map() {
        let mut input = raw();
        input.log_driver = Some("awslogs".to_string());
        let set = parse_overrides(&input).expect("parse");
        let log = set.log_configuration.expect("log configuration");
        assert_eq!(log.log_driver, "awslogs");
        assert!(log.options.is_empty());
    }

    #[test]
    fn log_options_without_driver_are_ignored() {
        let mut input = raw();
        input.log_options = Some("not-a-pair".to_string());
        let set = parse_overrides(&input).expect("parse");
        assert!(set.log_configuration.is_none());
    }

    #[test]
    fn bad_docker_label_fails_whole_set() {
        let mut input = raw();
        input.environment_variables = Some("FOO=bar".to_string());
        input.docker_labels = Some("key1=update_value1\nkey2\nkey3=value3".to_string());
        let err = parse_overrides(&input).expect_err("should fail");
        assert!(err.to_string().contains("key2"));
    }

    #[test]
    fn parses_all_fields() {
        let mut input = raw();
        input.image = Some("nginx:latest".to_string());
        input.environment_variables = Some("FOO=bar".to_string());
        input.env_files = Some("arn:aws:s3:::bucket/app.env".to_string());
        input.docker_labels = Some("key1=value1".to_string());
        input.command = Some("npm start".to_string());

        let set = parse_overrides(&input).expect("parse");
        assert_eq!(set.image.as_deref(), Some("nginx:latest"));
        assert_eq!(set.environment, Some(vec![EnvironmentVariable::new("FOO", "bar")]));
        assert_eq!(set.environment_files.expect("files").len(), 1);
        assert_eq!(set.docker_labels.expect("labels")["key1"], "value1");
        assert_eq!(set.command, Some(vec!["npm".to_string(), "start".to_string()]));
    }
}
