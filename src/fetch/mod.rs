//! Task definition acquisition (local file, remote describe call)

use serde_json::Value;

use crate::error::{FetchError, RenderError};

pub mod aws;
pub mod local;

pub use aws::AwsCliFetcher;
pub use local::LocalFiles;

/// Access to task definition files on local storage.
pub trait DescriptorFiles {
    fn exists(&self, path: &str) -> bool;

    fn read(&self, path: &str) -> Result<String, RenderError>;
}

/// Parameters of one describe-task-definition call.
///
/// Exactly one of `arn` or `family` + `revision` is populated; the rest are
/// empty or zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeRequest {
    pub arn: String,
    pub family: String,
    pub revision: u32,
}

impl DescribeRequest {
    pub fn by_arn(arn: impl Into<String>) -> Self {
        Self { arn: arn.into(), ..Default::default() }
    }

    pub fn by_family(family: impl Into<String>, revision: u32) -> Self {
        Self { family: family.into(), revision, ..Default::default() }
    }

    /// The `--task-definition` argument the registry understands.
    pub fn target(&self) -> String {
        if !self.arn.is_empty() {
            self.arn.clone()
        } else if self.revision > 0 {
            format!("{}:{}", self.family, self.revision)
        } else {
            self.family.clone()
        }
    }
}

/// Fetches a task definition from the remote registry.
pub trait TaskDefinitionFetcher {
    fn describe(&self, request: &DescribeRequest) -> Result<Value, FetchError>;
}

/// Parse a task definition file's contents, ignoring a leading byte order mark.
pub fn parse_task_definition(path: &str, contents: &str) -> Result<Value, RenderError> {
    let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);
    serde_json::from_str(contents)
        .map_err(|source| RenderError::Json { path: path.to_string(), source })
}

#[cfg(test)]
mod tests {
    use super::{parse_task_definition, DescribeRequest};
    use serde_json::json;

    #[test]
    fn target_prefers_arn() {
        let req = DescribeRequest::by_arn("arn:aws:ecs:us-east-1:1:task-definition/web:3");
        assert_eq!(req.target(), "arn:aws:ecs:us-east-1:1:task-definition/web:3");
    }

    #[test]
    fn target_joins_family_and_revision() {
        assert_eq!(DescribeRequest::by_family("web", 10).target(), "web:10");
        assert_eq!(DescribeRequest::by_family("web", 0).target(), "web");
    }

    #[test]
    fn parses_file_with_byte_order_mark() {
        let td = parse_task_definition("td.json", "\u{feff}{\"family\": \"web\"}").expect("parse");
        assert_eq!(td, json!({"family": "web"}));
    }

    #[test]
    fn invalid_json_names_the_file() {
        let err = parse_task_definition("td.json", "not json").expect_err("invalid");
        assert!(err.to_string().starts_with("Task definition file td.json is not valid JSON"));
    }
}
