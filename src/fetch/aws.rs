//! Remote task definitions via the AWS CLI

use serde_json::Value;
use std::process::Command;

use crate::error::FetchError;
use crate::fetch::{DescribeRequest, TaskDefinitionFetcher};

/// Calls `aws ecs describe-task-definition` and unwraps `taskDefinition`.
#[derive(Debug, Clone)]
pub struct AwsCliFetcher {
    program: String,
    region: Option<String>,
    profile: Option<String>,
}

impl AwsCliFetcher {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into(), region: None, profile: None }
    }

    pub fn region(mut self, region: Option<String>) -> Self {
        self.region = region;
        self
    }

    pub fn profile(mut self, profile: Option<String>) -> Self {
        self.profile = profile;
        self
    }

    fn args(&self, request: &DescribeRequest) -> Vec<String> {
        let mut args = vec![
            "ecs".to_string(),
            "describe-task-definition".to_string(),
            "--task-definition".to_string(),
            request.target(),
            "--output".to_string(),
            "json".to_string(),
        ];
        if let Some(region) = &self.region {
            args.extend(["--region".to_string(), region.clone()]);
        }
        if let Some(profile) = &self.profile {
            args.extend(["--profile".to_string(), profile.clone()]);
        }
        args
    }
}

impl TaskDefinitionFetcher for AwsCliFetcher {
    fn describe(&self, request: &DescribeRequest) -> Result<Value, FetchError> {
        let args = self.args(request);
        tracing::debug!("running {} {}", self.program, args.join(" "));

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|source| FetchError::Launch { program: self.program.clone(), source })?;

        if !output.status.success() {
            return Err(FetchError::Describe {
                target: request.target(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        extract_task_definition(&output.stdout)
    }
}

/// Pull the `taskDefinition` member out of a describe response.
pub fn extract_task_definition(stdout: &[u8]) -> Result<Value, FetchError> {
    let mut response: Value =
        serde_json::from_slice(stdout).map_err(|e| FetchError::Response(e.to_string()))?;
    response
        .get_mut("taskDefinition")
        .map(Value::take)
        .filter(Value::is_object)
        .ok_or_else(|| FetchError::Response("missing taskDefinition".to_string()))
}
