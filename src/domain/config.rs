//! Ambient run settings loaded from an optional config file

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_AWS_CLI: &str = "aws";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Root that relative task definition paths are resolved against.
    pub workspace: Option<PathBuf>,
    /// Directory receiving rendered task definition files.
    pub output_dir: Option<PathBuf>,
    /// Program used for remote describe calls.
    pub aws_cli: String,
    pub region: Option<String>,
    pub profile: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workspace: None,
            output_dir: None,
            aws_cli: DEFAULT_AWS_CLI.to_string(),
            region: None,
            profile: None,
        }
    }
}
