//! Core domain types shared across the rendering pipeline

pub mod config;

pub use config::Config;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Warning;

/// Key/value mapping that keeps first-insertion order of its keys.
pub type StringMap = IndexMap<String, String>;

/// One `{name, value}` entry of a container's `environment` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentVariable {
    pub name: String,
    pub value: String,
}

impl EnvironmentVariable {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into() }
    }
}

/// One `{value, type}` entry of a container's `environmentFiles` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentFile {
    pub value: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl EnvironmentFile {
    /// Environment files are always fetched from S3.
    pub fn s3(value: impl Into<String>) -> Self {
        Self { value: value.into(), kind: "s3".to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogConfiguration {
    pub log_driver: String,
    pub options: StringMap,
}

/// Parsed overrides for a single container.
///
/// Every field except `container_name` is optional; `None` leaves the matching
/// container field exactly as it was in the base task definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideSet {
    pub container_name: String,
    pub image: Option<String>,
    pub environment: Option<Vec<EnvironmentVariable>>,
    pub environment_files: Option<Vec<EnvironmentFile>>,
    pub log_configuration: Option<LogConfiguration>,
    pub docker_labels: Option<StringMap>,
    pub command: Option<Vec<String>>,
}

/// Which acquisition path supplies the base task definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSelection {
    LocalFile(String),
    Reference(String),
    FamilyRevision { family: String, revision: u32 },
}

/// Per-run state threaded through the pipeline.
#[derive(Debug, Default)]
pub struct RunContext {
    pub warnings: Vec<Warning>,
}

impl RunContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn(&mut self, warning: Warning) {
        tracing::warn!("{}", warning);
        self.warnings.push(warning);
    }
}
