//! Error and warning types for task definition rendering
//!
//! The `Display` text of every fatal variant is the exact message surfaced to
//! the pipeline, so downstream log scrapers can match on it.

use std::fmt;
use thiserror::Error;

/// Fatal conditions that abort a run before any output is written.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Task definition file, task definition arn, or task definition family must be provided")]
    SourceMissing,

    /// Only raised when no arn was supplied, hence the fixed `undefined`.
    #[error("Task definition file does not exist: {0} and Task definition arn does not exist: undefined")]
    FileMissing(String),

    #[error("Provide task definition revision if task definition family will be used to fetch task definition - vice versa ")]
    FamilyRevisionMismatch,

    #[error("Invalid task definition format: containerDefinitions section is not present or is not an array")]
    InvalidFormat,

    #[error("Invalid task definition: Could not find container definition with matching name")]
    ContainerNotFound,

    /// Shared by the log option and docker label parsers.
    #[error("Can't parse logConfiguration option {0}. Must be in key=value format, one per line")]
    LogOptionParse(String),

    #[error("Cannot parse the environment variable '{0}'. Environment variable pairs must be of the form NAME=value.")]
    EnvironmentParse(String),

    #[error("Failed reading task definition file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Task definition file {path} is not valid JSON: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Failed writing task definition: {0}")]
    Write(#[source] std::io::Error),

    #[error("Failed serializing task definition: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Failures of the remote describe call.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to describe task definition {target}: {stderr}")]
    Describe { target: String, stderr: String },

    #[error("Unexpected describe-task-definition response: {0}")]
    Response(String),
}

/// Advisory conditions; reported but the run continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    /// File and reference both supplied.
    SourceConflict,
    /// Family and a positive revision both supplied.
    AmbiguousFamilyRevision,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::SourceConflict => f.write_str(
                "Both task definition file and task definition arn are provided: task definition file will be option used.",
            ),
            Warning::AmbiguousFamilyRevision => f.write_str(
                "Both task definition family and task definition revision are provided: the most up to date version will be used to fetch task definition",
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;
