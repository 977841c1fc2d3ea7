//! render-task-definition: merge container overrides into a task definition
//!
//! Resolves a base task definition from a local file, an ARN, or a
//! family/revision pair, applies image, environment, log, label and command
//! overrides to one named container, and writes the result for a downstream
//! deployment step.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod fetch;
pub mod merge;
pub mod overrides;
pub mod pipeline;
pub mod render;
pub mod resolve;
pub mod validate;

pub use error::{FetchError, RenderError, Warning};
pub use pipeline::{Collaborators, RenderOutcome, RenderRequest};
