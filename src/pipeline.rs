//! End-to-end render pipeline
//!
//! resolve source → locate container → parse overrides → merge → emit.
//! Every fatal error surfaces before the sink is touched, so a failed run
//! never leaves a partial task definition behind.

use std::path::PathBuf;

use crate::domain::{RunContext, SourceSelection};
use crate::error::Result;
use crate::fetch::{DescriptorFiles, TaskDefinitionFetcher};
use crate::merge;
use crate::overrides::{parse_overrides, RawOverrides};
use crate::render::{emit, OutputSink};
use crate::resolve::{resolve, SourceInputs};
use crate::validate::locate_container;

/// All caller inputs for one run.
#[derive(Debug, Clone, Default)]
pub struct RenderRequest {
    pub source: SourceInputs,
    pub overrides: RawOverrides,
}

/// External collaborators the pipeline talks to.
pub struct Collaborators<'a> {
    pub files: &'a dyn DescriptorFiles,
    pub fetcher: &'a dyn TaskDefinitionFetcher,
    pub sink: &'a dyn OutputSink,
}

#[derive(Debug)]
pub struct RenderOutcome {
    pub task_definition_path: PathBuf,
    pub selection: SourceSelection,
}

pub fn render(
    request: &RenderRequest,
    collaborators: &Collaborators<'_>,
    ctx: &mut RunContext,
) -> Result<RenderOutcome> {
    let resolved = resolve(&request.source, collaborators.files, collaborators.fetcher, ctx)?;
    let mut task_definition = resolved.task_definition;

    let container = locate_container(&mut task_definition, &request.overrides.container_name)?;
    let overrides = parse_overrides(&request.overrides)?;
    merge::apply(container, &overrides)?;

    let task_definition_path = emit(&task_definition, collaborators.sink)?;
    Ok(RenderOutcome { task_definition_path, selection: resolved.selection })
}
