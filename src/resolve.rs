//! Source resolution: pick where the base task definition comes from
//!
//! Precedence is file, then arn, then family + revision. A file combined with
//! an arn still triggers the describe call for the arn, but the file is always
//! the source.

use serde_json::Value;

use crate::domain::{RunContext, SourceSelection};
use crate::error::{RenderError, Result, Warning};
use crate::fetch::{parse_task_definition, DescribeRequest, DescriptorFiles, TaskDefinitionFetcher};

/// Raw source inputs; blank strings count as absent.
#[derive(Debug, Clone, Default)]
pub struct SourceInputs {
    pub file: Option<String>,
    pub arn: Option<String>,
    pub family: Option<String>,
    pub revision: u32,
}

/// The chosen source together with the task definition it produced.
#[derive(Debug)]
pub struct Resolved {
    pub selection: SourceSelection,
    pub task_definition: Value,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

pub fn resolve(
    inputs: &SourceInputs,
    files: &dyn DescriptorFiles,
    fetcher: &dyn TaskDefinitionFetcher,
    ctx: &mut RunContext,
) -> Result<Resolved> {
    let arn = present(&inputs.arn);

    if let Some(file) = present(&inputs.file) {
        if let Some(arn) = arn {
            ctx.warn(Warning::SourceConflict);
            // The describe call is still made; its result never feeds the merge.
            fetcher.describe(&DescribeRequest::by_arn(arn))?;
        }

        if arn.is_none() && !files.exists(file) {
            return Err(RenderError::FileMissing(file.to_string()));
        }

        tracing::debug!("using task definition file {}", file);
        let contents = files.read(file)?;
        return Ok(Resolved {
            selection: SourceSelection::LocalFile(file.to_string()),
            task_definition: parse_task_definition(file, &contents)?,
        });
    }

    if let Some(arn) = arn {
        tracing::debug!("fetching task definition by arn {}", arn);
        let task_definition = fetcher.describe(&DescribeRequest::by_arn(arn))?;
        return Ok(Resolved { selection: SourceSelection::Reference(arn.to_string()), task_definition });
    }

    if let Some(family) = present(&inputs.family) {
        if inputs.revision == 0 {
            return Err(RenderError::FamilyRevisionMismatch);
        }
        ctx.warn(Warning::AmbiguousFamilyRevision);
        tracing::debug!("fetching task definition {}:{}", family, inputs.revision);
        let task_definition =
            fetcher.describe(&DescribeRequest::by_family(family, inputs.revision))?;
        return Ok(Resolved {
            selection: SourceSelection::FamilyRevision {
                family: family.to_string(),
                revision: inputs.revision,
            },
            task_definition,
        });
    }

    if inputs.revision > 0 {
        return Err(RenderError::FamilyRevisionMismatch);
    }

    Err(RenderError::SourceMissing)
}
