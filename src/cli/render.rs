//! Render command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::utils::{non_empty, parse_revision};
use super::workflow::Workflow;
use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::domain::RunContext;
use crate::fetch::{AwsCliFetcher, LocalFiles};
use crate::overrides::RawOverrides;
use crate::pipeline::{render, Collaborators, RenderRequest};
use crate::render::TempFileSink;
use crate::resolve::SourceInputs;

#[derive(Args)]
pub struct RenderArgs {
    /// Path to the task definition JSON file (relative to the workspace)
    #[arg(long, value_name = "FILE", env = "INPUT_TASK-DEFINITION")]
    pub task_definition: Option<String>,

    /// ARN of a registered task definition to start from
    #[arg(long, value_name = "ARN", env = "INPUT_TASK-DEFINITION-ARN")]
    pub task_definition_arn: Option<String>,

    /// Task definition family to start from (requires --task-definition-revision)
    #[arg(long, value_name = "FAMILY", env = "INPUT_TASK-DEFINITION-FAMILY")]
    pub task_definition_family: Option<String>,

    /// Task definition revision used with --task-definition-family
    #[arg(
        long,
        value_name = "N",
        env = "INPUT_TASK-DEFINITION-REVISION",
        value_parser = parse_revision,
        default_value = "0"
    )]
    pub task_definition_revision: u32,

    /// Name of the container definition to override
    #[arg(long, value_name = "NAME", env = "INPUT_CONTAINER-NAME")]
    pub container_name: String,

    /// Container image URI
    #[arg(long, value_name = "IMAGE", env = "INPUT_IMAGE")]
    pub image: Option<String>,

    /// Environment variables, one NAME=value per line
    #[arg(long, value_name = "LINES", env = "INPUT_ENVIRONMENT-VARIABLES")]
    pub environment_variables: Option<String>,

    /// S3 ARNs of environment files, one per line
    #[arg(long, value_name = "ARNS", env = "INPUT_ENV-FILES")]
    pub env_files: Option<String>,

    /// Log driver for the container's logConfiguration
    #[arg(long, value_name = "DRIVER", env = "INPUT_LOG-CONFIGURATION-LOG-DRIVER")]
    pub log_configuration_log_driver: Option<String>,

    /// Log driver options, one key=value per line
    #[arg(long, value_name = "LINES", env = "INPUT_LOG-CONFIGURATION-OPTIONS")]
    pub log_configuration_options: Option<String>,

    /// Docker labels, one key=value per line
    #[arg(long, value_name = "LINES", env = "INPUT_DOCKER-LABELS")]
    pub docker_labels: Option<String>,

    /// Command to run in the container (split on whitespace)
    #[arg(long, value_name = "COMMAND", env = "INPUT_COMMAND", allow_hyphen_values = true)]
    pub command: Option<String>,

    /// Path to config file (render-task-definition.toml or .yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Workspace root for relative task definition paths
    #[arg(long, value_name = "DIR", env = "GITHUB_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Directory for the rendered task definition file
    #[arg(short = 'o', long, value_name = "DIR", env = "RUNNER_TEMP")]
    pub output_dir: Option<PathBuf>,

    /// AWS CLI executable used to describe remote task definitions
    #[arg(long, value_name = "PROGRAM")]
    pub aws_cli: Option<String>,

    /// AWS region for remote task definitions
    #[arg(long, value_name = "REGION", env = "AWS_REGION")]
    pub region: Option<String>,

    /// AWS profile for remote task definitions
    #[arg(long, value_name = "PROFILE", env = "AWS_PROFILE")]
    pub profile: Option<String>,
}

impl RenderArgs {
    fn request(&self) -> RenderRequest {
        RenderRequest {
            source: SourceInputs {
                file: non_empty(self.task_definition.clone()),
                arn: non_empty(self.task_definition_arn.clone()),
                family: non_empty(self.task_definition_family.clone()),
                revision: self.task_definition_revision,
            },
            overrides: RawOverrides {
                container_name: self.container_name.clone(),
                image: non_empty(self.image.clone()),
                environment_variables: non_empty(self.environment_variables.clone()),
                env_files: non_empty(self.env_files.clone()),
                log_driver: non_empty(self.log_configuration_log_driver.clone()),
                log_options: non_empty(self.log_configuration_options.clone()),
                docker_labels: non_empty(self.docker_labels.clone()),
                command: non_empty(self.command.clone()),
            },
        }
    }
}

pub fn run(args: RenderArgs) -> Result<()> {
    let workflow = Workflow::from_env();
    let cwd = std::env::current_dir()?;

    let workspace_arg = args.workspace.clone().filter(|p| !p.as_os_str().is_empty());
    let config_anchor = workspace_arg.clone().unwrap_or_else(|| cwd.clone());
    let file_config = load_config(&config_anchor, args.config.as_deref())?;
    let settings = merge_cli_with_config(
        file_config,
        CliOverrides {
            workspace: workspace_arg,
            output_dir: args.output_dir.clone().filter(|p| !p.as_os_str().is_empty()),
            aws_cli: non_empty(args.aws_cli.clone()),
            region: non_empty(args.region.clone()),
            profile: non_empty(args.profile.clone()),
        },
    );

    let files = LocalFiles::new(settings.workspace.unwrap_or(cwd));
    let fetcher =
        AwsCliFetcher::new(settings.aws_cli).region(settings.region).profile(settings.profile);
    let sink = TempFileSink::new(settings.output_dir.unwrap_or_else(std::env::temp_dir));

    let request = args.request();
    let mut ctx = RunContext::new();
    let result = render(
        &request,
        &Collaborators { files: &files, fetcher: &fetcher, sink: &sink },
        &mut ctx,
    );

    for warning in &ctx.warnings {
        workflow.warning(&warning.to_string());
    }

    match result {
        Ok(outcome) => {
            let path = outcome.task_definition_path.to_string_lossy().into_owned();
            tracing::debug!("task definition source: {:?}", outcome.selection);
            workflow.set_output("task-definition", &path)?;
            println!("{}", path);
            Ok(())
        }
        Err(err) => {
            workflow.error(&err.to_string());
            Err(err.into())
        }
    }
}
