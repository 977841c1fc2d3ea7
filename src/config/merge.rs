//! Layer command-line settings over file config

use crate::domain::Config;
use std::path::PathBuf;

/// Settings given on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub workspace: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub aws_cli: Option<String>,
    pub region: Option<String>,
    pub profile: Option<String>,
}

/// CLI values win over the file; unset CLI values keep the file's.
pub fn merge_cli_with_config(config: Config, cli: CliOverrides) -> Config {
    Config {
        workspace: cli.workspace.or(config.workspace),
        output_dir: cli.output_dir.or(config.output_dir),
        aws_cli: cli.aws_cli.unwrap_or(config.aws_cli),
        region: cli.region.or(config.region),
        profile: cli.profile.or(config.profile),
    }
}
