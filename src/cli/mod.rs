//! Command-line interface for render-task-definition
//!
//! Every input can be given as a flag or through the matching `INPUT_*`
//! variable a workflow runner sets for action inputs.

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod render;
mod utils;
mod workflow;

/// Render a task definition with container overrides for deployment
#[derive(Parser)]
#[command(name = "render-task-definition")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    args: render::RenderArgs,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    render::run(cli.args)
}
