//! Config file discovery and layering
//!
//! File values sit under command-line flags. Each flag also reads its
//! `INPUT_*` variable through clap, so the order is CLI/env > file > defaults.

pub mod loader;
pub mod merge;

pub use loader::load_config;
pub use merge::{merge_cli_with_config, CliOverrides};
