//! render-task-definition: render a task definition with container overrides
//!
//! A single-shot pipeline step. Reads inputs from flags or `INPUT_*`
//! variables and prints the path of the rendered file.

use anyhow::Result;

fn main() -> Result<()> {
    render_task_definition::cli::run()
}
