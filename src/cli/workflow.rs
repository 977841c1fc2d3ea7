//! Workflow-runner plumbing: annotations and step outputs.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Talks to the CI runner through workflow commands and the `GITHUB_OUTPUT` file.
#[derive(Debug, Clone, Default)]
pub struct Workflow {
    annotations: bool,
    output_file: Option<PathBuf>,
}

impl Workflow {
    pub fn from_env() -> Self {
        Self {
            annotations: std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true"),
            output_file: std::env::var_os("GITHUB_OUTPUT")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        }
    }

    pub fn warning(&self, message: &str) {
        if self.annotations {
            println!("::warning::{}", escape(message));
        }
    }

    pub fn error(&self, message: &str) {
        if self.annotations {
            println!("::error::{}", escape(message));
        }
    }

    /// Record a step output. Without an output file this is a no-op.
    pub fn set_output(&self, name: &str, value: &str) -> Result<()> {
        let Some(path) = &self.output_file else {
            return Ok(());
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed opening step output file: {}", path.display()))?;
        writeln!(file, "{name}={value}")
            .with_context(|| format!("Failed writing step output file: {}", path.display()))?;
        Ok(())
    }
}

/// Workflow command data escaping.
fn escape(message: &str) -> String {
    message.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn set_output_appends_name_value_lines() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("output");
        fs::write(&path, "other=1\n").expect("seed");

        let workflow = Workflow { annotations: false, output_file: Some(path.clone()) };
        workflow.set_output("task-definition", "/tmp/task-definition-abc.json").expect("set");

        assert_eq!(
            fs::read_to_string(&path).expect("read"),
            "other=1\ntask-definition=/tmp/task-definition-abc.json\n"
        );
    }

    #[test]
    fn set_output_without_file_is_noop() {
        Workflow::default().set_output("task-definition", "x").expect("noop");
    }

    #[test]
    fn escapes_newlines_and_percent() {
        assert_eq!(escape("50%\nnext"), "50%25%0Anext");
    }
}
