//! Output rendering: serialize the merged task definition and hand it off

use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::error::{RenderError, Result};

pub mod sink;

pub use sink::TempFileSink;

/// Destination for the rendered task definition.
pub trait OutputSink {
    /// Reserve a fresh output location.
    fn allocate(&self) -> std::io::Result<PathBuf>;

    fn write(&self, handle: &Path, contents: &str) -> std::io::Result<()>;

    /// Drop an allocated location whose write did not complete.
    fn discard(&self, handle: &Path) -> std::io::Result<()>;
}

/// Pretty-print with two-space indentation, keeping key insertion order.
pub fn to_pretty_json(task_definition: &Value) -> Result<String> {
    serde_json::to_string_pretty(task_definition).map_err(RenderError::Serialize)
}

/// Serialize `task_definition` into a newly allocated output and return its handle.
pub fn emit(task_definition: &Value, sink: &dyn OutputSink) -> Result<PathBuf> {
    let contents = to_pretty_json(task_definition)?;
    let handle = sink.allocate().map_err(RenderError::Write)?;
    if let Err(err) = sink.write(&handle, &contents) {
        if let Err(cleanup) = sink.discard(&handle) {
            tracing::warn!("failed removing partial output {}: {}", handle.display(), cleanup);
        }
        return Err(RenderError::Write(err));
    }
    tracing::info!("wrote task definition to {}", handle.display());
    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;

    /// Allocates fine, then fails every write.
    #[derive(Default)]
    struct FailingSink {
        discarded: RefCell<Vec<PathBuf>>,
    }

    impl OutputSink for FailingSink {
        fn allocate(&self) -> std::io::Result<PathBuf> {
            Ok(PathBuf::from("task-definition-partial.json"))
        }

        fn write(&self, _handle: &Path, _contents: &str) -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
        }

        fn discard(&self, handle: &Path) -> std::io::Result<()> {
            self.discarded.borrow_mut().push(handle.to_path_buf());
            Ok(())
        }
    }

    #[test]
    fn failed_write_discards_allocated_output() {
        let sink = FailingSink::default();
        let err = emit(&json!({"family": "f"}), &sink).expect_err("write fails");
        assert!(matches!(err, RenderError::Write(_)));
        assert_eq!(*sink.discarded.borrow(), vec![PathBuf::from("task-definition-partial.json")]);
    }

    #[test]
    fn pretty_json_uses_two_spaces_and_insertion_order() {
        let td = json!({"family": "f", "containerDefinitions": [{"name": "web", "image": "x"}]});
        let text = to_pretty_json(&td).expect("serialize");
        similar_asserts::assert_eq!(
            text.as_str(),
            "{\n  \"family\": \"f\",\n  \"containerDefinitions\": [\n    {\n      \"name\": \"web\",\n      \"image\": \"x\"\n    }\n  ]\n}"
        );
    }
}
