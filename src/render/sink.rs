//! Temp-file output sink

use std::fs;
use std::path::{Path, PathBuf};

use crate::render::OutputSink;

/// Writes each rendered task definition to a kept `task-definition-*.json`
/// file inside `dir`.
pub struct TempFileSink {
    dir: PathBuf,
}

impl TempFileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl OutputSink for TempFileSink {
    fn allocate(&self) -> std::io::Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let file = tempfile::Builder::new()
            .prefix("task-definition-")
            .suffix(".json")
            .tempfile_in(&self.dir)?;
        Ok(file.into_temp_path().keep()?)
    }

    fn write(&self, handle: &Path, contents: &str) -> std::io::Result<()> {
        fs::write(handle, contents)
    }

    fn discard(&self, handle: &Path) -> std::io::Result<()> {
        fs::remove_file(handle)
    }
}
