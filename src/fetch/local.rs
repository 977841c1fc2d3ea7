//! Local task definition files

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::RenderError;
use crate::fetch::DescriptorFiles;

/// Reads task definition files relative to a workspace root.
pub struct LocalFiles {
    workspace: PathBuf,
}

impl LocalFiles {
    pub fn new(workspace: PathBuf) -> Self {
        Self { workspace }
    }

    /// Relative paths are joined onto the workspace root.
    fn resolve(&self, path: &str) -> PathBuf {
        let candidate = Path::new(path);
        if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            self.workspace.join(candidate)
        }
    }
}

impl DescriptorFiles for LocalFiles {
    fn exists(&self, path: &str) -> bool {
        self.resolve(path).exists()
    }

    fn read(&self, path: &str) -> Result<String, RenderError> {
        let resolved = self.resolve(path);
        tracing::debug!("reading task definition from {}", resolved.display());
        fs::read_to_string(&resolved)
            .map_err(|source| RenderError::Read { path: path.to_string(), source })
    }
}
