//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use treeform_core::{application::ports::Filesystem, error::TreeformResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> TreeformResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> TreeformResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> treeform_core::error::TreeformError {
    use treeform_core::application::ApplicationError;

    ApplicationError::WriteFailed {
        path: path.to_path_buf(),
        reason: format!("failed to {}: {}", operation, e),
    }
    .into()
}
