//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `treeform-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::error::TreeformResult;

#[cfg(test)]
use mockall::automock;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `treeform_adapters::filesystem::LocalFilesystem` (production)
/// - `treeform_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - `exists` is deliberately kind-blind: a directory occupying a file's
///   target path still counts as "exists" and produces a skip, never an
///   overwrite.
/// - Adapters surface failures as `ApplicationError::WriteFailed`; the
///   materializer decides what a failure means for the walk.
#[cfg_attr(test, automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> TreeformResult<()>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> TreeformResult<()>;

    /// Check if any entry exists at this path.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the fixed extension→template table.
///
/// The materializer may consult it for File nodes that carry no content;
/// this is a lookup, not a templating system.
///
/// Implemented by `treeform_adapters::stubs::BuiltinStubs`.
pub trait StubTemplates: Send + Sync {
    /// Stub content for the given file name, if the table covers it.
    fn stub_for(&self, file_name: &str) -> Option<&str>;
}

/// Structured progress event reported by parsers and the materializer.
///
/// Replaces ad-hoc console logging during traversal; sinks decide whether
/// events become log lines, counters, or nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// A source line was dropped during parsing (empty label, invalid name).
    LineSkipped { line: usize },
    DirectoryCreated { path: PathBuf },
    DirectorySkipped { path: PathBuf },
    FileCreated { path: PathBuf },
    FileSkipped { path: PathBuf },
    NodeFailed { path: PathBuf, reason: String },
}

/// Port for observing progress events.
///
/// Implemented by:
/// - `treeform_adapters::progress::TracingSink` (production)
/// - `treeform_adapters::progress::RecordingSink` (testing)
/// - [`NullSink`] (default, discards everything)
pub trait ProgressSink: Send + Sync {
    fn event(&self, event: &ProgressEvent);
}

/// Sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ProgressSink for NullSink {
    fn event(&self, _event: &ProgressEvent) {}
}

/// Traversal configuration for the reverse scanner.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Maximum recursion depth below the root; `None` means unlimited.
    pub max_depth: Option<usize>,
    /// Directory names skipped entirely.
    pub exclude: Vec<String>,
    /// Emit file entries, not just directories.
    pub include_files: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            max_depth: None,
            exclude: vec!["node_modules".into(), ".git".into()],
            include_files: true,
        }
    }
}

/// Port for the reverse direction: filesystem → indent-tree text.
///
/// The core only consumes this for round-trip validation; the implementation
/// lives in `treeform_adapters::scanner::LocalScanner`.
///
/// Output contract: root line is `basename/`, children use the box-drawing
/// convention the indent parser accepts, directories before files, then
/// lexicographic, at every level.
pub trait TreeScanner: Send + Sync {
    fn scan(&self, root: &Path, options: &ScanOptions) -> TreeformResult<String>;
}
