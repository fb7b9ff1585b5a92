//! Progress sink that forwards events to `tracing`.

use tracing::{debug, info, warn};

use treeform_core::application::ports::{ProgressEvent, ProgressSink};

/// Production sink: one log event per progress event.
///
/// Creations log at INFO, skips and dropped lines at DEBUG, failures at
/// WARN. Severity lives here, not in the core, so alternative sinks are free
/// to disagree.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl ProgressSink for TracingSink {
    fn event(&self, event: &ProgressEvent) {
        match event {
            ProgressEvent::LineSkipped { line } => {
                debug!(line, "input line skipped");
            }
            ProgressEvent::DirectoryCreated { path } => {
                info!(path = %path.display(), "directory created");
            }
            ProgressEvent::DirectorySkipped { path } => {
                debug!(path = %path.display(), "directory exists, skipped");
            }
            ProgressEvent::FileCreated { path } => {
                info!(path = %path.display(), "file created");
            }
            ProgressEvent::FileSkipped { path } => {
                debug!(path = %path.display(), "file exists, skipped");
            }
            ProgressEvent::NodeFailed { path, reason } => {
                warn!(path = %path.display(), %reason, "node failed");
            }
        }
    }
}
