//! Progress sink that records events for inspection in tests.

use std::sync::{Arc, Mutex};

use treeform_core::application::ports::{ProgressEvent, ProgressSink};

/// Testing sink: appends every event to a shared vector.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<ProgressEvent>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Count of events matching the predicate.
    pub fn count(&self, predicate: impl Fn(&ProgressEvent) -> bool) -> usize {
        self.events.lock().unwrap().iter().filter(|e| predicate(e)).count()
    }
}

impl ProgressSink for RecordingSink {
    fn event(&self, event: &ProgressEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}
