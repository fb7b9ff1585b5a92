//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `treeform-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by
//!   infrastructure
//!   - `Filesystem`: directory/file creation
//!   - `StubTemplates`: the fixed extension→content lookup
//!   - `ProgressSink`: structured per-node progress events
//!   - `TreeScanner`: filesystem → indent-tree text (companion tool)
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by
//!   application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{
    Filesystem, NullSink, ProgressEvent, ProgressSink, ScanOptions, StubTemplates, TreeScanner,
};
