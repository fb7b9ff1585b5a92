//! Treeform Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Treeform
//! structure-growing tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          treeform-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     Parsers + Application Services      │
//! │ (IndentTreeParser, OutlineParser,       │
//! │  MaterializeService)                    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, StubTemplates,             │
//! │  ProgressSink, TreeScanner)             │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    treeform-adapters (Infrastructure)   │
//! │ (LocalFilesystem, MemoryFilesystem,     │
//! │  TracingSink, BuiltinStubs, LocalScanner)│
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │  (Tree, Node, NodeKind, classify,       │
//! │   MaterializeReport)                    │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```text
//! // 1. Parse a textual tree
//! let tree = IndentTreeParser::new().parse("src/\n├── main.rs\n");
//!
//! // 2. Materialize it (with injected adapters)
//! let service = MaterializeService::new(Box::new(LocalFilesystem::new()));
//! let report = service.materialize(&tree, "./output".as_ref());
//! println!("{} directories created", report.directories_created);
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Text-to-tree parsers
pub mod parse;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        MaterializeService,
        ports::{Filesystem, ProgressEvent, ProgressSink, ScanOptions, StubTemplates, TreeScanner},
    };
    pub use crate::domain::{MaterializeReport, Node, NodeId, NodeKind, Tree, classify};
    pub use crate::error::{TreeformError, TreeformResult};
    pub use crate::parse::{IndentTreeParser, OutlineParser};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
