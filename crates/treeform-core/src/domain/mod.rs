// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Treeform.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O and observability concerns are handled via ports (traits) defined
//! in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable after parse**: a `Tree` is built once, then only read
//! - **Checked handles**: parent/child links are arena indices, not references
//!
pub mod entities;
pub mod error;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    report::MaterializeReport,
    tree::{Node, NodeId, Tree},
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{NodeKind, classify};
