//! Value objects shared by both parsers and the materializer.

use serde::Serialize;
use std::fmt;

/// The two kinds of tree entry.
///
/// `kind` is inferred once by [`classify`] (or forced by the input format)
/// and never changes for the lifetime of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Directory,
    File,
}

impl NodeKind {
    pub fn is_directory(self) -> bool {
        matches!(self, Self::Directory)
    }

    pub fn is_file(self) -> bool {
        matches!(self, Self::File)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory => write!(f, "directory"),
            Self::File => write!(f, "file"),
        }
    }
}

/// Classify a raw label into `(name, kind)`.
///
/// The single place where the shape heuristic lives:
///
/// - a trailing `/` is stripped and forces [`NodeKind::Directory`];
/// - otherwise a label containing `.` is a [`NodeKind::File`];
/// - anything else is a [`NodeKind::Directory`].
pub fn classify(label: &str) -> (&str, NodeKind) {
    if let Some(stripped) = label.strip_suffix('/') {
        (stripped, NodeKind::Directory)
    } else if label.contains('.') {
        (label, NodeKind::File)
    } else {
        (label, NodeKind::Directory)
    }
}
