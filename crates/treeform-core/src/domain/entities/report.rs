use serde::Serialize;
use std::fmt;

/// Tally returned by a materialization pass.
///
/// This is the only output of the walk besides the filesystem side effects.
/// It contains no node references, only counts; a non-zero `errors` field
/// means some subtrees were not fully written, never that the walk aborted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MaterializeReport {
    pub directories_created: usize,
    pub files_created: usize,
    pub skipped: usize,
    pub errors: usize,
}

impl MaterializeReport {
    /// Total entries written this pass.
    pub fn created(&self) -> usize {
        self.directories_created + self.files_created
    }

    /// `true` when every node was either created or skipped.
    pub fn is_clean(&self) -> bool {
        self.errors == 0
    }
}

impl fmt::Display for MaterializeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} directories, {} files created; {} skipped; {} errors",
            self.directories_created, self.files_created, self.skipped, self.errors
        )
    }
}
