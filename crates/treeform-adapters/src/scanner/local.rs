//! Reverse scanner over the local filesystem.
//!
//! Walks an existing directory and renders it as indent-tree text using the
//! same box-drawing convention the indent parser accepts. The companion tool
//! behind `treeform scan` and the round-trip tests.

use std::fs;
use std::path::Path;

use tracing::{instrument, warn};

use treeform_core::{
    application::{
        ApplicationError,
        ports::{ScanOptions, TreeScanner},
    },
    error::TreeformResult,
};

/// Scanner rendering `std::fs` state as indent-tree text.
///
/// Output ordering is directories before files, then lexicographic, at every
/// level; directory entries carry a trailing `/` so a re-parse classifies
/// them without guessing.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalScanner;

impl LocalScanner {
    pub fn new() -> Self {
        Self
    }
}

impl TreeScanner for LocalScanner {
    #[instrument(skip_all, fields(root = %root.display()))]
    fn scan(&self, root: &Path, options: &ScanOptions) -> TreeformResult<String> {
        // The root line is the directory's own basename.
        let root_name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| root.display().to_string());

        let mut out = format!("{root_name}/\n");
        scan_recursive(root, "", 0, options, &mut out)?;
        Ok(out)
    }
}

fn scan_recursive(
    dir: &Path,
    prefix: &str,
    depth: usize,
    options: &ScanOptions,
    out: &mut String,
) -> TreeformResult<()> {
    if let Some(max) = options.max_depth {
        if depth >= max {
            return Ok(());
        }
    }

    let entries = fs::read_dir(dir).map_err(|e| ApplicationError::ScanFailed {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut listed: Vec<(String, bool)> = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(path = %dir.display(), error = %e, "unreadable entry skipped");
                continue;
            }
        };
        let name = entry.file_name().to_string_lossy().into_owned();
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);

        if is_dir && options.exclude.iter().any(|ex| *ex == name) {
            continue;
        }
        if !is_dir && !options.include_files {
            continue;
        }
        listed.push((name, is_dir));
    }

    // directories first, then lexicographic
    listed.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let last = listed.len().saturating_sub(1);
    for (i, (name, is_dir)) in listed.iter().enumerate() {
        let connector = if i == last { "└── " } else { "├── " };
        let filler = if i == last { "    " } else { "│   " };
        let suffix = if *is_dir { "/" } else { "" };

        out.push_str(prefix);
        out.push_str(connector);
        out.push_str(name);
        out.push_str(suffix);
        out.push('\n');

        if *is_dir {
            let child_prefix = format!("{prefix}{filler}");
            // a subtree that fails to read is reported and skipped, the
            // remaining siblings still render
            if let Err(e) = scan_recursive(&dir.join(name), &child_prefix, depth + 1, options, out)
            {
                warn!(error = %e, "subtree skipped");
            }
        }
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
