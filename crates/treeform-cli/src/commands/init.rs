//! `treeform init` — create a sample structure file.

use crate::{
    cli::{GlobalArgs, InitArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Commented example fed to new users; `treeform build` skips every line
/// starting with `#`, so the file works as-is.
const SAMPLE_STRUCTURE: &str = "\
# Paste your project structure here
# Example:
project/
├── src/
│   ├── components/
│   │   ├── Button.js
│   │   └── Header.js
│   └── index.js
└── package.json
";

/// Write the sample structure file.
pub fn execute(args: InitArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    if args.path.exists() && !args.force {
        return Err(CliError::TargetExists {
            path: args.path.clone(),
        });
    }

    if let Some(parent) = args.path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| CliError::IoError {
                message: format!("cannot create '{}'", parent.display()),
                source: e,
            })?;
        }
    }

    std::fs::write(&args.path, SAMPLE_STRUCTURE).map_err(|e| CliError::IoError {
        message: format!("cannot write '{}'", args.path.display()),
        source: e,
    })?;

    output.success(&format!("Sample structure written to {}", args.path.display()))?;
    output.print("Edit it, then run: treeform build <file>")?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
