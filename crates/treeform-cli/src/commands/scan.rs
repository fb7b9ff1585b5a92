//! Implementation of the `treeform scan` command.
//!
//! The reverse direction: render an existing directory as indent-tree text,
//! suitable for feeding straight back into `treeform build`.

use tracing::{info, instrument};

use treeform_adapters::LocalScanner;
use treeform_core::application::ports::{ScanOptions, TreeScanner};

use crate::{
    cli::{ScanArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `treeform scan` command.
#[instrument(skip_all, fields(dir = %args.dir.display()))]
pub fn execute(
    args: ScanArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let options = ScanOptions {
        max_depth: args.max_depth,
        // CLI excludes replace the configured set rather than extending it,
        // so `--exclude` alone can re-include the defaults
        exclude: if args.exclude.is_empty() {
            config.scan.exclude.clone()
        } else {
            args.exclude.clone()
        },
        include_files: !args.no_files,
    };

    let text = LocalScanner::new().scan(&args.dir, &options)?;
    info!(lines = text.lines().count(), "scan finished");

    match &args.output {
        Some(path) => {
            std::fs::write(path, &text).map_err(|e| CliError::IoError {
                message: format!("cannot write '{}'", path.display()),
                source: e,
            })?;
            output.success(&format!("Tree written to {}", path.display()))?;
        }
        None => {
            // raw tree text goes to stdout even in quiet mode; it *is* the
            // command's output, not commentary
            print!("{text}");
        }
    }

    Ok(())
}
