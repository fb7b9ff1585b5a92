//! Implementation of the `treeform build` command.
//!
//! Responsibility: read the source text, pick the right parser, hand the
//! tree to the core materialize service, and display the tally. No parsing
//! or walking logic lives here.

use std::path::Path;

use tracing::{debug, info, instrument};

use treeform_adapters::{BuiltinStubs, LocalFilesystem, TracingSink};
use treeform_core::{
    application::MaterializeService,
    domain::{MaterializeReport, Tree},
    parse::{IndentTreeParser, OutlineParser},
};

use crate::{
    cli::{BuildArgs, SourceFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `treeform build` command.
///
/// Dispatch sequence:
/// 1. Read the source file (the only hard failure)
/// 2. Resolve the input format and parse
/// 3. Optionally export the parsed tree as JSON
/// 4. Early-exit if `--dry-run`
/// 5. Materialize via `MaterializeService`
/// 6. Print the tally
#[instrument(skip_all, fields(source = %args.source.display()))]
pub fn execute(
    args: BuildArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Read source text
    let text = std::fs::read_to_string(&args.source).map_err(|e| CliError::SourceNotFound {
        path: args.source.clone(),
        source: e,
    })?;

    // 2. Parse
    let format = resolve_format(args.format, &args.source);
    debug!(?format, "input format resolved");

    let sink = TracingSink::new();
    let tree = match format {
        ResolvedFormat::Tree => IndentTreeParser::with_sink(&sink).parse(&text),
        ResolvedFormat::Outline => OutlineParser::with_sink(&sink).parse(&text),
    };
    info!(nodes = tree.len() - 1, "source parsed");

    if tree.is_empty() {
        output.warning(&format!(
            "'{}' contains no structure entries",
            args.source.display()
        ))?;
    }

    // 3. JSON export
    if let Some(json_path) = &args.export_json {
        export_json(&tree, json_path)?;
        output.info(&format!("Parsed tree exported to {}", json_path.display()))?;
    }

    // 4. Dry run: describe but do not write.
    let out_dir = args.out.clone().unwrap_or(config.defaults.out_dir.clone());
    if args.dry_run {
        output.info(&format!(
            "Dry run: would create under {}",
            out_dir.display()
        ))?;
        for line in tree.to_string().lines() {
            output.print(&format!("  {line}"))?;
        }
        return Ok(());
    }

    // 5. Materialize
    output.header(&format!("Growing '{}'...", out_dir.display()))?;
    info!(target = %out_dir.display(), "materialization started");

    let mut service = MaterializeService::new(Box::new(LocalFilesystem::new()))
        .with_sink(Box::new(TracingSink::new()));
    if args.stubs || config.defaults.stubs {
        service = service.with_stubs(Box::new(BuiltinStubs::new()));
    }
    let report = service.materialize(&tree, &out_dir);

    // 6. Report
    print_report(&report, &output)?;
    Ok(())
}

/// Input format after `auto` resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResolvedFormat {
    Tree,
    Outline,
}

fn resolve_format(requested: SourceFormat, source: &Path) -> ResolvedFormat {
    match requested {
        SourceFormat::Tree => ResolvedFormat::Tree,
        SourceFormat::Outline => ResolvedFormat::Outline,
        SourceFormat::Auto => {
            let extension = source
                .extension()
                .map(|e| e.to_string_lossy().to_ascii_lowercase());
            match extension.as_deref() {
                Some("md") | Some("markdown") => ResolvedFormat::Outline,
                _ => ResolvedFormat::Tree,
            }
        }
    }
}

fn export_json(tree: &Tree, path: &Path) -> CliResult<()> {
    let json = serde_json::to_string_pretty(tree).map_err(|e| CliError::InvalidInput {
        message: format!("tree serialization failed: {e}"),
    })?;
    std::fs::write(path, json).map_err(|e| CliError::IoError {
        message: format!("cannot write '{}'", path.display()),
        source: e,
    })?;
    Ok(())
}

fn print_report(report: &MaterializeReport, output: &OutputManager) -> CliResult<()> {
    output.print(&format!(
        "  directories created: {}",
        report.directories_created
    ))?;
    output.print(&format!("  files created:       {}", report.files_created))?;
    output.print(&format!("  skipped (existing):  {}", report.skipped))?;

    if report.is_clean() {
        output.success("Structure grown")?;
    } else {
        output.warning(&format!(
            "Finished with {} error(s); see the log for details",
            report.errors
        ))?;
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_extensions_resolve_to_outline() {
        assert_eq!(
            resolve_format(SourceFormat::Auto, Path::new("layout.md")),
            ResolvedFormat::Outline
        );
        assert_eq!(
            resolve_format(SourceFormat::Auto, Path::new("LAYOUT.MARKDOWN")),
            ResolvedFormat::Outline
        );
    }

    #[test]
    fn everything_else_resolves_to_tree() {
        assert_eq!(
            resolve_format(SourceFormat::Auto, Path::new("structure.txt")),
            ResolvedFormat::Tree
        );
        assert_eq!(
            resolve_format(SourceFormat::Auto, Path::new("no_extension")),
            ResolvedFormat::Tree
        );
    }

    #[test]
    fn explicit_format_beats_the_extension() {
        assert_eq!(
            resolve_format(SourceFormat::Outline, Path::new("structure.txt")),
            ResolvedFormat::Outline
        );
        assert_eq!(
            resolve_format(SourceFormat::Tree, Path::new("layout.md")),
            ResolvedFormat::Tree
        );
    }
}
