//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "treeform",
    bin_name = "treeform",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f333} Grow real directory trees from text",
    long_about = "Treeform turns ASCII tree sketches and Markdown outlines \
                  into real directories and files, and renders existing \
                  directories back into tree text.",
    after_help = "EXAMPLES:\n\
        \x20 treeform build structure.txt --out ./my-project\n\
        \x20 treeform build layout.md --stubs\n\
        \x20 treeform scan ./src --max-depth 2\n\
        \x20 treeform completions bash > /usr/share/bash-completion/completions/treeform",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse a structure file and create it on disk.
    #[command(
        visible_alias = "b",
        about = "Create directories and files from a structure file",
        after_help = "EXAMPLES:\n\
            \x20 treeform build structure.txt\n\
            \x20 treeform build layout.md --out ./generated --stubs\n\
            \x20 treeform build structure.txt --dry-run\n\
            \x20 treeform build layout.md --export-json tree.json"
    )]
    Build(BuildArgs),

    /// Render an existing directory as indent-tree text.
    #[command(
        visible_alias = "s",
        about = "Render a directory as tree text",
        after_help = "EXAMPLES:\n\
            \x20 treeform scan .\n\
            \x20 treeform scan ./src --max-depth 2 --no-files\n\
            \x20 treeform scan . --exclude target --exclude .git --output tree.txt"
    )]
    Scan(ScanArgs),

    /// Write a commented sample structure file to start from.
    #[command(
        about = "Create a sample structure file",
        after_help = "EXAMPLES:\n\
            \x20 treeform init\n\
            \x20 treeform init my-layout.txt --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 treeform completions bash > ~/.local/share/bash-completion/completions/treeform\n\
            \x20 treeform completions zsh  > ~/.zfunc/_treeform\n\
            \x20 treeform completions fish > ~/.config/fish/completions/treeform.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Treeform configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 treeform config get defaults.out_dir\n\
            \x20 treeform config set defaults.stubs true\n\
            \x20 treeform config list"
    )]
    Config(ConfigCommands),
}

// ── build ─────────────────────────────────────────────────────────────────────

/// Arguments for `treeform build`.
#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Structure file to read (indent tree or Markdown outline).
    #[arg(value_name = "SOURCE", help = "Structure file to build from")]
    pub source: PathBuf,

    /// Target directory for the generated structure.
    #[arg(
        short = 'o',
        long = "out",
        value_name = "DIR",
        help = "Target directory (default from config, usually ./output)"
    )]
    pub out: Option<PathBuf>,

    /// Input notation.
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "auto",
        help = "Input format (auto picks by file extension)"
    )]
    pub format: SourceFormat,

    /// Fill content-less files from the built-in stub table.
    #[arg(long = "stubs", help = "Fill empty files with extension stubs")]
    pub stubs: bool,

    /// Preview the parsed tree without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Export the parsed tree as JSON before materializing.
    #[arg(
        long = "export-json",
        value_name = "FILE",
        help = "Write the parsed tree to FILE as JSON"
    )]
    pub export_json: Option<PathBuf>,
}

/// Input notation for `treeform build`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceFormat {
    /// Pick by extension: `.md`/`.markdown` is an outline, anything else a tree.
    Auto,
    /// Indentation/box-drawing ASCII tree.
    Tree,
    /// Markdown outline with headings, bullets, and fences.
    Outline,
}

// ── scan ──────────────────────────────────────────────────────────────────────

/// Arguments for `treeform scan`.
#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Directory to render.
    #[arg(value_name = "DIR", default_value = ".", help = "Directory to scan")]
    pub dir: PathBuf,

    /// Maximum recursion depth.
    #[arg(long = "max-depth", value_name = "N", help = "Limit recursion depth")]
    pub max_depth: Option<usize>,

    /// Directory names to skip (repeatable).
    #[arg(
        short = 'e',
        long = "exclude",
        value_name = "NAME",
        help = "Skip directories with this name (repeatable)"
    )]
    pub exclude: Vec<String>,

    /// List directories only.
    #[arg(long = "no-files", help = "Omit files from the output")]
    pub no_files: bool,

    /// Write the tree text to a file instead of stdout.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Write output to FILE"
    )]
    pub output: Option<PathBuf>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `treeform init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Where to write the sample file.
    #[arg(
        value_name = "PATH",
        default_value = "structure.txt",
        help = "Sample file location"
    )]
    pub path: PathBuf,

    /// Overwrite an existing file.
    #[arg(short = 'f', long = "force", help = "Overwrite an existing file")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `treeform completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `treeform config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.out_dir`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
