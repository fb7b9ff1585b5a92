//! `treeform completions` — emit shell completion scripts to stdout.

use clap::CommandFactory;
use clap_complete::{Shell as CompleteShell, generate};

use crate::{
    cli::{Cli, CompletionsArgs, Shell},
    error::CliResult,
};

/// Generate a completion script for the requested shell.
pub fn execute(args: CompletionsArgs) -> CliResult<()> {
    let shell = match args.shell {
        Shell::Bash => CompleteShell::Bash,
        Shell::Zsh => CompleteShell::Zsh,
        Shell::Fish => CompleteShell::Fish,
        Shell::PowerShell => CompleteShell::PowerShell,
        Shell::Elvish => CompleteShell::Elvish,
    };

    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut std::io::stdout());
    Ok(())
}
