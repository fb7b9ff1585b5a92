//! `treeform config` — inspect and edit the configuration file.
//!
//! Keys are dotted paths resolved by hand; the config surface is small
//! enough that a lookup table beats reflection.

use std::path::PathBuf;

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute a `treeform config` subcommand.
pub fn execute(cmd: ConfigCommands, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let path = global
        .config
        .clone()
        .unwrap_or_else(AppConfig::config_path);

    match cmd {
        ConfigCommands::Get { key } => {
            let config = AppConfig::load(global.config.as_ref()).map_err(config_error)?;
            let value = get_key(&config, &key).ok_or(CliError::UnknownConfigKey { key })?;
            output.print(&value)?;
        }
        ConfigCommands::Set { key, value } => {
            // start from the file if present, defaults otherwise
            let mut config = if path.exists() {
                AppConfig::load(Some(&path)).map_err(config_error)?
            } else {
                AppConfig::default()
            };
            set_key(&mut config, &key, &value)?;
            save(&config, &path)?;
            output.success(&format!("{key} = {value}"))?;
        }
        ConfigCommands::List => {
            let config = AppConfig::load(global.config.as_ref()).map_err(config_error)?;
            let text = toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                message: format!("cannot render configuration: {e}"),
                source: Some(Box::new(e)),
            })?;
            output.print(text.trim_end())?;
        }
        ConfigCommands::Path => {
            output.print(&path.display().to_string())?;
        }
    }

    Ok(())
}

fn config_error(e: anyhow::Error) -> CliError {
    CliError::ConfigError {
        message: e.to_string(),
        source: None,
    }
}

fn get_key(config: &AppConfig, key: &str) -> Option<String> {
    match key {
        "defaults.out_dir" => Some(config.defaults.out_dir.display().to_string()),
        "defaults.stubs" => Some(config.defaults.stubs.to_string()),
        "output.no_color" => Some(config.output.no_color.to_string()),
        "scan.exclude" => Some(config.scan.exclude.join(",")),
        _ => None,
    }
}

fn set_key(config: &mut AppConfig, key: &str, value: &str) -> CliResult<()> {
    match key {
        "defaults.out_dir" => config.defaults.out_dir = PathBuf::from(value),
        "defaults.stubs" => config.defaults.stubs = parse_bool(key, value)?,
        "output.no_color" => config.output.no_color = parse_bool(key, value)?,
        "scan.exclude" => {
            config.scan.exclude = value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
        _ => {
            return Err(CliError::UnknownConfigKey { key: key.into() });
        }
    }
    Ok(())
}

fn parse_bool(key: &str, value: &str) -> CliResult<bool> {
    match value {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(CliError::InvalidInput {
            message: format!("'{value}' is not a boolean for {key}"),
        }),
    }
}

fn save(config: &AppConfig, path: &std::path::Path) -> CliResult<()> {
    let text = toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("cannot serialise configuration: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| CliError::IoError {
                message: format!("cannot create '{}'", parent.display()),
                source: e,
            })?;
        }
    }

    std::fs::write(path, text).map_err(|e| CliError::IoError {
        message: format!("cannot write '{}'", path.display()),
        source: e,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
