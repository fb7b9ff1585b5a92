//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config` path, or the default location if it exists)
//! 3. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for `treeform build`.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Default values for `treeform scan`.
    pub scan: ScanConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Target directory when `--out` is not given.
    pub out_dir: PathBuf,
    /// Consult the stub table without `--stubs`.
    pub stubs: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Directory names skipped when `--exclude` is not given.
    pub exclude: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
            output: OutputConfig::default(),
            scan: ScanConfig::default(),
        }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("./output"),
            stubs: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { no_color: false }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            exclude: vec!["node_modules".into(), ".git".into()],
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// An explicit `--config` path must exist and parse; the default
    /// location is optional and silently falls back to built-in defaults.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        match config_file {
            Some(path) => Self::from_file(path),
            None => {
                let path = Self::config_path();
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("cannot read config '{}': {e}", path.display()))?;
        toml::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("cannot parse config '{}': {e}", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.treeform.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("rs", "treeform", "treeform")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".treeform.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_out_dir_is_output() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.out_dir, PathBuf::from("./output"));
        assert!(!cfg.defaults.stubs);
    }

    #[test]
    fn default_scan_excludes_the_usual_suspects() {
        let cfg = AppConfig::default();
        assert!(cfg.scan.exclude.iter().any(|e| e == "node_modules"));
        assert!(cfg.scan.exclude.iter().any(|e| e == ".git"));
    }

    #[test]
    fn partial_config_files_fill_from_defaults() {
        let cfg: AppConfig = toml::from_str("[defaults]\nstubs = true\n").unwrap();
        assert!(cfg.defaults.stubs);
        assert_eq!(cfg.defaults.out_dir, PathBuf::from("./output"));
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn round_trips_through_toml() {
        let cfg = AppConfig::default();
        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.defaults.out_dir, cfg.defaults.out_dir);
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let missing = PathBuf::from("/definitely/not/here.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
