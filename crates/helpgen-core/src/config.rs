//! Configuration management for helpgen
//!
//! Handles loading and validation of helpgen.toml configuration files.
//!
//! # Schema Overview
//!
//! The configuration is structured into sections:
//! - `general`: Binary name, version string, log level and format
//! - `commands`: The command metadata catalog the article builders consume
//!
//! # Forward Compatibility
//!
//! All sections use `#[serde(default)]` to allow missing fields.
//! Unknown fields are ignored to support forward compatibility.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::catalog::CommandSpec;
use crate::error::ConfigError;

// =============================================================================
// Main Config
// =============================================================================

/// Main configuration structure for helpgen
///
/// This struct represents the complete helpgen.toml configuration file.
/// All sections are optional with sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings (binary identity, logging)
    pub general: GeneralConfig,

    /// Command metadata catalog
    pub commands: Vec<CommandSpec>,
}

// =============================================================================
// General Config
// =============================================================================

/// Log format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable pretty format (default for interactive use)
    #[default]
    Pretty,
    /// Machine-parseable JSON lines
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::ParseFailed(format!(
                "invalid log format: {other} (expected 'pretty' or 'json')"
            ))),
        }
    }
}

/// General configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Executable name, substituted for `{{config.bin}}` in help text
    pub bin: String,

    /// Version string, substituted for `{{config.version}}` in help text
    pub version: String,

    /// Log level: trace, debug, info, warn, error
    pub log_level: String,

    /// Log format: pretty (human-readable) or json (machine-parseable)
    pub log_format: LogFormat,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            bin: "helpgen".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

// =============================================================================
// Loading
// =============================================================================

/// CLI-provided configuration overrides, applied after the file layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override the configured log level
    pub log_level: Option<String>,
    /// Override the configured log format
    pub log_format: Option<LogFormat>,
}

impl Config {
    /// Load configuration from the default locations
    ///
    /// Checks `helpgen.toml` in the current directory, then the XDG config
    /// directory, then falls back to defaults.
    pub fn load() -> crate::Result<Self> {
        let cwd_config = Path::new("helpgen.toml");
        if cwd_config.exists() {
            return Self::load_from(cwd_config);
        }

        if let Some(dir) = config_dir() {
            let config_path = dir.join("helpgen.toml");
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::ReadFailed(path.display().to_string(), e.to_string())
        })?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML string
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| ConfigError::ParseFailed(e.to_string()).into())
    }

    /// Load configuration with overrides
    ///
    /// Resolution order: defaults -> config file -> CLI overrides. With
    /// `strict` set, a missing explicit config path is an error rather than
    /// a silent fallback to defaults.
    pub fn load_with_overrides(
        config_path: Option<&Path>,
        strict: bool,
        overrides: &ConfigOverrides,
    ) -> crate::Result<Self> {
        let mut config = match config_path {
            Some(path) => {
                if path.exists() {
                    Self::load_from(path)?
                } else if strict {
                    return Err(ConfigError::FileNotFound(path.display().to_string()).into());
                } else {
                    Self::default()
                }
            }
            None => Self::load()?,
        };

        if let Some(level) = &overrides.log_level {
            config.general.log_level = level.clone();
        }
        if let Some(format) = overrides.log_format {
            config.general.log_format = format;
        }

        Ok(config)
    }
}

fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("helpgen"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = Config::default();
        assert_eq!(config.general.bin, "helpgen");
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.general.log_format, LogFormat::Pretty);
        assert!(config.commands.is_empty());
    }

    #[test]
    fn parses_minimal_toml() {
        let config = Config::from_toml("").expect("parse");
        assert_eq!(config.general.bin, "helpgen");
    }

    #[test]
    fn parses_commands_catalog() {
        let toml_str = r#"
            [general]
            bin = "mycli"
            version = "2.1.0"

            [[commands]]
            name = "deploy"
            summary = "Deploy the project"

            [[commands.flags]]
            long = "force"
            short = "f"
            summary = "Overwrite existing files"
        "#;
        let config = Config::from_toml(toml_str).expect("parse");
        assert_eq!(config.general.bin, "mycli");
        assert_eq!(config.commands.len(), 1);
        assert_eq!(config.commands[0].name, "deploy");
        assert_eq!(config.commands[0].flags.len(), 1);
        assert_eq!(config.commands[0].flags[0].long, "force");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let config = Config::from_toml("[general]\nfuture_knob = true\n").expect("parse");
        assert_eq!(config.general.bin, "helpgen");
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let result = Config::from_toml("[general\nbroken");
        assert!(result.is_err());
    }

    #[test]
    fn overrides_win_over_file_values() {
        let overrides = ConfigOverrides {
            log_level: Some("debug".to_string()),
            log_format: Some(LogFormat::Json),
        };
        let config = Config::load_with_overrides(None, false, &overrides).expect("load");
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.general.log_format, LogFormat::Json);
    }

    #[test]
    fn strict_missing_path_is_an_error() {
        let missing = Path::new("/nonexistent/helpgen.toml");
        let result = Config::load_with_overrides(Some(missing), true, &ConfigOverrides::default());
        assert!(result.is_err());
    }

    #[test]
    fn log_format_round_trips() {
        assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert!("yaml".parse::<LogFormat>().is_err());
        assert_eq!(LogFormat::Json.to_string(), "json");
    }
}
