//! berray-doc configuration.
//!
//! Looked up in this order:
//! - the file given with `--config` (must exist)
//! - `berray-doc.toml` in the working directory
//! - Linux/macOS: ~/.config/berray-doc/config.toml
//! - Windows: %APPDATA%\berray-doc\config.toml
//!
//! Missing files fall through to the next location; when none exists the
//! defaults apply.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DocgenError, Result};

/// Project-local configuration file name
pub const LOCAL_CONFIG_FILE: &str = "berray-doc.toml";

/// Framework base types whose descendants are documented
pub const DEFAULT_INTERESTING_TYPES: &[&str] = &[
    "com.berray.GameObject",
    "com.berray.components.core.Component",
    "com.berray.components.core.Action",
];

/// berray-doc configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocConfig {
    /// Fully-qualified base types that make a class worth documenting
    #[serde(default = "default_interesting_types")]
    pub interesting_base_types: Vec<String>,

    /// Output file, relative to the invocation directory
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Library types that are not part of the source tree
    #[serde(default)]
    pub known_types: Vec<KnownType>,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_interesting_types() -> Vec<String> {
    DEFAULT_INTERESTING_TYPES
        .iter()
        .map(|name| name.to_string())
        .collect()
}

fn default_output() -> PathBuf {
    PathBuf::from("doc").join("doc.json")
}

impl Default for DocConfig {
    fn default() -> Self {
        Self {
            interesting_base_types: default_interesting_types(),
            output: default_output(),
            known_types: Vec::new(),
            logging: LoggingConfig::default(),
        }
    }
}

/// A type outside the source tree, declared with its direct supertypes
///
/// ```toml
/// [[known_types]]
/// name = "org.joml.Vector2f"
/// interfaces = ["java.io.Serializable"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KnownType {
    /// Fully-qualified name
    pub name: String,

    /// Superclass; `java.lang.Object` when omitted for classes
    #[serde(default)]
    pub superclass: Option<String>,

    #[serde(default)]
    pub interfaces: Vec<String>,

    /// Declared as an interface rather than a class
    #[serde(default)]
    pub interface: bool,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl DocConfig {
    /// Load configuration, honoring an explicit `--config` path
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(DocgenError::ConfigError {
                    message: format!("Config file not found: {}", path.display()),
                });
            }
            return Self::load_from(path);
        }

        for candidate in Self::search_paths() {
            if candidate.exists() {
                return Self::load_from(&candidate);
            }
        }
        Ok(Self::default())
    }

    /// Implicit config locations, most specific first
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("berray-doc").join("config.toml"));
        }
        paths
    }

    /// Load configuration from a specific path; defaults if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| DocgenError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| match e {
            DocgenError::ConfigError { message } => DocgenError::ConfigError {
                message: format!("{}: {}", path.display(), message),
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| DocgenError::ConfigError {
            message: format!("Failed to parse config: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !["error", "warn", "info", "debug", "trace"].contains(&self.logging.level.as_str()) {
            return Err(DocgenError::ConfigError {
                message: format!(
                    "Invalid log level: {}. Must be one of: error, warn, info, debug, trace",
                    self.logging.level
                ),
            });
        }
        if let Some(empty) = self.known_types.iter().find(|t| t.name.trim().is_empty()) {
            return Err(DocgenError::ConfigError {
                message: format!("known type with empty name: {:?}", empty),
            });
        }
        Ok(())
    }
}
