//! Configuration System
//!
//! Layered configuration for the store location, the command-replay style
//! settings and logging. Sources are merged by [`ConfigLoader`]: defaults,
//! the global file, workspace files, then `CONFVIEW__SECTION__KEY`
//! environment variables.

use crate::error::ShowError;
use crate::logging::LoggingConfig;
use crate::types::GenModelStyle;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub store: StoreConfig,

    /// Rendering and completion settings
    #[serde(default)]
    pub cli: CliConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Location of the persistent configuration store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

fn default_store_path() -> PathBuf {
    PathBuf::from(".confview/store")
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

/// Settings read by the show and completion operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Command-replay style: none, vars or all. Kept raw and parsed on use.
    #[serde(default = "default_genmodel_type")]
    pub genmodel_type: String,

    /// Leaf names treated as list keys by the command-replay format
    #[serde(default = "default_list_keys")]
    pub list_keys: Vec<String>,

    /// Prefix for command-replay lines
    #[serde(default)]
    pub prefix: Option<String>,

    /// Pretty-print JSON output
    #[serde(default = "default_true")]
    pub pretty: bool,
}

fn default_genmodel_type() -> String {
    "vars".to_string()
}

fn default_list_keys() -> Vec<String> {
    vec!["name".to_string()]
}

fn default_true() -> bool {
    true
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            genmodel_type: default_genmodel_type(),
            list_keys: default_list_keys(),
            prefix: None,
            pretty: default_true(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Store(String),
    Cli(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Store(msg) => write!(f, "Store: {}", msg),
            ValidationError::Cli(msg) => write!(f, "Cli: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl CliConfig {
    pub fn validate(&self) -> Result<(), String> {
        self.genmodel_type
            .parse::<GenModelStyle>()
            .map_err(|e| e.to_string())?;
        if self.list_keys.iter().any(|k| k.trim().is_empty()) {
            return Err("list_keys cannot contain empty names".to_string());
        }
        Ok(())
    }
}

impl AppConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.store.path.as_os_str().is_empty() {
            errors.push(ValidationError::Store("Store path cannot be empty".to_string()));
        }
        if let Err(e) = self.cli.validate() {
            errors.push(ValidationError::Cli(e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// [`AppConfig::validate`] folded into a single error.
    pub fn validated(self) -> Result<Self, ShowError> {
        self.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ShowError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;
        Ok(self)
    }
}
