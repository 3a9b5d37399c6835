//! Error types for the completion and show-configuration layer.

use thiserror::Error;

/// Store-related errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Configuration instance not available: {0}")]
    InstanceNotFound(String),

    #[error("Store backend error: {0}")]
    Backend(String),

    #[error("Invalid query path: {0}")]
    InvalidPath(String),

    #[error("Store codec error: {0}")]
    Codec(String),

    #[error("Store I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Errors surfaced by completion, fetch and render operations
#[derive(Debug, Error)]
pub enum ShowError {
    #[error("No such db name: {0}")]
    InvalidInstance(String),

    #[error("xpath '{template}' does not have a single '%' (found {found})")]
    TemplateArity { template: String, found: usize },

    #[error("attr '{0}' not found in cligen var list")]
    VariableNotFound(String),

    #[error("Store error: {0}")]
    StoreError(#[from] StoreError),

    #[error("No xml body: {0}")]
    Extraction(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("CSV rendering requires a field list")]
    FieldProjection,

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Invalid path expression: {0}")]
    InvalidPath(String),

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<config::ConfigError> for ShowError {
    fn from(err: config::ConfigError) -> Self {
        ShowError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for ShowError {
    fn from(err: serde_json::Error) -> Self {
        ShowError::Serialization(err.to_string())
    }
}
