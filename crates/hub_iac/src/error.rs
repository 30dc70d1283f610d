//! Error types for template assembly.

use thiserror::Error;

/// Result type alias for IaC operations.
pub type IacResult<T> = Result<T, IacError>;

/// Errors that can occur while assembling or previewing a template.
///
/// Name derivation itself never fails; these cover the template and
/// configuration layers around it.
#[derive(Error, Debug)]
pub enum IacError {
    #[error("Duplicate logical id in template: {0}")]
    DuplicateLogicalId(String),

    #[error("Output {output} references undeclared parameter: {reference}")]
    UndeclaredReference { output: String, reference: String },

    #[error("No binding for parameter: {0}")]
    UnboundParameter(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    #[error("YAML error")]
    Yaml(#[from] serde_yaml::Error),
}
