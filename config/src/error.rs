//! Error types for table file operations.
//!
//! Provides a unified error type covering I/O, serialization, unsupported
//! file formats, and tables rejected by validation.

use std::path::PathBuf;

use optbind_core::TableIssue;
use thiserror::Error;

/// Errors that can occur while loading or saving table files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing or serialization failure.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// File extension is not one of `.json`, `.yaml`, `.yml`.
    #[error("unsupported table file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// Table validation reported issues.
    #[error("invalid option table: {}", format_issues(.0))]
    InvalidTable(Vec<TableIssue>),
}

fn format_issues(issues: &[TableIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Convenience alias for results with [`ConfigError`].
pub type Result<T> = std::result::Result<T, ConfigError>;
