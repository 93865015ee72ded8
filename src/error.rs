//! Error types for composer-changelogs.

use std::path::PathBuf;

use thiserror::Error;

/// Reasons a comparison link could not be derived for an update.
///
/// These are expected outcomes rather than failures of the tool: the
/// [`Display`](std::fmt::Display) text is meant to be printed in place of
/// the link.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChangelogError {
    #[error("Unknown changelog; source URLs don't match: {initial}, {target}")]
    SourceMismatch { initial: String, target: String },

    #[error("Unknown changelog; not a GitHub URL: {url}")]
    UnsupportedHost { url: String },
}

impl ChangelogError {
    /// Create a source mismatch error from both package source URLs
    pub fn source_mismatch(
        initial: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self::SourceMismatch {
            initial: initial.into(),
            target: target.into(),
        }
    }

    /// Create an unsupported host error
    pub fn unsupported_host(url: impl Into<String>) -> Self {
        Self::UnsupportedHost { url: url.into() }
    }
}

/// Main error type for operations surrounding the resolver: reading lock
/// files, loading configuration and writing output.
#[derive(Error, Debug)]
pub enum ChangelogsError {
    #[error("Invalid lock file {path}: {reason}")]
    InvalidLock { path: PathBuf, reason: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] log::SetLoggerError),
}

/// Result type alias using ChangelogsError
pub type Result<T> = std::result::Result<T, ChangelogsError>;

impl ChangelogsError {
    /// Create an invalid lock error for the file at `path`
    pub fn invalid_lock(
        path: impl Into<PathBuf>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidLock {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
