//! Error types.

use std::path::PathBuf;

use crate::mode::ThemeMode;

/// Error returned when a string is not a recognized mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized theme mode '{value}'")]
pub struct ParseModeError {
    value: String,
}

impl ParseModeError {
    pub(crate) fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// The rejected input.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Failures reading or writing the persisted preference.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access preference file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("preference file {path} is not a valid key-value object: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("no data directory available for this user")]
    NoDataDir,
}

/// Failures loading a [`ControllerConfig`](crate::ControllerConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("config field '{field}' must not be empty")]
    Empty { field: &'static str },
}

/// Errors surfaced by the theme controller.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The icon element could not be located in the presentation target.
    #[error("icon element '{selector}' not found")]
    IconNotFound { selector: String },
    /// The mode is not part of the configured cycle.
    #[error("mode '{0}' is not supported by the binary cycle")]
    UnsupportedMode(ThemeMode),
    #[error("failed to render markup: {0}")]
    Markup(#[from] minijinja::Error),
}
