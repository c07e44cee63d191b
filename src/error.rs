//! Error types for readygate operations.
//!
//! This module defines [`GateError`], the error type used by configuration
//! loading, settings launchers, and the CLI, plus a [`Result`] alias.
//!
//! # Error Handling Strategy
//!
//! - The readiness core itself never fails: unobtainable host handles are
//!   resolved by policy and unlaunchable settings screens are logged.
//! - Use `GateError` for failures at the edges (config files, process spawns)
//! - Use `anyhow::Error` (via `GateError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

use crate::host::SettingsSurface;

/// Core error type for readygate operations.
#[derive(Debug, Error)]
pub enum GateError {
    /// Configuration file not found at an explicitly requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// The host could not launch a settings surface.
    #[error("Could not open {surface}: {message}")]
    LaunchFailed {
        surface: SettingsSurface,
        message: String,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for readygate operations.
pub type Result<T> = std::result::Result<T, GateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = GateError::ConfigNotFound {
            path: PathBuf::from("/etc/readygate.yml"),
        };
        assert!(err.to_string().contains("/etc/readygate.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = GateError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn config_validation_error_displays_message() {
        let err = GateError::ConfigValidationError {
            message: "radio_command must not be empty".into(),
        };
        assert!(err.to_string().contains("radio_command"));
    }

    #[test]
    fn launch_failed_names_the_surface() {
        let err = GateError::LaunchFailed {
            surface: SettingsSurface::RadioEnableRequest,
            message: "no such file".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("radio enable request"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: GateError = io_err.into();
        assert!(matches!(err, GateError::Io(_)));
    }

    #[test]
    fn anyhow_error_is_transparent() {
        let err: GateError = anyhow::anyhow!("something odd").into();
        assert_eq!(err.to_string(), "something odd");
    }
}
