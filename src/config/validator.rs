//! Configuration validation rules.
//!
//! - Status and launch commands must not be blank
//! - Class directories must be non-empty paths

use crate::config::schema::GateConfig;
use crate::error::{GateError, Result};

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Dotted key the error refers to
    pub key: String,
    /// Human-readable error message
    pub message: String,
}

/// Validate a configuration and return all errors.
///
/// Collects every problem instead of stopping at the first one.
pub fn validate_config(config: &GateConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let commands = [
        ("positioning.status_command", &config.positioning.status_command),
        (
            "remediation.positioning_command",
            &config.remediation.positioning_command,
        ),
        ("remediation.radio_command", &config.remediation.radio_command),
    ];
    for (key, command) in commands {
        if command.trim().is_empty() {
            errors.push(ValidationError {
                rule: "empty-command".to_string(),
                key: key.to_string(),
                message: format!("'{}' must not be empty", key),
            });
        }
    }

    let dirs = [
        ("positioning.device_class", &config.positioning.device_class),
        ("radio.rfkill_class", &config.radio.rfkill_class),
    ];
    for (key, dir) in dirs {
        if dir.as_os_str().is_empty() {
            errors.push(ValidationError {
                rule: "empty-path".to_string(),
                key: key.to_string(),
                message: format!("'{}' must not be empty", key),
            });
        }
    }

    errors
}

/// Validate a configuration, folding all errors into one.
pub fn validate(config: &GateConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(GateError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
