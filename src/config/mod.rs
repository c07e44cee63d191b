//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use readygate::config::{parse_config, validate};
//! use std::path::Path;
//!
//! let yaml = "remediation:\n  radio_command: blueman-manager\n";
//! let config = parse_config(yaml, Path::new("config.yml")).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.remediation.radio_command, "blueman-manager");
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{
    load_config, load_config_file, load_from_source, parse_config, resolve_source, ConfigSource,
    CONFIG_ENV_VAR,
};
pub use schema::{GateConfig, PositioningConfig, RadioConfig, RemediationConfig};
pub use validator::{validate, validate_config, ValidationError};
