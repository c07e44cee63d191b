//! Configuration file discovery and loading.
//!
//! Only one file is ever read. It is chosen in this order:
//! 1. An explicit path (the `--config` flag)
//! 2. The `READYGATE_CONFIG` environment variable
//! 3. `.readygate/config.yml` under the working directory
//!
//! When none of these applies the built-in defaults are used.

use crate::config::schema::GateConfig;
use crate::error::{GateError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "READYGATE_CONFIG";

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Named on the command line.
    Explicit(PathBuf),
    /// Named by `READYGATE_CONFIG`.
    Environment(PathBuf),
    /// Found at `.readygate/config.yml`.
    Discovered(PathBuf),
    /// No file; built-in defaults.
    Defaults,
}

impl ConfigSource {
    /// Path of the backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Explicit(p)
            | ConfigSource::Environment(p)
            | ConfigSource::Discovered(p) => Some(p),
            ConfigSource::Defaults => None,
        }
    }
}

/// Pick the config source for `working_dir`.
///
/// `env_fn` stands in for `std::env::var` so tests can avoid touching the
/// process environment.
pub fn resolve_source<F>(explicit: Option<&Path>, working_dir: &Path, env_fn: F) -> ConfigSource
where
    F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
{
    if let Some(path) = explicit {
        return ConfigSource::Explicit(path.to_path_buf());
    }

    if let Ok(val) = env_fn(CONFIG_ENV_VAR) {
        if !val.is_empty() {
            return ConfigSource::Environment(PathBuf::from(val));
        }
    }

    let discovered = working_dir.join(".readygate").join("config.yml");
    if discovered.is_file() {
        ConfigSource::Discovered(discovered)
    } else {
        ConfigSource::Defaults
    }
}

/// Load a single config file and parse it into a [`GateConfig`].
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<GateConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            GateError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            GateError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a [`GateConfig`].
///
/// An empty document is treated as "all defaults".
pub fn parse_config(content: &str, source_path: &Path) -> Result<GateConfig> {
    if content.trim().is_empty() {
        return Ok(GateConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| GateError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the configuration named by `source`, falling back to defaults.
pub fn load_from_source(source: &ConfigSource) -> Result<GateConfig> {
    match source.path() {
        Some(path) => load_config_file(path),
        None => Ok(GateConfig::default()),
    }
}

/// Resolve, load, and validate the configuration in one step.
pub fn load_config(
    explicit: Option<&Path>,
    working_dir: &Path,
) -> Result<(GateConfig, ConfigSource)> {
    let source = resolve_source(explicit, working_dir, |key| std::env::var(key));
    tracing::debug!("Using configuration source {:?}", source);
    let config = load_from_source(&source)?;
    crate::config::validator::validate(&config)?;
    Ok((config, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn no_env(_: &str) -> std::result::Result<String, std::env::VarError> {
        Err(std::env::VarError::NotPresent)
    }

    #[test]
    fn explicit_path_wins() {
        let temp = TempDir::new().unwrap();
        let explicit = temp.path().join("custom.yml");
        let source = resolve_source(Some(&explicit), temp.path(), |_| {
            Ok("/from/env.yml".to_string())
        });
        assert_eq!(source, ConfigSource::Explicit(explicit));
    }

    #[test]
    fn env_var_beats_discovery() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(".readygate")).unwrap();
        fs::write(temp.path().join(".readygate/config.yml"), "{}").unwrap();

        let source = resolve_source(None, temp.path(), |key| {
            if key == CONFIG_ENV_VAR {
                Ok("/from/env.yml".to_string())
            } else {
                Err(std::env::VarError::NotPresent)
            }
        });
        assert_eq!(
            source,
            ConfigSource::Environment(PathBuf::from("/from/env.yml"))
        );
    }

    #[test]
    fn empty_env_var_is_ignored() {
        let temp = TempDir::new().unwrap();
        let source = resolve_source(None, temp.path(), |_| Ok(String::new()));
        assert_eq!(source, ConfigSource::Defaults);
    }

    #[test]
    fn discovers_project_config() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(".readygate")).unwrap();
        fs::write(temp.path().join(".readygate/config.yml"), "{}").unwrap();

        let source = resolve_source(None, temp.path(), no_env);
        assert_eq!(
            source,
            ConfigSource::Discovered(temp.path().join(".readygate/config.yml"))
        );
    }

    #[test]
    fn falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        let source = resolve_source(None, temp.path(), no_env);
        assert_eq!(source, ConfigSource::Defaults);
        assert!(source.path().is_none());
        assert_eq!(load_from_source(&source).unwrap(), GateConfig::default());
    }

    #[test]
    fn missing_explicit_file_is_config_not_found() {
        let temp = TempDir::new().unwrap();
        let result = load_config_file(&temp.path().join("nope.yml"));
        assert!(matches!(result, Err(GateError::ConfigNotFound { .. })));
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let result = parse_config("radio: [unclosed", Path::new("bad.yml"));
        match result {
            Err(GateError::ConfigParseError { path, .. }) => {
                assert_eq!(path, PathBuf::from("bad.yml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn empty_file_is_defaults() {
        let config = parse_config("\n  \n", Path::new("empty.yml")).unwrap();
        assert_eq!(config, GateConfig::default());
    }

    #[test]
    fn loads_file_contents() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(
            &path,
            "remediation:\n  radio_command: \"blueman-manager\"\n",
        )
        .unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.remediation.radio_command, "blueman-manager");
    }

    #[test]
    fn load_config_rejects_invalid_values() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(&path, "remediation:\n  radio_command: \"\"\n").unwrap();

        let result = load_config(Some(&path), temp.path());
        assert!(matches!(
            result,
            Err(GateError::ConfigValidationError { .. })
        ));
    }
}
