//! Config command implementation.
//!
//! The `readygate config` command prints the effective configuration as
//! YAML, preceded by where it came from.

use crate::config::{ConfigSource, GateConfig};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    config: GateConfig,
    source: ConfigSource,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(config: GateConfig, source: ConfigSource) -> Self {
        Self { config, source }
    }

    /// Get the config source.
    pub fn source(&self) -> &ConfigSource {
        &self.source
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let origin = match self.source.path() {
            Some(path) => format!("# Source: {}", path.display()),
            None => "# Source: built-in defaults".to_string(),
        };
        let yaml = serde_yaml::to_string(&self.config).map_err(anyhow::Error::from)?;

        ui.message(&origin);
        ui.message(yaml.trim_end());
        Ok(CommandResult::success())
    }
}
