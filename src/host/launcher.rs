//! Settings launcher that spawns the configured shell commands.

use crate::config::RemediationConfig;
use crate::error::{GateError, Result};
use crate::shell::spawn_detached;

use super::{SettingsLauncher, SettingsSurface};

/// Opens settings surfaces by spawning one command per surface.
#[derive(Debug, Clone)]
pub struct CommandLauncher {
    positioning_command: String,
    radio_command: String,
}

impl CommandLauncher {
    /// Build a launcher from the remediation section of the config.
    pub fn from_config(config: &RemediationConfig) -> Self {
        Self {
            positioning_command: config.positioning_command.clone(),
            radio_command: config.radio_command.clone(),
        }
    }

    /// The command that opens `surface`.
    pub fn command_for(&self, surface: SettingsSurface) -> &str {
        match surface {
            SettingsSurface::PositioningSettings => &self.positioning_command,
            SettingsSurface::RadioEnableRequest => &self.radio_command,
        }
    }
}

impl SettingsLauncher for CommandLauncher {
    fn launch(&mut self, surface: SettingsSurface) -> Result<()> {
        let command = self.command_for(surface);
        tracing::debug!("Launching {} via '{}'", surface, command);
        let pid = spawn_detached(command).map_err(|e| GateError::LaunchFailed {
            surface,
            message: e.to_string(),
        })?;
        tracing::debug!("Started {} as pid {}", surface, pid);
        Ok(())
    }
}
