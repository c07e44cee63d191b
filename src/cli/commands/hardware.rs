//! `readygate hardware` command implementation.

use crate::config::GateConfig;
use crate::error::Result;
use crate::gate::CapabilityProbe;
use crate::host::{HostCapabilities, SystemHost};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Reports whether the device has positioning hardware.
///
/// Informational only; always exits 0.
pub struct HardwareCommand {
    config: GateConfig,
}

impl HardwareCommand {
    /// Create a new hardware command.
    pub fn new(config: GateConfig) -> Self {
        Self { config }
    }

    /// Run against an arbitrary host.
    pub fn run_with<H: HostCapabilities>(
        &self,
        host: H,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let probe = CapabilityProbe::new(host);
        if probe.has_positioning_hardware() {
            ui.success("Positioning hardware present");
        } else {
            ui.message("No positioning hardware");
            ui.hint("positioning is not required on this device");
        }
        Ok(CommandResult::success())
    }
}

impl Command for HardwareCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.run_with(SystemHost::from_config(&self.config), ui)
    }
}
