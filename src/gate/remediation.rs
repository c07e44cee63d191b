//! Remediation of disabled subsystems.
//!
//! The driver reads the gate's cached flags and asks the host to open one
//! settings surface per disabled subsystem. Requests are independent: a
//! failed launch for one subsystem does not stop the other. Nothing is
//! reported back to the caller, because the host screens are fire-and-forget;
//! re-run [`ReadinessGate::evaluate`] later to see whether the user acted.

use crate::host::{HostCapabilities, SettingsLauncher};

use super::readiness::ReadinessGate;

/// Triggers host settings screens for whatever the gate has cached as disabled.
#[derive(Debug)]
pub struct RemediationDriver<L> {
    launcher: L,
}

impl<L: SettingsLauncher> RemediationDriver<L> {
    /// Create a driver around a launcher.
    pub fn new(launcher: L) -> Self {
        Self { launcher }
    }

    /// Prompt for every subsystem the gate has cached as not enabled.
    ///
    /// Does not re-evaluate. Before any evaluation the cache holds the
    /// conservative defaults, so prompts fire for everything not known to pass.
    pub fn prompt_if_needed<H: HostCapabilities>(&mut self, gate: &ReadinessGate<H>) {
        let disabled = gate.disabled();
        if disabled.is_empty() {
            tracing::debug!("All subsystems already enabled; nothing to prompt");
            return;
        }

        tracing::info!("Some subsystems are disabled; prompting user");
        for subsystem in disabled {
            let surface = subsystem.remediation_surface();
            tracing::info!("Requesting {} to enable {}", surface, subsystem);
            if let Err(e) = self.launcher.launch(surface) {
                tracing::warn!("{}", e);
            }
        }
    }

    /// The wrapped launcher.
    pub fn launcher(&self) -> &L {
        &self.launcher
    }
}
