//! `readygate check` command implementation.
//!
//! Evaluates the gate once against the live host, reports each subsystem,
//! and optionally opens host settings for whatever is disabled.

use crate::cli::args::CheckArgs;
use crate::config::GateConfig;
use crate::error::Result;
use crate::gate::{Basis, CapabilityProbe, ReadinessGate, RemediationDriver, SubsystemState};
use crate::host::{CommandLauncher, HostCapabilities, SettingsLauncher, SystemHost};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Exit code when the gate is closed.
const NOT_READY_EXIT_CODE: i32 = 1;

/// The check command implementation.
pub struct CheckCommand {
    config: GateConfig,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(config: GateConfig, args: CheckArgs) -> Self {
        Self { config, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    /// Run the check against an arbitrary host and launcher.
    pub fn run_with<H, L>(
        &self,
        host: H,
        launcher: L,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult>
    where
        H: HostCapabilities,
        L: SettingsLauncher,
    {
        let mut gate = ReadinessGate::new(CapabilityProbe::new(host));
        let ready = gate.evaluate();

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&gate.report()).map_err(anyhow::Error::from)?;
            ui.message(&json);
        } else {
            ui.show_header("Readiness");
            show_state(ui, gate.positioning());
            show_state(ui, gate.radio());
        }

        if ready {
            if !self.args.json {
                ui.success("Ready");
            }
            return Ok(CommandResult::success());
        }

        if !self.args.json {
            let blocked: Vec<String> = gate.disabled().iter().map(|s| s.to_string()).collect();
            ui.warning(&format!("Not ready: {} disabled", blocked.join(" and ")));
        }

        if self.args.prompt {
            RemediationDriver::new(launcher).prompt_if_needed(&gate);
        }

        if !self.args.json {
            if self.args.prompt {
                ui.hint("Enable the requested settings, then run `readygate check` again");
            } else {
                ui.hint("Run `readygate check --prompt` to open the host settings");
            }
        }
        Ok(CommandResult::failure(NOT_READY_EXIT_CODE))
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let host = SystemHost::from_config(&self.config);
        let launcher = CommandLauncher::from_config(&self.config.remediation);
        self.run_with(host, launcher, ui)
    }
}

fn show_state(ui: &mut dyn UserInterface, state: &SubsystemState) {
    if state.enabled {
        ui.success(&format!("{} enabled", state.kind));
    } else {
        ui.warning(&format!("{} disabled", state.kind));
    }

    match state.basis {
        Basis::NoHardware => ui.hint("no positioning hardware; not required"),
        Basis::HandleUnavailable if state.enabled => {
            ui.hint(&format!("{} status unavailable; assumed enabled", state.kind))
        }
        Basis::HandleUnavailable => ui.hint(&format!("no {} adapter found", state.kind)),
        Basis::Live | Basis::NotEvaluated => {}
    }
}
