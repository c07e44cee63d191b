//! Linux host backed by sysfs and a shell status command.
//!
//! - Positioning hardware: any entry under the GNSS device class directory,
//!   or any configured device node that exists.
//! - Positioning service: the configured status command (exit 0 = enabled).
//!   A shell that cannot be spawned, or a command the shell cannot find or
//!   execute, means the service handle is unobtainable.
//! - Radio: the first `bluetooth` switch under the rfkill class directory
//!   (sorted by name) is the default adapter. It is enabled when neither its
//!   soft nor hard block is set.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::GateConfig;
use crate::shell::query_status;

use super::HostCapabilities;

/// Host capabilities read from the running Linux system.
#[derive(Debug, Clone)]
pub struct SystemHost {
    device_class: PathBuf,
    device_paths: Vec<PathBuf>,
    status_command: String,
    rfkill_class: PathBuf,
}

impl SystemHost {
    /// Build a host from the loaded configuration.
    pub fn from_config(config: &GateConfig) -> Self {
        Self {
            device_class: config.positioning.device_class.clone(),
            device_paths: config.positioning.device_paths.clone(),
            status_command: config.positioning.status_command.clone(),
            rfkill_class: config.radio.rfkill_class.clone(),
        }
    }
}

impl HostCapabilities for SystemHost {
    fn has_positioning_hardware(&self) -> bool {
        dir_has_entries(&self.device_class) || self.device_paths.iter().any(|p| p.exists())
    }

    fn positioning_service_enabled(&self) -> Option<bool> {
        query_status(&self.status_command).as_flag()
    }

    fn radio_adapter_enabled(&self) -> Option<bool> {
        let switch = default_bluetooth_switch(&self.rfkill_class)?;
        Some(switch_unblocked(&switch))
    }
}

/// Whether `dir` exists and contains at least one entry.
fn dir_has_entries(dir: &Path) -> bool {
    fs::read_dir(dir)
        .map(|mut entries| entries.next().is_some())
        .unwrap_or(false)
}

/// Find the first rfkill switch whose `type` is `bluetooth`.
fn default_bluetooth_switch(rfkill_class: &Path) -> Option<PathBuf> {
    let entries = fs::read_dir(rfkill_class).ok()?;
    let mut switches: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| read_trimmed(&p.join("type")).as_deref() == Some("bluetooth"))
        .collect();
    switches.sort();
    switches.into_iter().next()
}

/// A switch is unblocked when both `soft` and `hard` read `0`.
///
/// Unreadable block files count as blocked.
fn switch_unblocked(switch: &Path) -> bool {
    ["soft", "hard"]
        .iter()
        .all(|f| read_trimmed(&switch.join(f)).as_deref() == Some("0"))
}

fn read_trimmed(path: &Path) -> Option<String> {
    fs::read_to_string(path).ok().map(|s| s.trim().to_string())
}
