//! Configuration schema definitions.
//!
//! These structs map to the YAML configuration file. Every key is optional;
//! missing keys take the defaults of a typical Linux desktop.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for `config.yml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// How the positioning subsystem is detected.
    pub positioning: PositioningConfig,

    /// How the radio adapter is detected.
    pub radio: RadioConfig,

    /// Commands that open host settings surfaces.
    pub remediation: RemediationConfig,
}

/// Positioning detection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositioningConfig {
    /// Device class directory; any entry in it counts as positioning hardware.
    pub device_class: PathBuf,

    /// Extra device nodes that count as positioning hardware when present.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub device_paths: Vec<PathBuf>,

    /// Command that exits 0 when the positioning service is enabled.
    pub status_command: String,
}

impl Default for PositioningConfig {
    fn default() -> Self {
        Self {
            device_class: PathBuf::from("/sys/class/gnss"),
            device_paths: Vec::new(),
            status_command: "gsettings get org.gnome.system.location enabled | grep -q true"
                .to_string(),
        }
    }
}

/// Radio detection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadioConfig {
    /// rfkill class directory scanned for `bluetooth` switches.
    pub rfkill_class: PathBuf,
}

impl Default for RadioConfig {
    fn default() -> Self {
        Self {
            rfkill_class: PathBuf::from("/sys/class/rfkill"),
        }
    }
}

/// Settings surface launch commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemediationConfig {
    /// Opens the host's location settings.
    pub positioning_command: String,

    /// Opens the host's radio enable screen.
    pub radio_command: String,
}

impl Default for RemediationConfig {
    fn default() -> Self {
        Self {
            positioning_command: "gnome-control-center location".to_string(),
            radio_command: "gnome-control-center bluetooth".to_string(),
        }
    }
}
