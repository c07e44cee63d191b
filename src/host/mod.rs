//! Host boundary: the capability queries the gate depends on and the
//! settings surfaces it can ask the host to open.
//!
//! # Modules
//!
//! - [`system`] - Linux host backed by sysfs and shell status commands
//! - [`launcher`] - Settings launcher that spawns configured commands
//! - [`mock`] - Shared-state test doubles for both traits

pub mod launcher;
pub mod mock;
pub mod system;

pub use launcher::CommandLauncher;
pub use mock::{MockHost, MockLauncher};
pub use system::SystemHost;

use std::fmt;

use serde::Serialize;

use crate::error::Result;

/// The three host-provided predicates the readiness gate consumes.
///
/// Implementations report raw host facts. A `None` from either handle query
/// means the host could not hand out the service or adapter at all; the
/// probe decides what that means for readiness.
pub trait HostCapabilities {
    /// Whether the host's feature registry lists positioning hardware.
    ///
    /// A host that cannot answer should return `false`.
    fn has_positioning_hardware(&self) -> bool;

    /// Live enabled flag of the positioning service, or `None` when the
    /// service handle is unobtainable.
    fn positioning_service_enabled(&self) -> Option<bool>;

    /// Live enabled flag of the default radio adapter, or `None` when no
    /// adapter is present.
    fn radio_adapter_enabled(&self) -> Option<bool>;
}

/// Host settings screens the remediation driver can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingsSurface {
    /// The host's positioning/location source settings.
    PositioningSettings,
    /// The host's "turn on the radio" request.
    RadioEnableRequest,
}

impl fmt::Display for SettingsSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsSurface::PositioningSettings => write!(f, "positioning settings"),
            SettingsSurface::RadioEnableRequest => write!(f, "radio enable request"),
        }
    }
}

/// Fire-and-forget launcher for host settings surfaces.
///
/// `Ok(())` only means the host accepted the request; it says nothing about
/// whether the user goes on to enable the subsystem.
pub trait SettingsLauncher {
    /// Ask the host to display `surface`.
    fn launch(&mut self, surface: SettingsSurface) -> Result<()>;
}

impl<T: HostCapabilities + ?Sized> HostCapabilities for &T {
    fn has_positioning_hardware(&self) -> bool {
        (**self).has_positioning_hardware()
    }

    fn positioning_service_enabled(&self) -> Option<bool> {
        (**self).positioning_service_enabled()
    }

    fn radio_adapter_enabled(&self) -> Option<bool> {
        (**self).radio_adapter_enabled()
    }
}

impl<T: SettingsLauncher + ?Sized> SettingsLauncher for &mut T {
    fn launch(&mut self, surface: SettingsSurface) -> Result<()> {
        (**self).launch(surface)
    }
}
