//! Mock host implementations for testing.
//!
//! `MockHost` and `MockLauncher` keep their state behind a shared handle, so
//! a test can hand one clone to the gate or driver and keep another to flip
//! host state and inspect what happened.
//!
//! # Example
//!
//! ```
//! use readygate::gate::{CapabilityProbe, ReadinessGate};
//! use readygate::host::MockHost;
//!
//! let host = MockHost::new();
//! host.set_positioning_hardware(false);
//! host.set_radio(Some(true));
//!
//! let mut gate = ReadinessGate::new(CapabilityProbe::new(host.clone()));
//! assert!(gate.evaluate());
//!
//! let before = host.query_count();
//! assert!(gate.is_ready());
//! assert_eq!(host.query_count(), before);
//! ```

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::error::{GateError, Result};

use super::{HostCapabilities, SettingsLauncher, SettingsSurface};

#[derive(Debug)]
struct HostState {
    positioning_hardware: bool,
    positioning: Option<bool>,
    radio: Option<bool>,
    queries: usize,
}

/// Scriptable host with interaction counting.
///
/// Defaults to a device with positioning hardware where both subsystems are
/// present but disabled.
#[derive(Debug, Clone)]
pub struct MockHost {
    state: Rc<RefCell<HostState>>,
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHost {
    /// Create a host with hardware present and both subsystems disabled.
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(HostState {
                positioning_hardware: true,
                positioning: Some(false),
                radio: Some(false),
                queries: 0,
            })),
        }
    }

    /// Set whether positioning hardware exists.
    pub fn set_positioning_hardware(&self, present: bool) {
        self.state.borrow_mut().positioning_hardware = present;
    }

    /// Set the positioning service flag (`None` = handle unobtainable).
    pub fn set_positioning(&self, enabled: Option<bool>) {
        self.state.borrow_mut().positioning = enabled;
    }

    /// Set the radio adapter flag (`None` = no adapter).
    pub fn set_radio(&self, enabled: Option<bool>) {
        self.state.borrow_mut().radio = enabled;
    }

    /// Number of host queries answered so far, across all clones.
    pub fn query_count(&self) -> usize {
        self.state.borrow().queries
    }

    fn record_query(&self) {
        self.state.borrow_mut().queries += 1;
    }
}

impl HostCapabilities for MockHost {
    fn has_positioning_hardware(&self) -> bool {
        self.record_query();
        self.state.borrow().positioning_hardware
    }

    fn positioning_service_enabled(&self) -> Option<bool> {
        self.record_query();
        self.state.borrow().positioning
    }

    fn radio_adapter_enabled(&self) -> Option<bool> {
        self.record_query();
        self.state.borrow().radio
    }
}

#[derive(Debug, Default)]
struct LauncherState {
    launched: Vec<SettingsSurface>,
    failing: HashSet<SettingsSurface>,
}

/// Launcher that records every request and can be told to fail.
///
/// Failed launches are still recorded as attempted.
#[derive(Debug, Clone, Default)]
pub struct MockLauncher {
    state: Rc<RefCell<LauncherState>>,
}

impl MockLauncher {
    /// Create a launcher that accepts every request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make launches of `surface` fail from now on.
    pub fn fail_on(&self, surface: SettingsSurface) {
        self.state.borrow_mut().failing.insert(surface);
    }

    /// Surfaces requested so far, in order.
    pub fn launched(&self) -> Vec<SettingsSurface> {
        self.state.borrow().launched.clone()
    }

    /// How many times `surface` was requested.
    pub fn count(&self, surface: SettingsSurface) -> usize {
        self.state
            .borrow()
            .launched
            .iter()
            .filter(|s| **s == surface)
            .count()
    }
}

impl SettingsLauncher for MockLauncher {
    fn launch(&mut self, surface: SettingsSurface) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.launched.push(surface);
        if state.failing.contains(&surface) {
            return Err(GateError::LaunchFailed {
                surface,
                message: "mock launch failure".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_host_has_hardware_and_everything_off() {
        let host = MockHost::new();
        assert!(host.has_positioning_hardware());
        assert_eq!(host.positioning_service_enabled(), Some(false));
        assert_eq!(host.radio_adapter_enabled(), Some(false));
    }

    #[test]
    fn clones_share_state() {
        let host = MockHost::new();
        let handle = host.clone();
        handle.set_radio(None);
        assert_eq!(host.radio_adapter_enabled(), None);
        assert_eq!(handle.query_count(), 1);
    }

    #[test]
    fn every_query_is_counted() {
        let host = MockHost::new();
        host.has_positioning_hardware();
        host.positioning_service_enabled();
        host.radio_adapter_enabled();
        assert_eq!(host.query_count(), 3);
    }

    #[test]
    fn setters_do_not_count_as_queries() {
        let host = MockHost::new();
        host.set_positioning_hardware(false);
        host.set_positioning(Some(true));
        assert_eq!(host.query_count(), 0);
    }

    #[test]
    fn launcher_records_in_order() {
        let mut launcher = MockLauncher::new();
        launcher.launch(SettingsSurface::RadioEnableRequest).unwrap();
        launcher
            .launch(SettingsSurface::PositioningSettings)
            .unwrap();
        assert_eq!(
            launcher.launched(),
            vec![
                SettingsSurface::RadioEnableRequest,
                SettingsSurface::PositioningSettings
            ]
        );
    }

    #[test]
    fn launcher_failure_is_recorded_and_returned() {
        let mut launcher = MockLauncher::new();
        launcher.fail_on(SettingsSurface::PositioningSettings);
        let result = launcher.launch(SettingsSurface::PositioningSettings);
        assert!(matches!(result, Err(GateError::LaunchFailed { .. })));
        assert_eq!(launcher.count(SettingsSurface::PositioningSettings), 1);
    }
}
