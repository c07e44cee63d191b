//! Capability probe: turns raw host answers into readiness flags.
//!
//! The host may be unable to hand out a service or adapter at all. What that
//! means is a policy decision, made explicitly per subsystem:
//!
//! - Positioning is [`HandlePolicy::FailOpen`]. It only matters on hardware
//!   that has it, and an unanswerable query must not strand the user.
//! - Radio is [`HandlePolicy::FailClosed`]. Without an adapter the dependent
//!   feature cannot run.
//!
//! Devices without positioning hardware pass the positioning check outright.
//!
//! # Example
//!
//! ```
//! use readygate::gate::CapabilityProbe;
//! use readygate::host::MockHost;
//!
//! let host = MockHost::new();
//! host.set_positioning(None);
//! host.set_radio(None);
//!
//! let probe = CapabilityProbe::new(host);
//! assert!(probe.is_positioning_enabled());
//! assert!(!probe.is_radio_enabled());
//! ```

use crate::host::HostCapabilities;

use super::status::{Basis, Subsystem, SubsystemState};

/// How to read a host handle that could not be obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlePolicy {
    /// Treat it as enabled: it does not block readiness.
    FailOpen,
    /// Treat it as disabled: it blocks readiness.
    FailClosed,
}

impl HandlePolicy {
    /// Resolve a host answer, `None` meaning the handle was unobtainable.
    pub fn resolve(self, live: Option<bool>) -> bool {
        match live {
            Some(enabled) => enabled,
            None => self == HandlePolicy::FailOpen,
        }
    }
}

/// Policy for an unobtainable positioning service handle.
pub const POSITIONING_HANDLE_POLICY: HandlePolicy = HandlePolicy::FailOpen;

/// Policy for a missing radio adapter.
pub const RADIO_HANDLE_POLICY: HandlePolicy = HandlePolicy::FailClosed;

/// Pure capability queries against a host.
#[derive(Debug, Clone)]
pub struct CapabilityProbe<H> {
    host: H,
}

impl<H: HostCapabilities> CapabilityProbe<H> {
    /// Wrap a host.
    pub fn new(host: H) -> Self {
        Self { host }
    }

    /// The wrapped host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Whether positioning hardware exists at all.
    pub fn has_positioning_hardware(&self) -> bool {
        self.host.has_positioning_hardware()
    }

    /// Whether positioning counts as enabled.
    pub fn is_positioning_enabled(&self) -> bool {
        self.positioning_state().enabled
    }

    /// Whether the radio counts as enabled.
    pub fn is_radio_enabled(&self) -> bool {
        self.radio_state().enabled
    }

    /// Positioning state with the reason behind it.
    pub fn positioning_state(&self) -> SubsystemState {
        let kind = Subsystem::Positioning;

        if !self.host.has_positioning_hardware() {
            tracing::debug!("No positioning hardware; positioning cannot block readiness");
            return SubsystemState {
                kind,
                enabled: true,
                basis: Basis::NoHardware,
            };
        }

        match self.host.positioning_service_enabled() {
            Some(enabled) => {
                tracing::debug!("Positioning service enabled: {}", enabled);
                SubsystemState::live(kind, enabled)
            }
            None => {
                tracing::debug!(
                    "Positioning service handle unobtainable; applying {:?}",
                    POSITIONING_HANDLE_POLICY
                );
                SubsystemState {
                    kind,
                    enabled: POSITIONING_HANDLE_POLICY.resolve(None),
                    basis: Basis::HandleUnavailable,
                }
            }
        }
    }

    /// Radio state with the reason behind it.
    pub fn radio_state(&self) -> SubsystemState {
        let kind = Subsystem::Radio;

        match self.host.radio_adapter_enabled() {
            Some(enabled) => {
                tracing::debug!("Radio adapter enabled: {}", enabled);
                SubsystemState::live(kind, enabled)
            }
            None => {
                tracing::debug!(
                    "No radio adapter; applying {:?}",
                    RADIO_HANDLE_POLICY
                );
                SubsystemState {
                    kind,
                    enabled: RADIO_HANDLE_POLICY.resolve(None),
                    basis: Basis::HandleUnavailable,
                }
            }
        }
    }
}
