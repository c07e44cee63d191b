//! Subsystem state types.
//!
//! Each probe produces a `SubsystemState` that records whether a subsystem
//! counts as enabled and what that answer was based on.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::host::SettingsSurface;

/// The two subsystems the gate watches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Subsystem {
    /// Positioning (location) service.
    Positioning,
    /// Short-range wireless radio adapter.
    Radio,
}

impl Subsystem {
    /// The settings surface that lets the user enable this subsystem.
    pub fn remediation_surface(self) -> SettingsSurface {
        match self {
            Subsystem::Positioning => SettingsSurface::PositioningSettings,
            Subsystem::Radio => SettingsSurface::RadioEnableRequest,
        }
    }
}

impl fmt::Display for Subsystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subsystem::Positioning => write!(f, "positioning"),
            Subsystem::Radio => write!(f, "radio"),
        }
    }
}

/// What a subsystem's enabled flag was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Basis {
    /// The host reported a live flag.
    Live,
    /// The device has no positioning hardware, so positioning cannot block.
    NoHardware,
    /// The host handle could not be obtained; the handle policy decided.
    HandleUnavailable,
    /// No evaluation has run yet; the flag is the conservative default.
    NotEvaluated,
}

/// Readiness of one subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubsystemState {
    /// Which subsystem this is.
    pub kind: Subsystem,
    /// Whether it counts as enabled for readiness.
    pub enabled: bool,
    /// Where `enabled` came from.
    pub basis: Basis,
}

impl SubsystemState {
    /// State derived from a live host flag.
    pub fn live(kind: Subsystem, enabled: bool) -> Self {
        Self {
            kind,
            enabled,
            basis: Basis::Live,
        }
    }
}

/// Which subsystems keep the gate closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Blocker {
    /// Nothing; the gate is open.
    Nothing,
    /// Only positioning is disabled.
    Positioning,
    /// Only the radio is disabled.
    Radio,
    /// Both subsystems are disabled.
    Both,
}

impl Blocker {
    /// Classify a pair of enabled flags.
    pub fn from_flags(positioning_enabled: bool, radio_enabled: bool) -> Self {
        match (positioning_enabled, radio_enabled) {
            (true, true) => Blocker::Nothing,
            (false, true) => Blocker::Positioning,
            (true, false) => Blocker::Radio,
            (false, false) => Blocker::Both,
        }
    }

    /// The blocking subsystems, positioning first.
    pub fn subsystems(self) -> Vec<Subsystem> {
        match self {
            Blocker::Nothing => Vec::new(),
            Blocker::Positioning => vec![Subsystem::Positioning],
            Blocker::Radio => vec![Subsystem::Radio],
            Blocker::Both => vec![Subsystem::Positioning, Subsystem::Radio],
        }
    }
}

/// Snapshot of the gate's cached state.
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessReport {
    /// Cached conjunction of both flags.
    pub ready: bool,
    /// What keeps the gate closed, if anything.
    pub blocker: Blocker,
    /// When the cache was last refreshed; `None` before the first evaluation.
    pub evaluated_at: Option<DateTime<Utc>>,
    /// Cached positioning state.
    pub positioning: SubsystemState,
    /// Cached radio state.
    pub radio: SubsystemState,
}
