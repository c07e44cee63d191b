//! Readiness gate with cached last-known subsystem state.
//!
//! The `ReadinessGate` owns a [`CapabilityProbe`] and caches the most recent
//! answer for each subsystem. [`evaluate`](ReadinessGate::evaluate) probes
//! the host and overwrites the cache; [`is_ready`](ReadinessGate::is_ready)
//! reads the cache without touching the host. Cached reads may be stale
//! relative to the host; callers that need freshness evaluate again.
//!
//! A device without positioning hardware is never held back by positioning:
//! the cached positioning flag is forced on from construction onward.

use chrono::{DateTime, Utc};

use crate::host::HostCapabilities;

use super::probe::CapabilityProbe;
use super::status::{Basis, Blocker, ReadinessReport, Subsystem, SubsystemState};

/// Cached readiness of the positioning and radio subsystems.
///
/// Construct one per orchestrating context and keep it for as long as that
/// context needs readiness answers.
#[derive(Debug, Clone)]
pub struct ReadinessGate<H> {
    probe: CapabilityProbe<H>,
    positioning: SubsystemState,
    radio: SubsystemState,
    last_evaluated: Option<DateTime<Utc>>,
}

impl<H: HostCapabilities> ReadinessGate<H> {
    /// Create a gate in its conservative, not-yet-evaluated state.
    ///
    /// Asks the host once whether positioning hardware exists so that a
    /// hardware-less device starts with positioning already passing.
    pub fn new(probe: CapabilityProbe<H>) -> Self {
        let positioning = if probe.has_positioning_hardware() {
            SubsystemState {
                kind: Subsystem::Positioning,
                enabled: false,
                basis: Basis::NotEvaluated,
            }
        } else {
            SubsystemState {
                kind: Subsystem::Positioning,
                enabled: true,
                basis: Basis::NoHardware,
            }
        };

        Self {
            probe,
            positioning,
            radio: SubsystemState {
                kind: Subsystem::Radio,
                enabled: false,
                basis: Basis::NotEvaluated,
            },
            last_evaluated: None,
        }
    }

    /// Probe both subsystems, overwrite the cache, and return readiness.
    pub fn evaluate(&mut self) -> bool {
        self.positioning = self.probe.positioning_state();
        self.radio = self.probe.radio_state();
        self.last_evaluated = Some(Utc::now());

        let ready = self.is_ready();
        tracing::debug!(
            "Readiness evaluated: ready={} positioning={} radio={}",
            ready,
            self.positioning.enabled,
            self.radio.enabled
        );
        ready
    }

    /// Cached readiness; never touches the host.
    pub fn is_ready(&self) -> bool {
        self.positioning.enabled && self.radio.enabled
    }

    /// Live readiness that leaves the cache untouched.
    pub fn check(&self) -> bool {
        self.probe.is_positioning_enabled() && self.probe.is_radio_enabled()
    }

    /// Whether positioning hardware exists, asked live.
    pub fn has_positioning_hardware(&self) -> bool {
        self.probe.has_positioning_hardware()
    }

    /// Cached positioning state.
    pub fn positioning(&self) -> &SubsystemState {
        &self.positioning
    }

    /// Cached radio state.
    pub fn radio(&self) -> &SubsystemState {
        &self.radio
    }

    /// What keeps the gate closed, from cache.
    pub fn blocker(&self) -> Blocker {
        Blocker::from_flags(self.positioning.enabled, self.radio.enabled)
    }

    /// Cached subsystems that are not enabled, positioning first.
    pub fn disabled(&self) -> Vec<Subsystem> {
        self.blocker().subsystems()
    }

    /// When the cache was last refreshed.
    pub fn last_evaluated(&self) -> Option<DateTime<Utc>> {
        self.last_evaluated
    }

    /// Whether `evaluate` has run at least once.
    pub fn is_evaluated(&self) -> bool {
        self.last_evaluated.is_some()
    }

    /// Snapshot of the cached state.
    pub fn report(&self) -> ReadinessReport {
        ReadinessReport {
            ready: self.is_ready(),
            blocker: self.blocker(),
            evaluated_at: self.last_evaluated,
            positioning: self.positioning,
            radio: self.radio,
        }
    }

    /// The probe this gate evaluates with.
    pub fn probe(&self) -> &CapabilityProbe<H> {
        &self.probe
    }
}
