//! Device readiness gating.
//!
//! Before a dependent feature runs, the gate confirms that the positioning
//! service and the short-range radio are both present and enabled, and can
//! ask the host to show its settings screens for whichever are not.
//!
//! Data flows one way: [`CapabilityProbe`] feeds [`ReadinessGate`], whose
//! cached state drives [`RemediationDriver`].
//!
//! # Modules
//!
//! - [`probe`] - Host queries with explicit fail-open/fail-closed policies
//! - [`readiness`] - Cached readiness state and evaluation
//! - [`remediation`] - Settings prompts for disabled subsystems
//! - [`status`] - Subsystem state and report types
//!
//! # Example
//!
//! ```
//! use readygate::gate::{CapabilityProbe, ReadinessGate, RemediationDriver};
//! use readygate::host::{MockHost, MockLauncher, SettingsSurface};
//!
//! let host = MockHost::new();
//! host.set_positioning(Some(true));
//! host.set_radio(Some(false));
//!
//! let mut gate = ReadinessGate::new(CapabilityProbe::new(host));
//! assert!(!gate.evaluate());
//!
//! let launcher = MockLauncher::new();
//! RemediationDriver::new(launcher.clone()).prompt_if_needed(&gate);
//! assert_eq!(launcher.launched(), vec![SettingsSurface::RadioEnableRequest]);
//! ```

pub mod probe;
pub mod readiness;
pub mod remediation;
pub mod status;

pub use probe::{CapabilityProbe, HandlePolicy, POSITIONING_HANDLE_POLICY, RADIO_HANDLE_POLICY};
pub use readiness::ReadinessGate;
pub use remediation::RemediationDriver;
pub use status::{Basis, Blocker, ReadinessReport, Subsystem, SubsystemState};
