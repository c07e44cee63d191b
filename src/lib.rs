//! readygate - device readiness gating for positioning and radio.
//!
//! Before a feature that needs both a positioning fix and a short-range
//! radio link is started, readygate checks that the positioning service and
//! the radio adapter are present and enabled, caches the answer, and can ask
//! the host to open its settings screens for whatever is disabled.
//!
//! # Modules
//!
//! - [`gate`] - Capability probe, readiness cache, and remediation driver
//! - [`host`] - Host capability and settings-launch abstractions, with
//!   Linux and mock implementations
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`shell`] - Shell command execution
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use readygate::gate::{CapabilityProbe, ReadinessGate};
//! use readygate::host::MockHost;
//!
//! let host = MockHost::new();
//! host.set_positioning(Some(true));
//! host.set_radio(Some(true));
//!
//! let mut gate = ReadinessGate::new(CapabilityProbe::new(host));
//! assert!(!gate.is_ready());
//! assert!(gate.evaluate());
//! assert!(gate.is_ready());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod gate;
pub mod host;
pub mod shell;
pub mod ui;

pub use error::{GateError, Result};
