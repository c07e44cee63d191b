//! Shell command execution for host status queries and settings launches.

pub mod command;
pub mod platform;

pub use command::{query_status, spawn_detached, StatusOutcome};
pub use platform::{is_ci, shell_invocation};
