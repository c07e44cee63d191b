//! Shell command execution.

use std::process::{Command, Stdio};

use crate::error::Result;

use super::platform::shell_invocation;

/// Exit codes a POSIX shell uses when the command itself could not run.
const NOT_EXECUTABLE: i32 = 126;
const NOT_FOUND: i32 = 127;

/// Outcome of running a status query command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusOutcome {
    /// Command ran and exited 0.
    Succeeded,
    /// Command ran and exited non-zero (or was killed).
    Failed,
    /// The shell could not be spawned, or reported the command as
    /// missing or not executable.
    Unavailable,
}

impl StatusOutcome {
    /// Map the outcome to a flag, `None` when the query could not run.
    pub fn as_flag(self) -> Option<bool> {
        match self {
            StatusOutcome::Succeeded => Some(true),
            StatusOutcome::Failed => Some(false),
            StatusOutcome::Unavailable => None,
        }
    }
}

/// Run `command` to completion with all output discarded.
pub fn query_status(command: &str) -> StatusOutcome {
    let (shell, flag) = shell_invocation();
    let status = Command::new(&shell)
        .arg(flag)
        .arg(command)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match status {
        Ok(s) if s.success() => StatusOutcome::Succeeded,
        Ok(s) if matches!(s.code(), Some(NOT_EXECUTABLE | NOT_FOUND)) => {
            StatusOutcome::Unavailable
        }
        Ok(_) => StatusOutcome::Failed,
        Err(e) => {
            tracing::debug!("Could not spawn shell for '{}': {}", command, e);
            StatusOutcome::Unavailable
        }
    }
}

/// Start `command` without waiting for it, returning the child's pid.
///
/// Only a failure to spawn the shell is reported; whatever the command
/// does afterwards is not observed. A background thread reaps the child
/// so no zombie is left behind once it exits.
pub fn spawn_detached(command: &str) -> Result<u32> {
    let (shell, flag) = shell_invocation();
    let mut child = Command::new(&shell)
        .arg(flag)
        .arg(command)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    let pid = child.id();

    std::thread::spawn(move || {
        if let Err(e) = child.wait() {
            tracing::debug!("Could not reap settings command (pid {}): {}", pid, e);
        }
    });
    Ok(pid)
}
