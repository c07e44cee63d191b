//! Output verbosity.

/// How much a command prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Status lines, hints, and documents.
    #[default]
    Normal,
    /// Errors only (`--quiet`).
    Quiet,
}

impl OutputMode {
    /// Pick the mode from the `--quiet` flag.
    pub fn from_quiet(quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else {
            Self::Normal
        }
    }

    /// Whether non-error lines are printed.
    pub fn shows_status(self) -> bool {
        self == Self::Normal
    }
}
