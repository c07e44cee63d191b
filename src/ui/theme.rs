//! Line tones and how they are styled.

use console::Style;

use super::OutputMode;

/// What kind of line is being printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Unstyled text, such as JSON or YAML documents.
    Message,
    /// A subsystem or check that passed.
    Success,
    /// A subsystem or check that blocks readiness.
    Warning,
    /// A failure that stopped the command. Printed to stderr in every mode.
    Error,
    /// Secondary detail under the previous line.
    Hint,
    /// Section title.
    Header,
}

impl Tone {
    /// Whether a line of this tone is printed in `mode`.
    pub fn visible_in(self, mode: OutputMode) -> bool {
        self == Tone::Error || mode.shows_status()
    }
}

/// Styles applied per tone.
#[derive(Debug, Clone)]
pub struct GateTheme {
    success: Style,
    warning: Style,
    error: Style,
    dim: Style,
    header: Style,
}

impl Default for GateTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl GateTheme {
    /// Colored theme: green passes, orange blockers, red errors.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            header: Style::new().cyan().bold(),
        }
    }

    /// Theme that only adds the line markers.
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            header: Style::new(),
        }
    }

    /// Colored when stdout is a terminal and `NO_COLOR` is unset.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Render `msg` as a line of the given tone.
    pub fn paint(&self, tone: Tone, msg: &str) -> String {
        match tone {
            Tone::Message => msg.to_string(),
            Tone::Success => self.success.apply_to(format!("✓ {}", msg)).to_string(),
            Tone::Warning => self.warning.apply_to(format!("⚠ {}", msg)).to_string(),
            Tone::Error => self.error.apply_to(format!("✗ {}", msg)).to_string(),
            Tone::Hint => format!("  {}", self.dim.apply_to(msg)),
            Tone::Header => self.header.apply_to(format!("◉ {}", msg)).to_string(),
        }
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
