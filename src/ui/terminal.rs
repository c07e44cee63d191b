//! Styled output for an attached terminal.

use console::Term;

use super::{GateTheme, NonInteractiveUI, OutputMode, Tone, UserInterface};

/// Writes themed lines to the terminal; errors go to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: GateTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a terminal UI, colored unless `NO_COLOR` is set.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme: GateTheme::detect(),
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn is_interactive(&self) -> bool {
        self.out.is_term()
    }

    fn emit(&mut self, tone: Tone, msg: &str) {
        if !tone.visible_in(self.mode) {
            return;
        }
        let target = if tone == Tone::Error { &self.err } else { &self.out };
        if tone == Tone::Header {
            target.write_line("").ok();
        }
        target.write_line(&self.theme.paint(tone, msg)).ok();
    }
}

/// Pick the UI for the current environment.
///
/// A styled terminal UI is only used when `interactive` is set and stdout
/// is a TTY.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
