//! Plain output for pipes and CI.

use super::{GateTheme, OutputMode, Tone, UserInterface};

/// Prints uncolored lines with std streams; errors go to stderr.
pub struct NonInteractiveUI {
    mode: OutputMode,
    theme: GateTheme,
}

impl NonInteractiveUI {
    /// Create a non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: GateTheme::plain(),
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn is_interactive(&self) -> bool {
        false
    }

    fn emit(&mut self, tone: Tone, msg: &str) {
        if !tone.visible_in(self.mode) {
            return;
        }
        let line = self.theme.paint(tone, msg);
        if tone == Tone::Error {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}
