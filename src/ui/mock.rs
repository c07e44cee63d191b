//! Recording UI for tests.
//!
//! # Example
//!
//! ```
//! use readygate::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("radio enabled");
//! ui.warning("positioning disabled");
//!
//! assert!(ui.has_success("radio"));
//! assert!(ui.has_warning("positioning"));
//! ```

use super::{OutputMode, Tone, UserInterface};

/// Records every emitted line with its tone, regardless of output mode.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    lines: Vec<(Tone, String)>,
}

impl MockUI {
    /// Create a recorder in Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every recorded line, in order.
    pub fn lines(&self) -> &[(Tone, String)] {
        &self.lines
    }

    /// Recorded lines of one tone, in order.
    pub fn lines_of(&self, tone: Tone) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|(t, _)| *t == tone)
            .map(|(_, line)| line.as_str())
            .collect()
    }

    /// Whether a line of `tone` containing `needle` was recorded.
    pub fn has(&self, tone: Tone, needle: &str) -> bool {
        self.lines
            .iter()
            .any(|(t, line)| *t == tone && line.contains(needle))
    }

    pub fn messages(&self) -> Vec<&str> {
        self.lines_of(Tone::Message)
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.lines_of(Tone::Warning)
    }

    pub fn has_message(&self, needle: &str) -> bool {
        self.has(Tone::Message, needle)
    }

    pub fn has_success(&self, needle: &str) -> bool {
        self.has(Tone::Success, needle)
    }

    pub fn has_warning(&self, needle: &str) -> bool {
        self.has(Tone::Warning, needle)
    }

    pub fn has_error(&self, needle: &str) -> bool {
        self.has(Tone::Error, needle)
    }

    pub fn has_hint(&self, needle: &str) -> bool {
        self.has(Tone::Hint, needle)
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn is_interactive(&self) -> bool {
        false
    }

    fn emit(&mut self, tone: Tone, msg: &str) {
        self.lines.push((tone, msg.to_string()));
    }
}
