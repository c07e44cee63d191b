//! Terminal output for the command-line front end.
//!
//! Every line printed has a [`Tone`]. Implementations of [`UserInterface`]
//! only decide where a toned line goes; the convenience methods are shared.
//!
//! - [`TerminalUI`] styles lines for a TTY
//! - [`NonInteractiveUI`] prints plain lines for pipes and CI
//! - [`MockUI`] records lines for tests
//!
//! # Example
//!
//! ```
//! use readygate::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("Readiness");
//! ui.success("radio enabled");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, GateTheme, Tone};

/// Sink for the lines a command prints.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;

    /// Print one line of the given tone, subject to the output mode.
    fn emit(&mut self, tone: Tone, msg: &str);

    /// Print unstyled text.
    fn message(&mut self, msg: &str) {
        self.emit(Tone::Message, msg);
    }

    /// Print a passing line.
    fn success(&mut self, msg: &str) {
        self.emit(Tone::Success, msg);
    }

    /// Print a blocking line.
    fn warning(&mut self, msg: &str) {
        self.emit(Tone::Warning, msg);
    }

    /// Print an error. Shown in every output mode.
    fn error(&mut self, msg: &str) {
        self.emit(Tone::Error, msg);
    }

    /// Print a secondary hint line.
    fn hint(&mut self, msg: &str) {
        self.emit(Tone::Hint, msg);
    }

    /// Print a section title.
    fn show_header(&mut self, title: &str) {
        self.emit(Tone::Header, title);
    }
}
