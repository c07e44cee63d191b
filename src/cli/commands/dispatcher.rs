//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{CheckArgs, Cli, Commands};
use crate::config::{load_config, ConfigSource, GateConfig};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, reporting through `ui`.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    working_dir: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher rooted at `working_dir`.
    pub fn new(working_dir: PathBuf) -> Self {
        Self { working_dir }
    }

    /// Get the working directory used for config discovery.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Completions(args)) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
            Some(Commands::Check(args)) => {
                let (config, _) = self.load(cli)?;
                super::check::CheckCommand::new(config, args.clone()).execute(ui)
            }
            Some(Commands::Hardware) => {
                let (config, _) = self.load(cli)?;
                super::hardware::HardwareCommand::new(config).execute(ui)
            }
            Some(Commands::Config) => {
                let (config, source) = self.load(cli)?;
                super::config::ConfigCommand::new(config, source).execute(ui)
            }
            None => {
                let (config, _) = self.load(cli)?;
                super::check::CheckCommand::new(config, CheckArgs::default()).execute(ui)
            }
        }
    }

    fn load(&self, cli: &Cli) -> Result<(GateConfig, ConfigSource)> {
        load_config(cli.config.as_deref(), &self.working_dir)
    }
}
