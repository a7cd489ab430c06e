//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command against the given UI.
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
    catalog_path: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given catalog path.
    pub fn new(catalog_path: PathBuf) -> Self {
        Self { catalog_path }
    }

    /// Get the catalog path.
    pub fn catalog_path(&self) -> &Path {
        &self.catalog_path
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::List(args) => {
                let cmd = super::list::ListCommand::new(&self.catalog_path, args.clone());
                cmd.execute(ui)
            }
            Commands::Plan(args) => {
                let cmd = super::plan::PlanCommand::new(&self.catalog_path, args.clone());
                cmd.execute(ui)
            }
            Commands::Execute(args) => {
                let cmd = super::execute::ExecuteCommand::new(&self.catalog_path, args.clone());
                cmd.execute(ui)
            }
            Commands::Status => {
                let cmd = super::status::StatusCommand::new();
                cmd.execute(ui)
            }
        }
    }
}
