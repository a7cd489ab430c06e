//! Status command implementation.
//!
//! Execution state is not persisted across process restarts, so there is
//! nothing to report yet. The subcommand exists so scripts written against
//! the full surface keep working.

use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The status command implementation.
#[derive(Default)]
pub struct StatusCommand;

impl StatusCommand {
    /// Create a new status command.
    pub fn new() -> Self {
        Self
    }
}

impl Command for StatusCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.warning("Status tracking is not implemented yet");
        Ok(CommandResult::success())
    }
}
