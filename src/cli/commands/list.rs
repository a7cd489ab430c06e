//! List command implementation.
//!
//! The `convoy list` command enumerates the workflow catalog.

use std::path::{Path, PathBuf};

use crate::catalog::load_catalog;
use crate::cli::args::ListArgs;
use crate::error::{ConvoyError, Result};
use crate::report::catalog_table;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    catalog_path: PathBuf,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(catalog_path: &Path, args: ListArgs) -> Self {
        Self {
            catalog_path: catalog_path.to_path_buf(),
            args,
        }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let catalog = match load_catalog(&self.catalog_path) {
            Ok(c) => c,
            Err(e @ ConvoyError::CatalogNotFound { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        if self.args.json {
            ui.message(&serde_json::to_string_pretty(&catalog)?);
            return Ok(CommandResult::success());
        }

        ui.message(&catalog_table(&catalog).render());
        ui.message(&format!("Loaded {} workflows", catalog.len()));

        Ok(CommandResult::success())
    }
}
