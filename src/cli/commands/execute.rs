//! Execute command implementation.
//!
//! The `convoy execute` command builds an execution plan and drives it to a
//! terminal state, rendering per-step progress as the scheduler reports it.

use std::path::{Path, PathBuf};

use crate::catalog::load_catalog;
use crate::cli::args::ExecuteArgs;
use crate::engine::{build_plan, RunProgress, Scheduler, StepStatus};
use crate::error::{ConvoyError, Result};
use crate::executor::ProcessExecutor;
use crate::report::{execution_table, ExecutionSummary};
use crate::ui::{format_chrono_duration, ConvoyTheme, SpinnerHandle, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The execute command implementation.
pub struct ExecuteCommand {
    catalog_path: PathBuf,
    args: ExecuteArgs,
}

impl ExecuteCommand {
    /// Create a new execute command.
    pub fn new(catalog_path: &Path, args: ExecuteArgs) -> Self {
        Self {
            catalog_path: catalog_path.to_path_buf(),
            args,
        }
    }
}

impl Command for ExecuteCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let catalog = match load_catalog(&self.catalog_path) {
            Ok(c) => c,
            Err(e @ ConvoyError::CatalogNotFound { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        let mut execution = build_plan(&self.args.workflow, &catalog)?;
        let executor = ProcessExecutor::from_catalog(&catalog);

        ui.show_header(&format!("Starting workflow: {}", execution.name));
        ui.message(&format!("Steps: {}", execution.total_steps));

        let mut spinner: Option<Box<dyn SpinnerHandle>> = None;
        Scheduler::new(&executor).run_with_progress(&mut execution, |event| match event {
            RunProgress::StepStarting {
                name,
                description,
                agent,
                action,
                index,
                total,
            } => {
                ui.show_progress(index + 1, total);
                spinner = Some(ui.start_spinner(&format!(
                    "{} - {} [{} {}]",
                    name, description, agent, action
                )));
            }
            RunProgress::StepFinished {
                name,
                description,
                status,
                error,
            } => {
                if let Some(mut handle) = spinner.take() {
                    match status {
                        StepStatus::Completed => {
                            handle.finish_success(&format!("{} - {}", name, description));
                        }
                        _ => {
                            let detail = error.unwrap_or_else(|| "failed".to_string());
                            handle.finish_error(&format!("{} - {}", name, detail));
                        }
                    }
                }
            }
            RunProgress::Deadlocked { pending } => {
                ui.error(&format!(
                    "Workflow deadlock: no executable steps remaining ({} still pending: {})",
                    pending.len(),
                    pending.join(", ")
                ));
            }
        });

        if ui.output_mode().shows_detail() {
            let theme = ConvoyTheme::new();
            ui.message(&execution_table(&execution, &theme).render());
        }

        let summary = ExecutionSummary::from_execution(&execution);
        let duration = execution
            .elapsed()
            .map(format_chrono_duration)
            .unwrap_or_default();

        if summary.success {
            ui.success(&format!(
                "Workflow completed: {} ({})",
                summary.counts_line(),
                duration
            ));
            Ok(CommandResult::success())
        } else {
            ui.error(&format!("Workflow failed: {}", summary.counts_line()));
            Ok(CommandResult::failure(1))
        }
    }
}
