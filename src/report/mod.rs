//! Execution reporting.
//!
//! Read-only views over execution and catalog state: everything here
//! consumes snapshots and renders tables or summaries, never mutating the
//! engine's state. Reads are taken at quiescent points between dispatches,
//! so a step is never observed mid-transition.

use crate::catalog::WorkflowCatalog;
use crate::engine::{ExecutionStatus, Step, StepStatus, WorkflowExecution};
use crate::ui::{format_chrono_duration, ConvoyTheme, Table};

/// Build a table of all workflows in the catalog.
pub fn catalog_table(catalog: &WorkflowCatalog) -> Table {
    let mut table =
        Table::new(vec!["Workflow ID", "Name", "Steps", "Trigger"]).with_title("Available Workflows");

    for (workflow_id, workflow) in &catalog.workflows {
        table.add_row(vec![
            workflow_id.clone(),
            workflow.name.clone(),
            workflow.steps.len().to_string(),
            workflow.trigger.clone(),
        ]);
    }

    table
}

/// Build a per-step status table for an execution.
pub fn execution_table(execution: &WorkflowExecution, theme: &ConvoyTheme) -> Table {
    let mut table = Table::new(vec!["Step", "Agent", "Status", "Duration", "Description"])
        .with_title(&format!("Workflow Execution: {}", execution.name));

    for step in &execution.steps {
        table.add_row(vec![
            step.name.clone(),
            step.agent.clone(),
            theme
                .status_style(step.status)
                .apply_to(step.status.to_string())
                .to_string(),
            step_duration(step),
            step.description.clone(),
        ]);
    }

    table
}

fn step_duration(step: &Step) -> String {
    match (step.status, step.elapsed()) {
        (StepStatus::Running, Some(elapsed)) => {
            format!("running ({})", format_chrono_duration(elapsed))
        }
        (_, Some(elapsed)) => format_chrono_duration(elapsed),
        (_, None) => String::new(),
    }
}

/// Aggregate pass/fail summary of an execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionSummary {
    /// Steps that completed successfully.
    pub completed: usize,

    /// Steps that were attempted and failed.
    pub failed: usize,

    /// Steps that never ran (still pending or skipped).
    pub never_run: usize,

    /// Total number of steps.
    pub total: usize,

    /// Whether the execution ended in a terminal success state.
    pub success: bool,
}

impl ExecutionSummary {
    /// Derive the summary from an execution snapshot.
    pub fn from_execution(execution: &WorkflowExecution) -> Self {
        let never_run = execution
            .steps
            .iter()
            .filter(|s| matches!(s.status, StepStatus::Pending | StepStatus::Skipped))
            .count();

        Self {
            completed: execution.completed_steps,
            failed: execution.failed_steps,
            never_run,
            total: execution.total_steps,
            success: execution.status == ExecutionStatus::Completed,
        }
    }

    /// One-line counts view, e.g. "2 completed, 1 failed, 1 never ran".
    pub fn counts_line(&self) -> String {
        let mut parts = vec![format!("{} completed", self.completed)];
        if self.failed > 0 {
            parts.push(format!("{} failed", self.failed));
        }
        if self.never_run > 0 {
            parts.push(format!("{} never ran", self.never_run));
        }
        parts.join(", ")
    }
}
