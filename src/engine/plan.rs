//! Execution plan building.
//!
//! Turns a workflow definition from the catalog into a runnable
//! [`WorkflowExecution`] with initialized per-step state. Plan generation is
//! a pure transform: dependency problems (cycles, dangling names) are not
//! validated here and surface as deadlock at execution time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::WorkflowCatalog;
use crate::engine::step::Step;
use crate::error::{ConvoyError, Result};

/// Status of a workflow execution as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatus {
    /// Plan built, not yet started.
    Pending,

    /// Scheduler loop in progress.
    Running,

    /// All steps completed successfully.
    Completed,

    /// At least one step failed, or the execution deadlocked.
    Failed,

    /// Execution was cancelled before completion.
    Cancelled,
}

impl ExecutionStatus {
    /// Check if this is a terminal state (the execution is immutable).
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ExecutionStatus::Completed | ExecutionStatus::Failed | ExecutionStatus::Cancelled
        )
    }
}

impl std::fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ExecutionStatus::Pending => "pending",
            ExecutionStatus::Running => "running",
            ExecutionStatus::Completed => "completed",
            ExecutionStatus::Failed => "failed",
            ExecutionStatus::Cancelled => "cancelled",
        };
        write!(f, "{}", s)
    }
}

/// One run instance of a workflow.
///
/// Created by [`build_plan`], mutated exclusively by the scheduler, and
/// immutable once `status` reaches a terminal state. Step order is
/// declaration order, which is the scheduling tie-break, not the execution
/// order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowExecution {
    /// Catalog id of the workflow.
    pub workflow_id: String,

    /// Human-readable workflow name.
    pub name: String,

    /// Steps in declaration order.
    pub steps: Vec<Step>,

    /// Aggregate status.
    pub status: ExecutionStatus,

    /// When the scheduler loop started.
    pub start_time: Option<DateTime<Utc>>,

    /// When the execution reached a terminal status.
    pub end_time: Option<DateTime<Utc>>,

    /// Total number of steps in the plan.
    pub total_steps: usize,

    /// Steps that completed successfully.
    pub completed_steps: usize,

    /// Steps that were attempted and failed.
    pub failed_steps: usize,
}

impl WorkflowExecution {
    /// Find a step by name.
    pub fn step(&self, name: &str) -> Option<&Step> {
        self.steps.iter().find(|s| s.name == name)
    }

    /// Names of steps still pending (never attempted).
    pub fn pending_steps(&self) -> Vec<&str> {
        self.steps
            .iter()
            .filter(|s| s.status == crate::engine::StepStatus::Pending)
            .map(|s| s.name.as_str())
            .collect()
    }

    /// Steps that reached a terminal per-step status via dispatch.
    pub fn settled_steps(&self) -> usize {
        self.completed_steps + self.failed_steps
    }

    /// Wall-clock duration: end − start when finished, live elapsed while
    /// running.
    pub fn elapsed(&self) -> Option<chrono::Duration> {
        let start = self.start_time?;
        let end = self.end_time.unwrap_or_else(Utc::now);
        Some(end - start)
    }
}

/// Build an execution plan for the given workflow.
///
/// Each step spec becomes a pending [`Step`] with defaulted `timeout` and
/// `depends_on` (defaulting happens at catalog parse time); counters start at
/// zero.
///
/// # Errors
///
/// Returns `WorkflowNotFound` if the id is absent from the catalog. No other
/// validation happens here.
pub fn build_plan(workflow_id: &str, catalog: &WorkflowCatalog) -> Result<WorkflowExecution> {
    let workflow = catalog
        .workflow(workflow_id)
        .ok_or_else(|| ConvoyError::WorkflowNotFound {
            workflow_id: workflow_id.to_string(),
        })?;

    let steps: Vec<Step> = workflow.steps.iter().map(Step::from_spec).collect();

    Ok(WorkflowExecution {
        workflow_id: workflow_id.to_string(),
        name: workflow.name.clone(),
        total_steps: steps.len(),
        steps,
        status: ExecutionStatus::Pending,
        start_time: None,
        end_time: None,
        completed_steps: 0,
        failed_steps: 0,
    })
}
