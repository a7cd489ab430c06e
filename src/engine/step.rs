//! Step lifecycle state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::StepSpec;

/// Status of a step in a workflow execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    /// Step is waiting to run.
    Pending,

    /// Step is currently executing.
    Running,

    /// Step completed successfully.
    Completed,

    /// Step failed.
    Failed,

    /// Step was skipped without running.
    Skipped,
}

impl StepStatus {
    /// Check if this is a terminal state (no more transitions expected).
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            StepStatus::Completed | StepStatus::Failed | StepStatus::Skipped
        )
    }

    /// Get a display character for this status.
    pub fn display_char(&self) -> char {
        match self {
            StepStatus::Pending => '○',
            StepStatus::Running => '◉',
            StepStatus::Completed => '✓',
            StepStatus::Failed => '✗',
            StepStatus::Skipped => '⊘',
        }
    }
}

impl std::fmt::Display for StepStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StepStatus::Pending => "pending",
            StepStatus::Running => "running",
            StepStatus::Completed => "completed",
            StepStatus::Failed => "failed",
            StepStatus::Skipped => "skipped",
        };
        write!(f, "{}", s)
    }
}

/// One unit of work inside a workflow execution.
///
/// Carries the declarative fields from the catalog spec plus runtime state.
/// Status only moves forward: pending → running → {completed, failed};
/// skipped is reachable only from pending and is terminal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    /// Step name, unique within the workflow.
    pub name: String,

    /// Agent capability dispatched for this step.
    pub agent: String,

    /// Operation identifier passed to the agent.
    pub action: String,

    /// Human-readable description.
    pub description: String,

    /// Timeout in seconds, forwarded to the executor.
    pub timeout: u64,

    /// Steps that must be completed before this one may run.
    pub depends_on: Vec<String>,

    /// Current lifecycle status.
    pub status: StepStatus,

    /// When the step started running.
    pub start_time: Option<DateTime<Utc>>,

    /// When the step reached a terminal status.
    pub end_time: Option<DateTime<Utc>>,

    /// Opaque success payload from the executor.
    pub result: Option<String>,

    /// Failure description from the executor.
    pub error: Option<String>,
}

impl Step {
    /// Instantiate a pending step from its catalog spec.
    pub fn from_spec(spec: &StepSpec) -> Self {
        Self {
            name: spec.step.clone(),
            agent: spec.agent.clone(),
            action: spec.action.clone(),
            description: spec.description.clone(),
            timeout: spec.timeout,
            depends_on: spec.depends_on.clone(),
            status: StepStatus::Pending,
            start_time: None,
            end_time: None,
            result: None,
            error: None,
        }
    }

    /// Transition pending → running, recording the start timestamp.
    pub fn mark_running(&mut self) {
        debug_assert_eq!(self.status, StepStatus::Pending);
        self.status = StepStatus::Running;
        self.start_time = Some(Utc::now());
    }

    /// Transition running → completed, recording the result payload.
    pub fn mark_completed(&mut self, result: String) {
        debug_assert_eq!(self.status, StepStatus::Running);
        self.status = StepStatus::Completed;
        self.end_time = Some(Utc::now());
        self.result = Some(result);
    }

    /// Transition running → failed, recording the error.
    pub fn mark_failed(&mut self, error: String) {
        debug_assert_eq!(self.status, StepStatus::Running);
        self.status = StepStatus::Failed;
        self.end_time = Some(Utc::now());
        self.error = Some(error);
    }

    /// Elapsed duration: end − start when finished, live elapsed while
    /// running, None when the step never started.
    pub fn elapsed(&self) -> Option<chrono::Duration> {
        let start = self.start_time?;
        let end = self.end_time.unwrap_or_else(Utc::now);
        Some(end - start)
    }
}
