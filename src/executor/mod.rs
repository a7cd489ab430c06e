//! Step executor collaborators.
//!
//! The engine treats step execution as an opaque, potentially slow,
//! potentially failing operation behind the [`StepExecutor`] trait. The
//! executor, not the scheduler, owns timeout enforcement.
//!
//! - [`process`] - Runs agent commands as child processes
//! - [`scripted`] - Deterministic injected outcomes for tests

pub mod process;
pub mod scripted;

pub use process::ProcessExecutor;
pub use scripted::ScriptedExecutor;

/// What the scheduler hands to an executor for one step.
#[derive(Debug, Clone)]
pub struct StepRequest {
    /// Agent capability to invoke.
    pub agent: String,

    /// Operation identifier passed to the agent.
    pub action: String,

    /// Human-readable description of the work.
    pub description: String,

    /// Upper bound on execution duration, in seconds.
    pub timeout_secs: u64,
}

/// Outcome of dispatching a step.
#[derive(Debug, Clone)]
pub enum StepOutcome {
    /// The step succeeded; the payload is recorded as the step result.
    Success { payload: String },

    /// The step failed; the message is recorded as the step error.
    Failure { message: String },
}

impl StepOutcome {
    /// Check if this outcome is a success.
    pub fn is_success(&self) -> bool {
        matches!(self, StepOutcome::Success { .. })
    }
}

/// Capability that performs the actual work denoted by a step.
pub trait StepExecutor {
    /// Execute one step request, blocking until an outcome is known.
    fn execute(&self, request: &StepRequest) -> StepOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_success_flag() {
        let ok = StepOutcome::Success {
            payload: "done".into(),
        };
        let err = StepOutcome::Failure {
            message: "broke".into(),
        };
        assert!(ok.is_success());
        assert!(!err.is_success());
    }
}
