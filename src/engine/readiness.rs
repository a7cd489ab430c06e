//! Step readiness evaluation.

use crate::engine::plan::WorkflowExecution;
use crate::engine::step::{Step, StepStatus};

/// Check whether a step is eligible to run given current execution state.
///
/// A step with no dependencies is always ready. Otherwise every named
/// dependency must resolve to a step in the execution whose status is
/// completed. A name that resolves to no step is treated as unsatisfied, not
/// as an error; the mismatch surfaces later as deadlock.
///
/// Pure and side-effect-free. Re-evaluated on every scheduling tick, since
/// dependency status changes between ticks.
pub fn is_ready(step: &Step, execution: &WorkflowExecution) -> bool {
    step.depends_on.iter().all(|dep| {
        execution
            .step(dep)
            .is_some_and(|s| s.status == StepStatus::Completed)
    })
}
