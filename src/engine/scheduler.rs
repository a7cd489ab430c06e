//! Workflow scheduling and dispatch.
//!
//! The driver loop that turns an execution plan into step dispatches:
//! repeatedly selects the first ready pending step in declaration order,
//! hands it to the [`StepExecutor`], records the outcome, and detects
//! terminal conditions (completion, failure, deadlock).
//!
//! There is deliberately one loop. Interactive and batch invocations differ
//! only in how progress events are rendered by the caller, never in
//! scheduling semantics.

use tracing::{debug, warn};

use crate::engine::plan::{ExecutionStatus, WorkflowExecution};
use crate::engine::readiness::is_ready;
use crate::engine::step::StepStatus;
use crate::executor::{StepExecutor, StepOutcome, StepRequest};

/// Progress events emitted during workflow execution.
///
/// Consumers receive these at quiescent points between dispatches; a step is
/// never observable mid-transition.
#[derive(Debug)]
pub enum RunProgress {
    /// A step is about to be dispatched.
    StepStarting {
        name: String,
        description: String,
        agent: String,
        action: String,
        index: usize,
        total: usize,
    },
    /// A step reached a terminal status.
    StepFinished {
        name: String,
        description: String,
        status: StepStatus,
        error: Option<String>,
    },
    /// Pending steps remain but none is ready.
    Deadlocked { pending: Vec<String> },
}

/// Drives a workflow execution to a terminal state.
pub struct Scheduler<'a> {
    executor: &'a dyn StepExecutor,
}

impl<'a> Scheduler<'a> {
    /// Create a scheduler backed by the given executor.
    pub fn new(executor: &'a dyn StepExecutor) -> Self {
        Self { executor }
    }

    /// Run the execution to completion, failure, or deadlock.
    pub fn run(&self, execution: &mut WorkflowExecution) {
        self.run_with_progress(execution, |_| {});
    }

    /// Run the execution, reporting progress through a callback.
    ///
    /// Mutates the execution in place: counters are updated exactly once per
    /// step, and the execution becomes immutable once its status turns
    /// terminal. Steps left pending by a deadlock stay pending, which is the
    /// observable signal distinguishing "never attempted" from "attempted
    /// and failed".
    pub fn run_with_progress(
        &self,
        execution: &mut WorkflowExecution,
        mut on_progress: impl FnMut(RunProgress),
    ) {
        execution.status = ExecutionStatus::Running;
        execution.start_time = Some(chrono::Utc::now());

        let mut deadlocked = false;

        while execution.settled_steps() < execution.total_steps {
            // Readiness is re-evaluated against current state every tick;
            // first ready step in declaration order wins.
            let next = execution
                .steps
                .iter()
                .position(|s| s.status == StepStatus::Pending && is_ready(s, execution));

            let Some(index) = next else {
                let pending: Vec<String> = execution
                    .pending_steps()
                    .into_iter()
                    .map(String::from)
                    .collect();
                if pending.is_empty() {
                    break;
                }
                warn!(
                    workflow = %execution.workflow_id,
                    pending = pending.len(),
                    "Workflow deadlock: no executable steps remaining"
                );
                execution.status = ExecutionStatus::Failed;
                deadlocked = true;
                on_progress(RunProgress::Deadlocked { pending });
                break;
            };

            self.dispatch(execution, index, &mut on_progress);
        }

        execution.end_time = Some(chrono::Utc::now());
        if !deadlocked {
            execution.status = if execution.failed_steps == 0 {
                ExecutionStatus::Completed
            } else {
                ExecutionStatus::Failed
            };
        }

        debug!(
            workflow = %execution.workflow_id,
            status = %execution.status,
            completed = execution.completed_steps,
            failed = execution.failed_steps,
            total = execution.total_steps,
            "Workflow execution finished"
        );
    }

    /// Dispatch one step and record its outcome.
    fn dispatch(
        &self,
        execution: &mut WorkflowExecution,
        index: usize,
        on_progress: &mut impl FnMut(RunProgress),
    ) {
        let settled = execution.settled_steps();
        let total = execution.total_steps;

        let step = &mut execution.steps[index];
        step.mark_running();

        on_progress(RunProgress::StepStarting {
            name: step.name.clone(),
            description: step.description.clone(),
            agent: step.agent.clone(),
            action: step.action.clone(),
            index: settled,
            total,
        });

        debug!(step = %step.name, agent = %step.agent, action = %step.action, "Dispatching step");

        let request = StepRequest {
            agent: step.agent.clone(),
            action: step.action.clone(),
            description: step.description.clone(),
            timeout_secs: step.timeout,
        };

        // The dispatch blocks until the executor reports an outcome; the
        // executor owns timeout enforcement.
        let outcome = self.executor.execute(&request);

        let step = &mut execution.steps[index];
        let name = step.name.clone();
        let description = step.description.clone();
        let event = match outcome {
            StepOutcome::Success { payload } => {
                step.mark_completed(payload);
                execution.completed_steps += 1;
                RunProgress::StepFinished {
                    name,
                    description,
                    status: StepStatus::Completed,
                    error: None,
                }
            }
            StepOutcome::Failure { message } => {
                warn!(step = %name, error = %message, "Step failed");
                step.mark_failed(message.clone());
                execution.failed_steps += 1;
                RunProgress::StepFinished {
                    name,
                    description,
                    status: StepStatus::Failed,
                    error: Some(message),
                }
            }
        };
        on_progress(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::WorkflowCatalog;
    use crate::engine::plan::build_plan;
    use crate::executor::ScriptedExecutor;

    fn plan(yaml: &str) -> WorkflowExecution {
        let catalog: WorkflowCatalog = serde_yaml::from_str(yaml).unwrap();
        build_plan("wf", &catalog).unwrap()
    }

    const LINEAR: &str = r#"
workflows:
  wf:
    name: Linear
    steps:
      - { step: a, agent: x, action: act_a, description: first }
      - { step: b, agent: x, action: act_b, description: second, depends_on: [a] }
"#;

    #[test]
    fn linear_chain_completes_in_dependency_order() {
        let mut execution = plan(LINEAR);
        let executor = ScriptedExecutor::all_success();

        Scheduler::new(&executor).run(&mut execution);

        assert_eq!(execution.status, ExecutionStatus::Completed);
        assert_eq!(execution.completed_steps, 2);
        assert_eq!(execution.failed_steps, 0);

        let a = execution.step("a").unwrap();
        let b = execution.step("b").unwrap();
        assert!(a.end_time.unwrap() <= b.start_time.unwrap());
    }

    #[test]
    fn dangling_dependency_deadlocks() {
        let mut execution = plan(
            r#"
workflows:
  wf:
    name: Dangling
    steps:
      - { step: a, agent: x, action: act, description: ghost dep, depends_on: [ghost] }
"#,
        );
        let executor = ScriptedExecutor::all_success();

        let mut deadlock_pending = Vec::new();
        Scheduler::new(&executor).run_with_progress(&mut execution, |event| {
            if let RunProgress::Deadlocked { pending } = event {
                deadlock_pending = pending;
            }
        });

        assert_eq!(execution.status, ExecutionStatus::Failed);
        assert_eq!(execution.completed_steps, 0);
        assert_eq!(execution.step("a").unwrap().status, StepStatus::Pending);
        assert_eq!(deadlock_pending, vec!["a"]);
    }

    #[test]
    fn cycle_deadlocks_with_all_steps_pending() {
        let mut execution = plan(
            r#"
workflows:
  wf:
    name: Cycle
    steps:
      - { step: a, agent: x, action: act, description: one, depends_on: [b] }
      - { step: b, agent: x, action: act, description: two, depends_on: [a] }
"#,
        );
        let executor = ScriptedExecutor::all_success();

        Scheduler::new(&executor).run(&mut execution);

        assert_eq!(execution.status, ExecutionStatus::Failed);
        assert_eq!(execution.pending_steps().len(), 2);
    }

    #[test]
    fn failed_dependency_blocks_dependents_forever() {
        let mut execution = plan(LINEAR);
        let executor = ScriptedExecutor::new().fail("act_a", "build broke");

        Scheduler::new(&executor).run(&mut execution);

        assert_eq!(execution.status, ExecutionStatus::Failed);
        assert_eq!(execution.failed_steps, 1);
        assert_eq!(execution.completed_steps, 0);
        assert_eq!(execution.step("a").unwrap().status, StepStatus::Failed);
        assert_eq!(
            execution.step("a").unwrap().error.as_deref(),
            Some("build broke")
        );
        // b never ran and stays pending, not failed.
        assert_eq!(execution.step("b").unwrap().status, StepStatus::Pending);
    }

    #[test]
    fn independent_siblings_run_despite_failure() {
        let mut execution = plan(
            r#"
workflows:
  wf:
    name: Siblings
    steps:
      - { step: a, agent: x, action: act_a, description: fails }
      - { step: b, agent: x, action: act_b, description: succeeds }
"#,
        );
        let executor = ScriptedExecutor::new().fail("act_a", "boom");

        Scheduler::new(&executor).run(&mut execution);

        // Any failure fails the workflow, but b still ran.
        assert_eq!(execution.status, ExecutionStatus::Failed);
        assert_eq!(execution.completed_steps, 1);
        assert_eq!(execution.failed_steps, 1);
        assert_eq!(execution.step("b").unwrap().status, StepStatus::Completed);
    }

    #[test]
    fn diamond_settles_every_step() {
        let mut execution = plan(
            r#"
workflows:
  wf:
    name: Diamond
    steps:
      - { step: a, agent: x, action: act, description: root }
      - { step: b, agent: x, action: act, description: left, depends_on: [a] }
      - { step: c, agent: x, action: act, description: right, depends_on: [a] }
      - { step: d, agent: x, action: act, description: join, depends_on: [b, c] }
"#,
        );
        let executor = ScriptedExecutor::all_success();

        Scheduler::new(&executor).run(&mut execution);

        assert_eq!(execution.status, ExecutionStatus::Completed);
        assert_eq!(
            execution.settled_steps(),
            execution.total_steps,
            "acyclic resolvable graph must settle every step"
        );
    }

    #[test]
    fn dependency_declared_after_dependent_still_runs() {
        // Declaration order is only a tie-break; the loop re-evaluates
        // readiness until the later-declared dependency completes.
        let mut execution = plan(
            r#"
workflows:
  wf:
    name: Reversed
    steps:
      - { step: late, agent: x, action: act_late, description: needs early, depends_on: [early] }
      - { step: early, agent: x, action: act_early, description: declared last }
"#,
        );
        let executor = ScriptedExecutor::all_success();

        let mut started = Vec::new();
        Scheduler::new(&executor).run_with_progress(&mut execution, |event| {
            if let RunProgress::StepStarting { name, .. } = event {
                started.push(name);
            }
        });

        assert_eq!(execution.status, ExecutionStatus::Completed);
        assert_eq!(started, vec!["early", "late"]);
    }

    #[test]
    fn progress_events_cover_every_dispatch() {
        let mut execution = plan(LINEAR);
        let executor = ScriptedExecutor::all_success();

        let mut starting = 0;
        let mut finished = 0;
        Scheduler::new(&executor).run_with_progress(&mut execution, |event| match event {
            RunProgress::StepStarting { .. } => starting += 1,
            RunProgress::StepFinished { .. } => finished += 1,
            RunProgress::Deadlocked { .. } => panic!("unexpected deadlock"),
        });

        assert_eq!(starting, 2);
        assert_eq!(finished, 2);
    }

    #[test]
    fn execution_records_wall_clock_bounds() {
        let mut execution = plan(LINEAR);
        let executor = ScriptedExecutor::all_success();

        Scheduler::new(&executor).run(&mut execution);

        assert!(execution.start_time.is_some());
        assert!(execution.end_time.is_some());
        assert!(execution.start_time.unwrap() <= execution.end_time.unwrap());
    }

    #[test]
    fn counters_never_exceed_total() {
        let mut execution = plan(LINEAR);
        let executor = ScriptedExecutor::new().fail("act_b", "late failure");

        Scheduler::new(&executor).run(&mut execution);

        assert!(execution.settled_steps() <= execution.total_steps);
        assert_eq!(execution.settled_steps(), execution.total_steps);
    }
}
