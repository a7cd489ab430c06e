//! Scripted step executor for testing.
//!
//! `ScriptedExecutor` returns pre-configured outcomes keyed by action,
//! letting tests drive the scheduler deterministically without spawning
//! processes. It also records every request it receives for later assertion.
//!
//! # Example
//!
//! ```
//! use convoy::executor::{ScriptedExecutor, StepExecutor, StepRequest};
//!
//! let executor = ScriptedExecutor::new().fail("run_tests", "suite broke");
//!
//! let outcome = executor.execute(&StepRequest {
//!     agent: "tester".into(),
//!     action: "run_tests".into(),
//!     description: "Run the suite".into(),
//!     timeout_secs: 600,
//! });
//! assert!(!outcome.is_success());
//! ```

use std::collections::HashMap;
use std::sync::Mutex;

use crate::executor::{StepExecutor, StepOutcome, StepRequest};

/// Step executor with deterministic, injected outcomes.
///
/// Actions without a configured outcome succeed with a synthetic payload.
#[derive(Debug, Default)]
pub struct ScriptedExecutor {
    outcomes: HashMap<String, StepOutcome>,
    requests: Mutex<Vec<StepRequest>>,
}

impl ScriptedExecutor {
    /// Create an executor where every action succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Alias for [`ScriptedExecutor::new`], for readable test setup.
    pub fn all_success() -> Self {
        Self::default()
    }

    /// Configure an action to succeed with a specific payload.
    pub fn succeed(mut self, action: &str, payload: &str) -> Self {
        self.outcomes.insert(
            action.to_string(),
            StepOutcome::Success {
                payload: payload.to_string(),
            },
        );
        self
    }

    /// Configure an action to fail with a message.
    pub fn fail(mut self, action: &str, message: &str) -> Self {
        self.outcomes.insert(
            action.to_string(),
            StepOutcome::Failure {
                message: message.to_string(),
            },
        );
        self
    }

    /// Requests received so far, in dispatch order.
    pub fn requests(&self) -> Vec<StepRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Actions dispatched so far, in order.
    pub fn dispatched_actions(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.action.clone())
            .collect()
    }
}

impl StepExecutor for ScriptedExecutor {
    fn execute(&self, request: &StepRequest) -> StepOutcome {
        self.requests.lock().unwrap().push(request.clone());

        match self.outcomes.get(&request.action) {
            Some(outcome) => outcome.clone(),
            None => StepOutcome::Success {
                payload: format!("completed {} using {}", request.action, request.agent),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(action: &str) -> StepRequest {
        StepRequest {
            agent: "agent".to_string(),
            action: action.to_string(),
            description: "desc".to_string(),
            timeout_secs: 600,
        }
    }

    #[test]
    fn unconfigured_action_succeeds() {
        let executor = ScriptedExecutor::new();
        assert!(executor.execute(&request("anything")).is_success());
    }

    #[test]
    fn configured_failure_is_returned() {
        let executor = ScriptedExecutor::new().fail("deploy", "no credentials");
        match executor.execute(&request("deploy")) {
            StepOutcome::Failure { message } => assert_eq!(message, "no credentials"),
            StepOutcome::Success { .. } => panic!("expected failure"),
        }
    }

    #[test]
    fn configured_success_payload_is_returned() {
        let executor = ScriptedExecutor::new().succeed("build", "artifact.tgz");
        match executor.execute(&request("build")) {
            StepOutcome::Success { payload } => assert_eq!(payload, "artifact.tgz"),
            StepOutcome::Failure { .. } => panic!("expected success"),
        }
    }

    #[test]
    fn records_requests_in_order() {
        let executor = ScriptedExecutor::new();
        executor.execute(&request("first"));
        executor.execute(&request("second"));
        assert_eq!(executor.dispatched_actions(), vec!["first", "second"]);
    }
}
