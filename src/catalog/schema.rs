//! Workflow catalog schema.
//!
//! Typed representation of the YAML catalog file. The catalog is read-only
//! input: the engine reads it once per plan generation and never writes it
//! back.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Default step timeout in seconds when a spec omits one.
pub const DEFAULT_STEP_TIMEOUT_SECS: u64 = 600;

/// Top-level workflow catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkflowCatalog {
    /// Agent capabilities available to steps, keyed by agent name.
    #[serde(default)]
    pub agents: BTreeMap<String, AgentSpec>,

    /// Workflows keyed by workflow id.
    #[serde(default)]
    pub workflows: BTreeMap<String, WorkflowSpec>,
}

impl WorkflowCatalog {
    /// Look up a workflow by id.
    pub fn workflow(&self, workflow_id: &str) -> Option<&WorkflowSpec> {
        self.workflows.get(workflow_id)
    }

    /// Look up an agent's command by name.
    pub fn agent_command(&self, agent: &str) -> Option<&str> {
        self.agents.get(agent).map(|a| a.command.as_str())
    }

    /// Number of workflows in the catalog.
    pub fn len(&self) -> usize {
        self.workflows.len()
    }

    /// Check if the catalog has no workflows.
    pub fn is_empty(&self) -> bool {
        self.workflows.is_empty()
    }
}

/// An agent capability: the external command that performs step work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentSpec {
    /// Shell command invoked for every step dispatched to this agent.
    pub command: String,
}

/// A named workflow definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowSpec {
    /// Human-readable workflow name.
    pub name: String,

    /// How the workflow is triggered (informational; all execution is manual).
    #[serde(default = "default_trigger")]
    pub trigger: String,

    /// Ordered step specifications. Declaration order is preserved and used
    /// as the scheduling tie-break, not as the execution order itself.
    #[serde(default)]
    pub steps: Vec<StepSpec>,
}

fn default_trigger() -> String {
    "manual".to_string()
}

/// A single step specification within a workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepSpec {
    /// Step name, unique within the workflow.
    pub step: String,

    /// Name of the agent capability that performs the work.
    pub agent: String,

    /// Operation identifier passed to the agent.
    pub action: String,

    /// Human-readable description.
    pub description: String,

    /// Upper bound on execution duration, in seconds. Forwarded to the
    /// executor, which owns enforcement.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Names of steps that must complete before this one may run.
    #[serde(default)]
    pub depends_on: Vec<String>,
}

fn default_timeout() -> u64 {
    DEFAULT_STEP_TIMEOUT_SECS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_spec_defaults_timeout_and_depends_on() {
        let yaml = r#"
step: compile
agent: builder
action: build_all
description: Compile the project
"#;
        let spec: StepSpec = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(spec.timeout, DEFAULT_STEP_TIMEOUT_SECS);
        assert!(spec.depends_on.is_empty());
    }

    #[test]
    fn step_spec_explicit_fields() {
        let yaml = r#"
step: test
agent: tester
action: run_tests
description: Run the suite
timeout: 1200
depends_on: [compile]
"#;
        let spec: StepSpec = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(spec.timeout, 1200);
        assert_eq!(spec.depends_on, vec!["compile"]);
    }

    #[test]
    fn workflow_spec_defaults_trigger_to_manual() {
        let yaml = r#"
name: Release pipeline
steps: []
"#;
        let spec: WorkflowSpec = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(spec.trigger, "manual");
    }

    #[test]
    fn workflow_steps_preserve_declaration_order() {
        let yaml = r#"
name: Ordered
steps:
  - { step: c, agent: a, action: x, description: third }
  - { step: a, agent: a, action: x, description: first }
  - { step: b, agent: a, action: x, description: second }
"#;
        let spec: WorkflowSpec = serde_yaml::from_str(yaml).unwrap();
        let order: Vec<_> = spec.steps.iter().map(|s| s.step.as_str()).collect();
        assert_eq!(order, vec!["c", "a", "b"]);
    }

    #[test]
    fn catalog_lookup_by_id() {
        let yaml = r#"
workflows:
  release:
    name: Release pipeline
    steps: []
"#;
        let catalog: WorkflowCatalog = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.workflow("release").is_some());
        assert!(catalog.workflow("missing").is_none());
    }

    #[test]
    fn catalog_agent_command_lookup() {
        let yaml = r#"
agents:
  builder:
    command: scripts/builder.sh
workflows: {}
"#;
        let catalog: WorkflowCatalog = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(catalog.agent_command("builder"), Some("scripts/builder.sh"));
        assert_eq!(catalog.agent_command("nope"), None);
    }

    #[test]
    fn empty_catalog_is_empty() {
        let catalog = WorkflowCatalog::default();
        assert!(catalog.is_empty());
    }
}
