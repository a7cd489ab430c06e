//! Process-backed step executor.
//!
//! Resolves each step's agent to a shell command from the catalog and runs
//! it as a child process. The step's action and description travel in the
//! environment so one agent command can serve many actions. Timeout
//! enforcement lives here: a child still running at the deadline is killed
//! and the step reported as failed.

use std::collections::BTreeMap;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::catalog::WorkflowCatalog;
use crate::executor::{StepExecutor, StepOutcome, StepRequest};

/// How often the child is polled while waiting for it to exit.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Executes steps by spawning agent commands.
#[derive(Debug, Clone, Default)]
pub struct ProcessExecutor {
    commands: BTreeMap<String, String>,
}

impl ProcessExecutor {
    /// Build an executor from the catalog's agent table.
    pub fn from_catalog(catalog: &WorkflowCatalog) -> Self {
        let commands = catalog
            .agents
            .iter()
            .map(|(name, spec)| (name.clone(), spec.command.clone()))
            .collect();
        Self { commands }
    }

    /// Register an agent command directly.
    pub fn with_agent(mut self, agent: impl Into<String>, command: impl Into<String>) -> Self {
        self.commands.insert(agent.into(), command.into());
        self
    }

    fn run_command(&self, command: &str, request: &StepRequest) -> StepOutcome {
        let (shell, shell_flag) = shell_invocation();

        let mut cmd = Command::new(shell);
        cmd.arg(shell_flag)
            .arg(command)
            .env("CONVOY_AGENT", &request.agent)
            .env("CONVOY_ACTION", &request.action)
            .env("CONVOY_DESCRIPTION", &request.description)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = match cmd.spawn() {
            Ok(child) => child,
            Err(e) => {
                return StepOutcome::Failure {
                    message: format!("failed to spawn agent command: {}", e),
                }
            }
        };

        let deadline = Instant::now() + Duration::from_secs(request.timeout_secs);
        loop {
            match child.try_wait() {
                Ok(Some(status)) => {
                    let output = match child.wait_with_output() {
                        Ok(output) => output,
                        Err(e) => {
                            return StepOutcome::Failure {
                                message: format!("failed to collect agent output: {}", e),
                            }
                        }
                    };
                    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
                    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

                    if status.success() {
                        debug!(agent = %request.agent, action = %request.action, "Agent command succeeded");
                        let payload = if stdout.is_empty() {
                            format!("completed {} using {}", request.action, request.agent)
                        } else {
                            stdout
                        };
                        return StepOutcome::Success { payload };
                    }

                    let detail = if stderr.is_empty() { stdout } else { stderr };
                    let message = match (status.code(), detail.is_empty()) {
                        (Some(code), true) => format!("agent exited with code {}", code),
                        (Some(code), false) => {
                            format!("agent exited with code {}: {}", code, detail)
                        }
                        (None, true) => "agent terminated by signal".to_string(),
                        (None, false) => format!("agent terminated by signal: {}", detail),
                    };
                    return StepOutcome::Failure { message };
                }
                Ok(None) => {
                    if Instant::now() >= deadline {
                        warn!(
                            agent = %request.agent,
                            action = %request.action,
                            timeout = request.timeout_secs,
                            "Agent command timed out, killing"
                        );
                        let _ = child.kill();
                        let _ = child.wait();
                        return StepOutcome::Failure {
                            message: format!(
                                "timed out after {} seconds",
                                request.timeout_secs
                            ),
                        };
                    }
                    std::thread::sleep(POLL_INTERVAL);
                }
                Err(e) => {
                    let _ = child.kill();
                    return StepOutcome::Failure {
                        message: format!("failed to wait for agent: {}", e),
                    };
                }
            }
        }
    }
}

impl StepExecutor for ProcessExecutor {
    fn execute(&self, request: &StepRequest) -> StepOutcome {
        let Some(command) = self.commands.get(&request.agent) else {
            return StepOutcome::Failure {
                message: format!("no command configured for agent '{}'", request.agent),
            };
        };
        self.run_command(command, request)
    }
}

fn shell_invocation() -> (&'static str, &'static str) {
    if cfg!(windows) {
        ("cmd", "/C")
    } else {
        ("sh", "-c")
    }
}
