//! Plan command implementation.
//!
//! The `convoy plan` command builds an execution plan and displays it
//! without dispatching any steps.

use std::path::{Path, PathBuf};

use crate::catalog::load_catalog;
use crate::cli::args::PlanArgs;
use crate::engine::build_plan;
use crate::error::{ConvoyError, Result};
use crate::report::execution_table;
use crate::ui::{ConvoyTheme, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The plan command implementation.
pub struct PlanCommand {
    catalog_path: PathBuf,
    args: PlanArgs,
}

impl PlanCommand {
    /// Create a new plan command.
    pub fn new(catalog_path: &Path, args: PlanArgs) -> Self {
        Self {
            catalog_path: catalog_path.to_path_buf(),
            args,
        }
    }
}

impl Command for PlanCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let catalog = match load_catalog(&self.catalog_path) {
            Ok(c) => c,
            Err(e @ ConvoyError::CatalogNotFound { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        // Unknown workflow id propagates to a non-zero exit.
        let execution = build_plan(&self.args.workflow, &catalog)?;

        if self.args.json {
            ui.message(&serde_json::to_string_pretty(&execution)?);
            return Ok(CommandResult::success());
        }

        let theme = ConvoyTheme::new();
        ui.message(&execution_table(&execution, &theme).render());

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn setup_catalog(content: &str) -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("workflows.yml");
        fs::write(&path, content).unwrap();
        (temp, path)
    }

    const CATALOG: &str = r#"
workflows:
  release:
    name: Release pipeline
    steps:
      - { step: compile, agent: builder, action: build_all, description: Compile }
      - { step: verify, agent: tester, action: run_tests, description: Verify, depends_on: [compile] }
"#;

    fn args(workflow: &str) -> PlanArgs {
        PlanArgs {
            workflow: workflow.to_string(),
            json: false,
        }
    }

    #[test]
    fn plan_unknown_workflow_propagates_error() {
        let (_temp, path) = setup_catalog(CATALOG);
        let cmd = PlanCommand::new(&path, args("ghost"));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui);
        assert!(matches!(
            result,
            Err(ConvoyError::WorkflowNotFound { .. })
        ));
    }

    #[test]
    fn plan_displays_pending_steps() {
        let (_temp, path) = setup_catalog(CATALOG);
        let cmd = PlanCommand::new(&path, args("release"));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("compile"));
        assert!(ui.has_message("verify"));
        assert!(ui.has_message("pending"));
        assert!(ui.has_message("Release pipeline"));
    }

    #[test]
    fn plan_json_serializes_execution() {
        let (_temp, path) = setup_catalog(CATALOG);
        let cmd = PlanCommand::new(
            &path,
            PlanArgs {
                workflow: "release".to_string(),
                json: true,
            },
        );
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_message("\"workflow_id\": \"release\""));
        assert!(ui.has_message("\"status\": \"pending\""));
    }

    #[test]
    fn plan_missing_catalog_fails_with_exit_2() {
        let temp = TempDir::new().unwrap();
        let cmd = PlanCommand::new(&temp.path().join("nope.yml"), args("release"));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();
        assert_eq!(result.exit_code, 2);
    }
}
