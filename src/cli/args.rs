//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Convoy - Agent workflow orchestration.
#[derive(Debug, Parser)]
#[command(name = "convoy")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to workflow catalog (overrides default workflows.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List workflows in the catalog
    List(ListArgs),

    /// Build and display an execution plan without running it
    Plan(PlanArgs),

    /// Build and run a workflow
    Execute(ExecuteArgs),

    /// Show execution status
    Status,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `plan` command.
#[derive(Debug, Clone, clap::Args)]
pub struct PlanArgs {
    /// Workflow ID to plan
    pub workflow: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `execute` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ExecuteArgs {
    /// Workflow ID to execute
    pub workflow: String,

    /// Run without spinners or interactive rendering
    #[arg(long)]
    pub non_interactive: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn plan_requires_workflow_id() {
        let result = Cli::try_parse_from(["convoy", "plan"]);
        assert!(result.is_err());
    }

    #[test]
    fn execute_parses_workflow_and_flags() {
        let cli =
            Cli::try_parse_from(["convoy", "execute", "release", "--non-interactive"]).unwrap();
        match cli.command {
            Commands::Execute(args) => {
                assert_eq!(args.workflow, "release");
                assert!(args.non_interactive);
            }
            _ => panic!("expected execute command"),
        }
    }

    #[test]
    fn global_config_flag_is_accepted_after_subcommand() {
        let cli = Cli::try_parse_from(["convoy", "list", "--config", "alt.yml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("alt.yml")));
    }
}
