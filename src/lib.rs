//! Convoy - Agent workflow orchestration.
//!
//! Convoy executes named workflows: directed acyclic graphs of steps, where
//! each step delegates its work to an external agent capability and may
//! depend on other steps in the same workflow.
//!
//! # Modules
//!
//! - [`catalog`] - Workflow catalog loading and schema
//! - [`cli`] - Command-line interface and argument parsing
//! - [`engine`] - Plan building, readiness evaluation, and scheduling
//! - [`error`] - Error types and result aliases
//! - [`executor`] - Step executor collaborators
//! - [`report`] - Read-only execution and catalog views
//! - [`ui`] - Terminal output, spinners, and tables
//!
//! # Example
//!
//! ```
//! use convoy::catalog::WorkflowCatalog;
//! use convoy::engine::{build_plan, Scheduler};
//! use convoy::executor::ScriptedExecutor;
//!
//! let catalog: WorkflowCatalog = serde_yaml::from_str(r#"
//! workflows:
//!   ci:
//!     name: CI pipeline
//!     steps:
//!       - { step: build, agent: builder, action: build_all, description: Build }
//! "#).unwrap();
//!
//! let mut execution = build_plan("ci", &catalog).unwrap();
//! let executor = ScriptedExecutor::all_success();
//! Scheduler::new(&executor).run(&mut execution);
//! assert_eq!(execution.completed_steps, 1);
//! ```

pub mod catalog;
pub mod cli;
pub mod engine;
pub mod error;
pub mod executor;
pub mod report;
pub mod ui;

pub use error::{ConvoyError, Result};
