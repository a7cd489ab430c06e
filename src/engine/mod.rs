//! Workflow execution engine.
//!
//! The core of Convoy: turns a declarative step list into an executable plan,
//! decides step readiness, drives dispatch, and detects deadlock.
//!
//! - [`step`] - Step entity and lifecycle status
//! - [`plan`] - Execution plan building
//! - [`readiness`] - Dependency readiness evaluation
//! - [`scheduler`] - The driver loop

pub mod plan;
pub mod readiness;
pub mod scheduler;
pub mod step;

pub use plan::{build_plan, ExecutionStatus, WorkflowExecution};
pub use readiness::is_ready;
pub use scheduler::{RunProgress, Scheduler};
pub use step::{Step, StepStatus};
