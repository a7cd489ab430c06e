//! Workflow catalog loading and schema.
//!
//! The catalog is the external, read-only input that names workflows and the
//! agents their steps dispatch to. See [`schema::WorkflowCatalog`] for the
//! expected shape.

pub mod loader;
pub mod schema;

pub use loader::{load_catalog, parse_catalog, resolve_catalog_path, DEFAULT_CATALOG_FILE};
pub use schema::{AgentSpec, StepSpec, WorkflowCatalog, WorkflowSpec, DEFAULT_STEP_TIMEOUT_SECS};
