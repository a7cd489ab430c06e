//! Error types for Convoy operations.
//!
//! This module defines [`ConvoyError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `ConvoyError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `ConvoyError::Other`) for unexpected errors
//! - Per-step failures are not errors: they are recorded on the execution
//!   and reported, never propagated past the scheduler loop

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Convoy operations.
#[derive(Debug, Error)]
pub enum ConvoyError {
    /// Workflow catalog file not found at expected location.
    #[error("Workflow catalog not found: {path}")]
    CatalogNotFound { path: PathBuf },

    /// Failed to parse the workflow catalog.
    #[error("Failed to parse catalog at {path}: {message}")]
    CatalogParseError { path: PathBuf, message: String },

    /// Referenced workflow does not exist in the catalog.
    #[error("Workflow '{workflow_id}' not found in catalog")]
    WorkflowNotFound { workflow_id: String },

    /// No command is configured for an agent referenced by a step.
    #[error("No command configured for agent '{agent}'")]
    AgentNotConfigured { agent: String },

    /// Failed to serialize output (e.g., --json views).
    #[error("Failed to serialize output: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Convoy operations.
pub type Result<T> = std::result::Result<T, ConvoyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_not_found_displays_path() {
        let err = ConvoyError::CatalogNotFound {
            path: PathBuf::from("/foo/workflows.yml"),
        };
        assert!(err.to_string().contains("/foo/workflows.yml"));
    }

    #[test]
    fn catalog_parse_error_displays_path_and_message() {
        let err = ConvoyError::CatalogParseError {
            path: PathBuf::from("/workflows.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/workflows.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn workflow_not_found_displays_id() {
        let err = ConvoyError::WorkflowNotFound {
            workflow_id: "nightly_build".into(),
        };
        assert!(err.to_string().contains("nightly_build"));
    }

    #[test]
    fn agent_not_configured_displays_agent() {
        let err = ConvoyError::AgentNotConfigured {
            agent: "parser-dev".into(),
        };
        assert!(err.to_string().contains("parser-dev"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ConvoyError = io_err.into();
        assert!(matches!(err, ConvoyError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(ConvoyError::WorkflowNotFound {
                workflow_id: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
