//! Workflow catalog discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::catalog::schema::WorkflowCatalog;
use crate::error::{ConvoyError, Result};

/// Default catalog file name, looked up in the current directory.
pub const DEFAULT_CATALOG_FILE: &str = "workflows.yml";

/// Resolve the catalog path from an optional CLI override.
pub fn resolve_catalog_path(config: Option<&Path>) -> PathBuf {
    config
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_FILE))
}

/// Load and parse the workflow catalog.
///
/// # Errors
///
/// Returns `CatalogNotFound` if the file doesn't exist.
/// Returns `CatalogParseError` if the YAML is invalid.
pub fn load_catalog(path: &Path) -> Result<WorkflowCatalog> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConvoyError::CatalogNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConvoyError::Io(e)
        }
    })?;

    let catalog = parse_catalog(&content, path)?;
    debug!(
        workflows = catalog.len(),
        agents = catalog.agents.len(),
        "Loaded workflow catalog from {}",
        path.display()
    );
    Ok(catalog)
}

/// Parse YAML content into a catalog.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_catalog(content: &str, source_path: &Path) -> Result<WorkflowCatalog> {
    serde_yaml::from_str(content).map_err(|e| ConvoyError::CatalogParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
