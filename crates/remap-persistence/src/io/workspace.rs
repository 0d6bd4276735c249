//! Workspace document load/save.

use std::fs;
use std::path::Path;

use crate::error::{PersistenceError, Result};
use crate::io::atomic::write_atomic;
use crate::types::{CURRENT_SCHEMA_VERSION, WorkspaceDocument};

/// Load a workspace document.
pub fn load_workspace(path: &Path) -> Result<WorkspaceDocument> {
    let bytes = fs::read(path).map_err(|e| PersistenceError::io("read", path, e))?;
    let document: WorkspaceDocument =
        serde_json::from_slice(&bytes).map_err(|source| PersistenceError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    if document.version > CURRENT_SCHEMA_VERSION {
        return Err(PersistenceError::UnsupportedVersion {
            found: document.version,
            max_supported: CURRENT_SCHEMA_VERSION,
            path: path.to_path_buf(),
        });
    }

    tracing::debug!(
        path = %path.display(),
        rules = document.rules.len(),
        objects = document.scene.objects.len(),
        "loaded workspace"
    );
    Ok(document)
}

/// Save a workspace document atomically.
pub fn save_workspace(document: &WorkspaceDocument, path: &Path) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(document)
        .map_err(|source| PersistenceError::Serialization { source })?;
    write_atomic(path, &bytes)?;
    tracing::debug!(path = %path.display(), "saved workspace");
    Ok(())
}
