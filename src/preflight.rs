//! Preflight gates run before any readiness or classification work
//!
//! Both checks abort the whole run: the tool must never emit a partial
//! report when the caller cannot query the cluster or when another
//! operation owns the node's state.

use std::fs::File;

use crate::error::{Result, StatusError};
use crate::snap::SnapPaths;

/// Verify the invoking identity may query the cluster.
///
/// Readability of the client kubeconfig is the permission gate: root and
/// members of the snap's group can open it, everyone else cannot.
pub fn ensure_permissions(paths: &SnapPaths) -> Result<()> {
    let config = paths.client_config();
    File::open(&config).map_err(|_| StatusError::InsufficientPermissions {
        path: config.display().to_string(),
    })?;
    Ok(())
}

/// Refuse to run while a cluster join holds the node's state.
pub fn ensure_not_locked(paths: &SnapPaths) -> Result<()> {
    if paths.clustered_lock().exists() {
        return Err(StatusError::ClusterLocked);
    }
    Ok(())
}
