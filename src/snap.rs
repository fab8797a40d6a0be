//! Snap installation layout
//!
//! Every external artifact this tool touches lives under one of the three
//! standard snap directories. They are resolved once from the environment
//! and passed down explicitly, which keeps the core logic testable against
//! a fabricated layout.

use std::path::PathBuf;

/// Default install directory when `SNAP` is unset
const DEFAULT_SNAP: &str = "/snap/microk8s/current";
/// Default mutable data directory when `SNAP_DATA` is unset
const DEFAULT_SNAP_DATA: &str = "/var/snap/microk8s/current";

/// Resolved snap directory layout
#[derive(Debug, Clone)]
pub struct SnapPaths {
    /// Install directory: kubectl binary, add-on catalog
    pub snap: PathBuf,
    /// Versioned data directory: credentials, lock files
    pub snap_data: PathBuf,
}

impl SnapPaths {
    /// Resolve the layout from `SNAP` / `SNAP_DATA`, with standard defaults
    pub fn from_env() -> Self {
        SnapPaths {
            snap: std::env::var_os("SNAP")
                .map_or_else(|| PathBuf::from(DEFAULT_SNAP), PathBuf::from),
            snap_data: std::env::var_os("SNAP_DATA")
                .map_or_else(|| PathBuf::from(DEFAULT_SNAP_DATA), PathBuf::from),
        }
    }

    /// Path to the kubectl binary shipped with the snap
    pub fn kubectl(&self) -> PathBuf {
        self.snap.join("kubectl")
    }

    /// Path to the client kubeconfig; readability doubles as the permission gate
    pub fn client_config(&self) -> PathBuf {
        self.snap_data.join("credentials/client.config")
    }

    /// Path to the add-on catalog
    pub fn addons_catalog(&self) -> PathBuf {
        self.snap.join("addons.yaml")
    }

    /// Lock file present while this node is joined to a cluster
    pub fn clustered_lock(&self) -> PathBuf {
        self.snap_data.join("var/lock/clustered.lock")
    }
}
