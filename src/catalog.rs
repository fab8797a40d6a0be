//! Add-on catalog loading (addons.yaml)
//!
//! The catalog enumerates the add-ons known to this build of the snap,
//! together with the detection signature used to infer their enabled state.
//! Entries are filtered to the current machine architecture at load time;
//! the resulting descriptors are immutable for the rest of the run.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, StatusError};
use crate::matcher::DetectionSignature;

/// One known add-on, as loaded from the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddonDescriptor {
    /// Unique, stable identifier
    pub name: String,
    /// Human description
    pub description: String,
    /// Free-form version string
    pub version: String,
    /// Ordered detection candidates derived from `check_status`
    pub signatures: Vec<DetectionSignature>,
}

/// Raw catalog file layout (`microk8s-addons:` document)
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(rename = "microk8s-addons")]
    root: CatalogRoot,
}

#[derive(Debug, Deserialize)]
struct CatalogRoot {
    addons: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    name: String,
    description: String,
    version: String,
    check_status: String,
    /// Empty or absent means the add-on runs everywhere
    #[serde(default)]
    supported_architectures: Vec<String>,
}

impl CatalogEntry {
    fn supports(&self, arch: &str) -> bool {
        self.supported_architectures.is_empty()
            || self.supported_architectures.iter().any(|a| a == arch)
    }

    fn into_descriptor(self) -> AddonDescriptor {
        AddonDescriptor {
            signatures: DetectionSignature::candidates(&self.check_status),
            name: self.name,
            description: self.description,
            version: self.version,
        }
    }
}

/// Catalog architecture label for the running machine
pub fn current_arch() -> &'static str {
    match std::env::consts::ARCH {
        "x86_64" => "amd64",
        "aarch64" => "arm64",
        other => other,
    }
}

/// Load the add-ons available for `arch`, preserving catalog order
pub fn list_available(path: &Path, arch: &str) -> Result<Vec<AddonDescriptor>> {
    if !path.exists() {
        return Err(StatusError::CatalogNotFound {
            path: path.display().to_string(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| StatusError::CatalogReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    parse_catalog(&content, arch).map_err(|reason| StatusError::CatalogParseFailed {
        path: path.display().to_string(),
        reason,
    })
}

fn parse_catalog(
    content: &str,
    arch: &str,
) -> std::result::Result<Vec<AddonDescriptor>, String> {
    let file: CatalogFile = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
    Ok(file
        .root
        .addons
        .into_iter()
        .filter(|entry| entry.supports(arch))
        .map(CatalogEntry::into_descriptor)
        .collect())
}

/// Restrict the catalog to the add-on with the given name.
///
/// Zero matches is a valid outcome: an unknown name is indistinguishable
/// from an absent add-on, and downstream reports it as disabled.
pub fn filter_by_name(addons: Vec<AddonDescriptor>, name: &str) -> Vec<AddonDescriptor> {
    addons.into_iter().filter(|a| a.name == name).collect()
}
