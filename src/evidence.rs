//! Cluster evidence collection via kubectl
//!
//! The resolver never talks to the cluster directly; it consumes a single
//! text corpus produced here. The corpus is the concatenation of the
//! all-resources listing and the cluster role listing, built fresh for each
//! resolution pass and discarded afterwards.

use std::process::Command;

use crate::error::{Result, StatusError};
use crate::snap::SnapPaths;

/// Line-oriented snapshot of live cluster state
///
/// Lines are the unit of matching: a resource signature is evaluated
/// line-by-line, never against the blob as a whole.
#[derive(Debug)]
pub struct EvidenceCorpus(String);

impl EvidenceCorpus {
    pub fn new(raw: String) -> Self {
        EvidenceCorpus(raw)
    }

    /// Iterate over evidence lines
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.lines()
    }
}

/// Producer of the evidence corpus
///
/// Implemented by [`Kubectl`] in production and by synthetic sources in
/// tests; the resolver is generic over this trait so classification can be
/// exercised without a cluster.
pub trait EvidenceSource {
    fn collect(&self) -> Result<EvidenceCorpus>;
}

/// kubectl invocation wrapper
///
/// Executes the kubectl shipped with the snap against the client kubeconfig
/// and returns stdout. A non-zero exit or spawn failure is fatal; there is
/// no retry.
#[derive(Debug, Clone)]
pub struct Kubectl {
    program: std::path::PathBuf,
    kubeconfig: std::path::PathBuf,
}

impl Kubectl {
    pub fn new(paths: &SnapPaths) -> Self {
        Kubectl {
            program: paths.kubectl(),
            kubeconfig: paths.client_config(),
        }
    }

    /// Execute a kubectl subcommand and return stdout
    fn exec(&self, args: &[&str]) -> Result<String> {
        let output = Command::new(&self.program)
            .arg(format!("--kubeconfig={}", self.kubeconfig.display()))
            .args(args)
            .output()
            .map_err(|e| StatusError::KubectlSpawnFailed {
                program: self.program.display().to_string(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(StatusError::KubectlFailed {
                args: args.join(" "),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    /// List all resources across namespaces
    pub fn get_all(&self) -> Result<String> {
        self.exec(&["get", "all", "--all-namespaces"])
    }

    /// List nodes (readiness evidence)
    pub fn get_nodes(&self) -> Result<String> {
        self.exec(&["get", "nodes"])
    }

    /// List cluster roles with kind prefixes, no header row
    pub fn get_clusterroles(&self) -> Result<String> {
        self.exec(&["get", "clusterroles", "--show-kind", "--no-headers"])
    }
}

impl EvidenceSource for Kubectl {
    /// One combined corpus per resolution pass: general resources first,
    /// then cluster roles.
    fn collect(&self) -> Result<EvidenceCorpus> {
        let mut corpus = self.get_all()?;
        if !corpus.ends_with('\n') && !corpus.is_empty() {
            corpus.push('\n');
        }
        corpus.push_str(&self.get_clusterroles()?);
        Ok(EvidenceCorpus::new(corpus))
    }
}
