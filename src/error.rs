//! Error types and handling for microk8s-status
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Two of the conditions a caller might expect here are deliberately *not*
//! errors: an unknown `--addon` name resolves to an empty candidate set and
//! is reported as `disabled`, and a not-ready cluster yields an empty
//! classification rather than a failure.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for status operations
#[derive(Error, Diagnostic, Debug)]
pub enum StatusError {
    // Preflight errors
    #[error("Insufficient permissions to access MicroK8s: cannot read {path}")]
    #[diagnostic(
        code(microk8s_status::preflight::insufficient_permissions),
        help("Try again with sudo, or add your user to the 'microk8s' group")
    )]
    InsufficientPermissions { path: String },

    #[error("This node is part of a cluster and its state is managed elsewhere")]
    #[diagnostic(
        code(microk8s_status::preflight::cluster_locked),
        help("Query add-on status from the control plane node instead")
    )]
    ClusterLocked,

    // Catalog errors
    #[error("Add-on catalog not found: {path}")]
    #[diagnostic(
        code(microk8s_status::catalog::not_found),
        help("Check that the snap installation is intact and SNAP points at it")
    )]
    CatalogNotFound { path: String },

    #[error("Failed to read add-on catalog {path}: {reason}")]
    #[diagnostic(code(microk8s_status::catalog::read_failed))]
    CatalogReadFailed { path: String, reason: String },

    #[error("Failed to parse add-on catalog {path}: {reason}")]
    #[diagnostic(code(microk8s_status::catalog::parse_failed))]
    CatalogParseFailed { path: String, reason: String },

    // Cluster query errors
    #[error("Failed to launch kubectl at {program}: {reason}")]
    #[diagnostic(
        code(microk8s_status::kubectl::spawn_failed),
        help("Check that the snap installation is intact and SNAP points at it")
    )]
    KubectlSpawnFailed { program: String, reason: String },

    #[error("kubectl {args} failed: {stderr}")]
    #[diagnostic(code(microk8s_status::kubectl::command_failed))]
    KubectlFailed { args: String, stderr: String },

    // Output errors
    #[error("Failed to render YAML output: {reason}")]
    #[diagnostic(code(microk8s_status::output::yaml_failed))]
    YamlRenderFailed { reason: String },
}

/// Result type alias using StatusError
pub type Result<T> = std::result::Result<T, StatusError>;
