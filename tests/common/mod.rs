//! Common test utilities for microk8s-status integration tests
//!
//! Fabricates a snap layout inside a temp directory: add-on catalog,
//! client credentials, lock files, and a stub kubectl script whose
//! responses are plain files next to it. Unix-only (the stub is a shell
//! script).

#![cfg(unix)]

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Catalog used by most tests; entries without `supported_architectures`
/// are available on every build host.
pub const DEFAULT_CATALOG: &str = r#"
microk8s-addons:
  addons:
    - name: dns
      description: "CoreDNS"
      version: "1.8.0"
      check_status: "coredns"
    - name: storage
      description: "Storage class; allocates storage from host directory"
      version: "1.0.0"
      check_status: "$SNAP_COMMON/var/lock/storage.lock"
    - name: registry
      description: "Private image registry"
      version: "2.6"
      check_status: "registry-0"
    - name: exotic
      description: "Never available on test hosts"
      version: "0.1"
      check_status: "exotic-marker"
      supported_architectures:
        - riscv999
"#;

pub const READY_NODES: &str = "\
NAME     STATUS   ROLES    AGE   VERSION
node-1   Ready    <none>   10d   v1.21.1
";

pub const NOT_READY_NODES: &str = "\
NAME     STATUS     ROLES    AGE   VERSION
node-1   NotReady   <none>   10d   v1.21.1
";

pub const READY_RESOURCES: &str = "\
NAMESPACE     NAME                              READY   STATUS    AGE
default       service/kubernetes                                  10d
kube-system   deployment.apps/coredns           1/1     Running   10d
";

pub const CLUSTER_ROLES: &str = "\
clusterrole.rbac.authorization.k8s.io/admin                  10d
clusterrole.rbac.authorization.k8s.io/cluster-admin          10d
";

/// A fake snap installation for driving the binary end-to-end
pub struct TestSnap {
    #[allow(dead_code)]
    temp: TempDir,
    pub snap: PathBuf,
    pub snap_data: PathBuf,
    pub snap_common: PathBuf,
}

impl TestSnap {
    /// Ready cluster with the default catalog and readable credentials
    pub fn ready() -> Self {
        let snap = TestSnap::bare();
        snap.write_catalog(DEFAULT_CATALOG);
        snap.write_kubectl_responses(READY_NODES, READY_RESOURCES, CLUSTER_ROLES);
        snap
    }

    /// Same layout, but the node never reports Ready
    pub fn not_ready() -> Self {
        let snap = TestSnap::bare();
        snap.write_catalog(DEFAULT_CATALOG);
        snap.write_kubectl_responses(NOT_READY_NODES, READY_RESOURCES, CLUSTER_ROLES);
        snap
    }

    /// Directory skeleton with credentials but no catalog or kubectl stub
    pub fn bare() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path();
        let snap = TestSnap {
            snap: root.join("snap"),
            snap_data: root.join("snap-data"),
            snap_common: root.join("snap-common"),
            temp,
        };
        for dir in [&snap.snap, &snap.snap_data, &snap.snap_common] {
            std::fs::create_dir_all(dir).expect("Failed to create snap directory");
        }
        snap.write_credentials();
        snap
    }

    pub fn write_credentials(&self) {
        let dir = self.snap_data.join("credentials");
        std::fs::create_dir_all(&dir).expect("Failed to create credentials directory");
        std::fs::write(dir.join("client.config"), "apiVersion: v1\n")
            .expect("Failed to write credentials");
    }

    pub fn remove_credentials(&self) {
        std::fs::remove_file(self.snap_data.join("credentials/client.config"))
            .expect("Failed to remove credentials");
    }

    pub fn write_catalog(&self, catalog: &str) {
        std::fs::write(self.snap.join("addons.yaml"), catalog).expect("Failed to write catalog");
    }

    /// Mark the node as joined to a cluster
    pub fn lock_cluster(&self) {
        let dir = self.snap_data.join("var/lock");
        std::fs::create_dir_all(&dir).expect("Failed to create lock directory");
        std::fs::write(dir.join("clustered.lock"), "").expect("Failed to write lock file");
    }

    /// Drop the sentinel file the storage add-on is detected by
    pub fn enable_storage_sentinel(&self) {
        let dir = self.snap_common.join("var/lock");
        std::fs::create_dir_all(&dir).expect("Failed to create sentinel directory");
        std::fs::write(dir.join("storage.lock"), "").expect("Failed to write sentinel");
    }

    /// Install a kubectl stub that serves canned responses per subcommand
    pub fn write_kubectl_responses(&self, nodes: &str, all: &str, clusterroles: &str) {
        let responses = self.snap.join("responses");
        std::fs::create_dir_all(&responses).expect("Failed to create responses directory");
        std::fs::write(responses.join("nodes.txt"), nodes).expect("Failed to write nodes");
        std::fs::write(responses.join("all.txt"), all).expect("Failed to write resources");
        std::fs::write(responses.join("clusterroles.txt"), clusterroles)
            .expect("Failed to write clusterroles");

        self.install_kubectl_script(
            "#!/bin/sh\n\
             # argv: --kubeconfig=... get <what> [flags]\n\
             dir=$(dirname \"$0\")\n\
             shift\n\
             what=\"$2\"\n\
             if [ -f \"$dir/responses/$what.txt\" ]; then\n\
                 cat \"$dir/responses/$what.txt\"\n\
             else\n\
                 echo \"error: unknown resource $what\" >&2\n\
                 exit 1\n\
             fi\n",
        );
    }

    /// Install a kubectl stub that always fails
    pub fn write_failing_kubectl(&self) {
        self.install_kubectl_script(
            "#!/bin/sh\necho 'The connection to the server was refused' >&2\nexit 1\n",
        );
    }

    fn install_kubectl_script(&self, script: &str) {
        use std::os::unix::fs::PermissionsExt;

        let path = self.snap.join("kubectl");
        std::fs::write(&path, script).expect("Failed to write kubectl stub");
        let mut perms = std::fs::metadata(&path)
            .expect("Failed to stat kubectl stub")
            .permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).expect("Failed to chmod kubectl stub");
    }

    /// Command for the binary under test, wired to this snap layout
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("microk8s-status").expect("binary builds");
        cmd.env("SNAP", &self.snap);
        cmd.env("SNAP_DATA", &self.snap_data);
        cmd.env("SNAP_COMMON", &self.snap_common);
        cmd
    }
}
