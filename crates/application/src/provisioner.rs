//! Working-directory provisioning for job resources
//!
//! Creates the per-resource directory subtree inside a job working
//! directory. Creation is recursive and succeeds when the directory already
//! exists, so preparing the same resource instance twice, or concurrently,
//! is safe.

use std::path::{Path, PathBuf};

use prometheus::Registry;
use tracing::debug;

use genie_core::paths;
use genie_core::resource::ResourceKind;
use genie_core::{EnvironmentError, Result};

/// Creates the on-disk directory structure for a resource instance.
#[derive(Clone)]
pub struct DirectoryProvisioner {
    registry: Registry,
}

impl DirectoryProvisioner {
    /// Create a provisioner holding the injected metrics registry handle.
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    /// Metrics registry handle shared with sibling components.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Ensure `{workingDir}/genie/{kindSegment}/{id}` exists and return it.
    ///
    /// # Errors
    /// Returns `EnvironmentError::Validation` on blank inputs and
    /// `EnvironmentError::Provisioning` when the filesystem refuses the
    /// creation. The latter is fatal for the current job preparation.
    pub async fn ensure_instance_dir(
        &self,
        working_dir: &str,
        id: &str,
        kind: ResourceKind,
    ) -> Result<PathBuf> {
        let dir = paths::resource_instance_dir(working_dir, id, kind)?;
        self.create_directory(&dir).await?;
        Ok(dir)
    }

    /// Ensure the config directory of a resource instance exists and return it.
    pub async fn ensure_config_dir(
        &self,
        working_dir: &str,
        id: &str,
        kind: ResourceKind,
    ) -> Result<PathBuf> {
        let dir = paths::resource_config_dir(working_dir, id, kind)?;
        self.create_directory(&dir).await?;
        Ok(dir)
    }

    /// Ensure the dependencies directory of a resource instance exists and
    /// return it.
    pub async fn ensure_dependencies_dir(
        &self,
        working_dir: &str,
        id: &str,
        kind: ResourceKind,
    ) -> Result<PathBuf> {
        let dir = paths::resource_dependencies_dir(working_dir, id, kind)?;
        self.create_directory(&dir).await?;
        Ok(dir)
    }

    async fn create_directory(&self, dir: &Path) -> Result<()> {
        debug!(path = %dir.display(), "Creating resource directory");

        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|source| EnvironmentError::Provisioning {
                path: dir.to_path_buf(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn provisioner() -> DirectoryProvisioner {
        DirectoryProvisioner::new(Registry::new())
    }

    #[tokio::test]
    async fn test_instance_dir_chain_is_created() {
        let tmp = TempDir::new().unwrap();
        let working_dir = tmp.path().to_str().unwrap().to_string();

        let dir = provisioner()
            .ensure_instance_dir(&working_dir, "123", ResourceKind::Command)
            .await
            .unwrap();

        assert_eq!(dir, tmp.path().join("genie/command/123"));
        assert!(dir.is_dir());
    }

    #[tokio::test]
    async fn test_config_dir_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let working_dir = tmp.path().to_str().unwrap().to_string();
        let provisioner = provisioner();

        let first = provisioner
            .ensure_config_dir(&working_dir, "123", ResourceKind::Cluster)
            .await
            .unwrap();
        let second = provisioner
            .ensure_config_dir(&working_dir, "123", ResourceKind::Cluster)
            .await
            .unwrap();

        assert_eq!(first, second);
        assert!(first.is_dir());
    }

    #[tokio::test]
    async fn test_concurrent_creation_of_the_same_instance_is_safe() {
        let tmp = TempDir::new().unwrap();
        let working_dir = tmp.path().to_str().unwrap().to_string();
        let provisioner = provisioner();

        let (first, second) = tokio::join!(
            provisioner.ensure_dependencies_dir(&working_dir, "shared", ResourceKind::Application),
            provisioner.ensure_dependencies_dir(&working_dir, "shared", ResourceKind::Application),
        );

        assert_eq!(first.unwrap(), second.unwrap());
    }

    #[tokio::test]
    async fn test_collision_with_regular_file_is_a_provisioning_error() {
        let tmp = TempDir::new().unwrap();
        let working_dir = tmp.path().to_str().unwrap().to_string();

        let parent = tmp.path().join("genie/cluster");
        tokio::fs::create_dir_all(&parent).await.unwrap();
        tokio::fs::write(parent.join("77"), b"not a directory")
            .await
            .unwrap();

        let err = provisioner()
            .ensure_instance_dir(&working_dir, "77", ResourceKind::Cluster)
            .await
            .unwrap_err();

        match err {
            EnvironmentError::Provisioning { path, .. } => {
                assert_eq!(path, tmp.path().join("genie/cluster/77"));
            }
            other => panic!("expected provisioning error, got {other}"),
        }
    }

    #[tokio::test]
    async fn test_blank_id_is_rejected_before_touching_the_filesystem() {
        let tmp = TempDir::new().unwrap();
        let working_dir = tmp.path().to_str().unwrap().to_string();

        let err = provisioner()
            .ensure_instance_dir(&working_dir, "  ", ResourceKind::Command)
            .await
            .unwrap_err();

        assert!(matches!(err, EnvironmentError::Validation(_)));
        assert!(!tmp.path().join("genie").exists());
    }
}
