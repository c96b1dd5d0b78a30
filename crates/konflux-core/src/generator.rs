//! Generators consume resolved applications
//!
//! [`ManifestWriter`] writes each resolved application as YAML to
//! `{output}/{version}/{application}.yaml`.

use konflux_fs::{NormalizedPath, ResourceStore};
use konflux_meta::Application;
use konflux_meta::validation::{validate_name, validate_version_label};

use crate::{Error, Result};

/// Receives each fully-resolved application exactly once.
pub trait ConfigGenerator {
    fn generate(&mut self, application: &Application) -> Result<()>;
}

impl<F> ConfigGenerator for F
where
    F: FnMut(&Application) -> Result<()>,
{
    fn generate(&mut self, application: &Application) -> Result<()> {
        self(application)
    }
}

/// Writes resolved applications to the output directory.
#[derive(Debug, Clone)]
pub struct ManifestWriter {
    root: NormalizedPath,
    dry_run: bool,
    store: ResourceStore,
}

impl ManifestWriter {
    pub fn new(root: NormalizedPath, dry_run: bool) -> Self {
        Self {
            root,
            dry_run,
            store: ResourceStore::new(),
        }
    }

    /// Output path for an application. Both segments are validated so the
    /// result always stays inside the output directory.
    pub fn path_for(&self, application: &Application) -> Result<NormalizedPath> {
        let version = application.version.label();
        validate_version_label(version)
            .and_then(|()| validate_name(&application.name))
            .map_err(|source| Error::OutputPath {
                application: application.name.clone(),
                version: version.to_string(),
                source,
            })?;
        Ok(self
            .root
            .join(version)
            .join(&format!("{}.yaml", application.name)))
    }
}

impl ConfigGenerator for ManifestWriter {
    fn generate(&mut self, application: &Application) -> Result<()> {
        let path = self.path_for(application)?;

        if self.dry_run {
            tracing::info!(%path, "[dry-run] Would write application");
            return Ok(());
        }

        self.store
            .save_yaml(&path, application)
            .map_err(|source| Error::Generate {
                application: application.name.clone(),
                version: application.version.to_string(),
                source,
            })?;
        tracing::info!(%path, "Wrote application");
        Ok(())
    }
}
