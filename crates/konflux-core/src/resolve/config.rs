//! Top-level driver: every version crossed with every application

use std::sync::Arc;

use konflux_fs::NormalizedPath;
use konflux_meta::Config;

use crate::defaults::{ComponentDefaulter, StandardDefaulter};
use crate::generator::{ConfigGenerator, ManifestWriter};
use crate::loader::{FsResourceLoader, ResourceKind, ResourceLoader};
use crate::resolve::ApplicationResolver;
use crate::settings::Settings;
use crate::Result;

/// Resolves every (version, application) pair and feeds the results to a
/// generator.
///
/// The run stops at the first error; the generator never sees a partially
/// resolved application.
pub struct ConfigResolver<L, D, G> {
    loader: L,
    defaulter: D,
    generator: G,
    org: String,
    root_name: String,
}

impl ConfigResolver<FsResourceLoader, StandardDefaulter, ManifestWriter> {
    /// Resolver reading from and writing to the locations in `settings`.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings,
            FsResourceLoader::new(&settings.config_file),
            StandardDefaulter::new(&settings.org),
            ManifestWriter::new(NormalizedPath::new(&settings.output_dir), settings.dry_run),
        )
    }
}

impl<L, D, G> ConfigResolver<L, D, G>
where
    L: ResourceLoader,
    D: ComponentDefaulter,
    G: ConfigGenerator,
{
    pub fn new(settings: &Settings, loader: L, defaulter: D, generator: G) -> Self {
        Self {
            loader,
            defaulter,
            generator,
            org: settings.org.clone(),
            root_name: settings.root_name(),
        }
    }

    /// Load the root config and generate every application for every
    /// version, in declaration order.
    pub fn run(&mut self) -> Result<()> {
        let config: Config = self.loader.load(ResourceKind::Config, &self.root_name)?;
        tracing::debug!(
            versions = config.versions.len(),
            applications = config.applications.len(),
            "Loaded config"
        );

        let resolver = ApplicationResolver::new(&self.loader, &self.defaulter, &self.org);
        for version in config.versions {
            let version = Arc::new(version);
            for name in &config.applications {
                tracing::info!(%version, application = %name, "Resolving application");
                let application = resolver.resolve(name, Arc::clone(&version))?;
                tracing::info!(application = %application.name, "Loaded application");
                self.generator.generate(&application)?;
            }
        }

        tracing::info!("Done");
        Ok(())
    }
}
