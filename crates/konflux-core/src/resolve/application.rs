//! Application resolution: repositories in order, components flattened

use std::sync::Arc;

use konflux_meta::{Application, ApplicationConfig, Version};

use crate::defaults::ComponentDefaulter;
use crate::loader::{ResourceKind, ResourceLoader};
use crate::resolve::RepositoryResolver;
use crate::Result;

/// Builds an [`Application`] for one version from its application record.
pub struct ApplicationResolver<'a, L> {
    loader: &'a L,
    repositories: RepositoryResolver<'a, L>,
}

impl<'a, L: ResourceLoader> ApplicationResolver<'a, L> {
    pub fn new(loader: &'a L, defaulter: &'a dyn ComponentDefaulter, org: &'a str) -> Self {
        Self {
            loader,
            repositories: RepositoryResolver::new(loader, defaulter, org),
        }
    }

    /// Resolve application `name` for `version`.
    ///
    /// Repositories are resolved in declaration order. Each repository's
    /// components are appended to `components` before the repository itself
    /// is appended to `repositories`; a repository listed twice contributes
    /// its components twice.
    pub fn resolve(&self, name: &str, version: Arc<Version>) -> Result<Application> {
        tracing::info!(application = name, "Reading application");
        let config: ApplicationConfig = self.loader.load(ResourceKind::Application, name)?;

        let mut application = Application::new(name, version);
        for repo_name in &config.repositories {
            let repository = self.repositories.resolve(repo_name, &application)?;
            application
                .components
                .extend(repository.components.iter().cloned());
            tracing::info!(repository = %repository.name, "Loaded repository");
            application.repositories.push(repository);
        }

        Ok(application)
    }
}
