//! Repository resolution: url, branch and Tekton defaults

use konflux_meta::{Application, Branch, Repository, Tekton, Version};

use crate::defaults::ComponentDefaulter;
use crate::loader::{ResourceKind, ResourceLoader};
use crate::Result;

/// Branch every release branch is cut from.
const UPSTREAM_BRANCH: &str = "main";

/// CEL expression used when a repository declares no Tekton settings.
pub const DEFAULT_WATCHED_SOURCES: &str = r#""upstream/***".pathChanged() || ".konflux/patches/***".pathChanged() || ".konflux/rpms/***".pathChanged()"#;

/// Clone URL of a repository in `org`.
pub fn repository_url(org: &str, name: &str) -> String {
    format!("https://github.com/{org}/{name}.git")
}

/// Branch a version is built from.
///
/// `next` builds from `main`; released versions build from
/// `release-v{version}.x`.
pub fn branch_for(version: &Version) -> Branch {
    let name = if version.is_next() {
        UPSTREAM_BRANCH.to_string()
    } else {
        format!("release-v{}.x", version.label())
    };
    Branch {
        name,
        upstream_branch: UPSTREAM_BRANCH.to_string(),
    }
}

/// Fill in Tekton settings, but only for a record with no field set.
///
/// A record with any field set is kept exactly as authored.
fn default_tekton(tekton: &mut Tekton) {
    if tekton.is_unset() {
        tekton.watched_sources = DEFAULT_WATCHED_SOURCES.to_string();
    }
}

/// Loads a repository record and derives its fields from the application.
pub struct RepositoryResolver<'a, L> {
    loader: &'a L,
    defaulter: &'a dyn ComponentDefaulter,
    org: &'a str,
}

impl<'a, L: ResourceLoader> RepositoryResolver<'a, L> {
    pub fn new(loader: &'a L, defaulter: &'a dyn ComponentDefaulter, org: &'a str) -> Self {
        Self {
            loader,
            defaulter,
            org,
        }
    }

    /// Resolve repository `name` in the context of `application`.
    ///
    /// Components are defaulted in declaration order; the first failure
    /// aborts and leaves the remaining components untouched.
    pub fn resolve(&self, name: &str, application: &Application) -> Result<Repository> {
        let mut repository: Repository = self.loader.load(ResourceKind::Repository, name)?;

        if repository.name.is_empty() {
            repository.name = name.to_string();
        } else if repository.name != name {
            tracing::warn!(
                repository = name,
                declared = %repository.name,
                "Repository file declares a different name, using the referenced one"
            );
            repository.name = name.to_string();
        }

        repository.application = Some(application.snapshot());
        repository.url = repository_url(self.org, name);
        repository.branch = branch_for(&application.version);
        default_tekton(&mut repository.tekton);

        let mut components = std::mem::take(&mut repository.components);
        for component in &mut components {
            self.defaulter.apply(component, &repository, application)?;
        }
        repository.components = components;

        Ok(repository)
    }
}
