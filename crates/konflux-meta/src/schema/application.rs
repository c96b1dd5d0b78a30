//! Application schema - raw record from `applications/{name}.yaml` and the
//! resolved per-version application.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::component::Component;
use super::config::Version;
use super::repository::Repository;

/// Raw application record: the repositories that make up the application.
///
/// # Example YAML
///
/// ```yaml
/// repositories:
///   - pipeline
///   - triggers
///   - cli
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApplicationConfig {
    /// Repository names in declaration order; duplicates are allowed
    #[serde(default)]
    pub repositories: Vec<String>,
}

/// An application resolved for one version.
///
/// Built fresh for every (version, application) pair. `components` is the
/// concatenation of every repository's components in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Application {
    pub name: String,
    pub version: Arc<Version>,
    pub components: Vec<Component>,
    pub repositories: Vec<Repository>,
}

impl Application {
    /// Create an empty application bound to `version`.
    pub fn new(name: impl Into<String>, version: Arc<Version>) -> Self {
        Self {
            name: name.into(),
            version,
            components: Vec::new(),
            repositories: Vec::new(),
        }
    }

    /// Immutable identifier of this application, stored on its repositories.
    pub fn snapshot(&self) -> ApplicationRef {
        ApplicationRef {
            name: self.name.clone(),
            version: Arc::clone(&self.version),
        }
    }
}

/// Parent identifier stored on a resolved [`Repository`].
///
/// Captured when the repository is resolved; it does not follow later
/// changes to the [`Application`] it was taken from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationRef {
    pub name: String,
    pub version: Arc<Version>,
}
