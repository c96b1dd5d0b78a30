//! Repository schema - loaded from `repos/{name}.yaml`
//!
//! # Example YAML
//!
//! ```yaml
//! name: pipeline
//! tekton:
//!   watched-sources: '"upstream/***".pathChanged()'
//! components:
//!   - name: pipelines-controller
//!   - name: pipelines-webhook
//!     dockerfile: .konflux/dockerfiles/webhook.Dockerfile
//! ```
//!
//! `url`, `branch` and `application` are derived during resolution and
//! cannot be set in the file.

use serde::{Deserialize, Serialize};

use super::application::ApplicationRef;
use super::component::Component;

/// A source repository and the components built from it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct Repository {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default)]
    pub tekton: Tekton,

    #[serde(skip_deserializing)]
    pub url: String,
    #[serde(skip_deserializing)]
    pub branch: Branch,
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub application: Option<ApplicationRef>,
}

/// Branch a version is built from and the upstream branch it tracks.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Branch {
    pub name: String,
    pub upstream_branch: String,
}

/// Pipelines-as-Code settings for the repository's build pipelines.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct Tekton {
    /// CEL expression selecting which changed paths trigger a build
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub watched_sources: String,
    /// Number of pipeline runs to retain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_keep_runs: Option<u32>,
}

impl Tekton {
    /// True when no field has been set.
    pub fn is_unset(&self) -> bool {
        *self == Self::default()
    }
}
