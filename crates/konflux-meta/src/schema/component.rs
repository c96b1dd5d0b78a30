//! Component schema - declared inline in a repository file
//!
//! # Example YAML
//!
//! ```yaml
//! name: pipelines-controller
//! dockerfile: .konflux/dockerfiles/controller.Dockerfile
//! image-prefix: pipelines-
//! nudges:
//!   - operator-bundle
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::config::Version;

/// A buildable component.
///
/// Authored fields are optional except `name`; empty values are filled in
/// when the owning repository is resolved. Inherited fields are skipped on
/// deserialization.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct Component {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub dockerfile: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image_prefix: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image_suffix: String,
    /// Components whose references are bumped when this image changes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nudges: Vec<String>,

    #[serde(skip_deserializing, skip_serializing_if = "String::is_empty")]
    pub application: String,
    #[serde(skip_deserializing, skip_serializing_if = "String::is_empty")]
    pub repository: String,
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub version: Option<Arc<Version>>,
    #[serde(skip_deserializing, skip_serializing_if = "String::is_empty")]
    pub branch: String,
    #[serde(skip_deserializing, skip_serializing_if = "String::is_empty")]
    pub image: String,
}

impl Component {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}
