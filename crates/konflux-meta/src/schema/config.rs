//! Root config schema - loaded from `konflux.yaml`
//!
//! # Example YAML
//!
//! ```yaml
//! versions:
//!   - "1.15"
//!   - "1.16"
//!   - next
//! applications:
//!   - openshift-pipelines
//!   - openshift-pipelines-operator
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A release version label.
///
/// `next` is the sentinel for the unreleased mainline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Version {
    label: String,
}

impl Version {
    /// Label of the unreleased mainline version.
    pub const NEXT: &'static str = "next";

    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether this is the unreleased mainline.
    pub fn is_next(&self) -> bool {
        self.label == Self::NEXT
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl From<&str> for Version {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

/// Root configuration: which versions to release and which applications
/// each version contains.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Versions in release order
    #[serde(default)]
    pub versions: Vec<Version>,
    /// Application names, each resolved once per version
    #[serde(default)]
    pub applications: Vec<String>,
}
