//! Format-aware typed resource loading

use std::fmt;

use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, NormalizedPath, Result, io};

/// Serialization format of a resource file, chosen by extension.
///
/// A config tree uses one format throughout: the root file's extension
/// decides how `applications/` and `repos/` are named and parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceFormat {
    Yaml,
    Json,
    Toml,
}

impl ResourceFormat {
    pub fn from_path(path: &NormalizedPath) -> Result<Self> {
        let extension = path.extension().unwrap_or("").to_lowercase();
        match extension.as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => Err(Error::UnsupportedFormat { extension }),
        }
    }

    fn parse<T: DeserializeOwned>(self, content: &str) -> std::result::Result<T, String> {
        match self {
            Self::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Self::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

impl fmt::Display for ResourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Yaml => "YAML",
            Self::Json => "JSON",
            Self::Toml => "TOML",
        })
    }
}

/// Reads typed resources and writes generated YAML.
///
/// Strictness is a property of the target type: schemas that should reject
/// unknown keys declare `#[serde(deny_unknown_fields)]`, and the store
/// reports the rejection as [`Error::ConfigParse`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ResourceStore;

impl ResourceStore {
    pub fn new() -> Self {
        Self
    }

    /// Load a resource, parsing it as YAML (`.yaml`, `.yml`), JSON or TOML.
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        let format = ResourceFormat::from_path(path)?;
        let content = io::read_text(path)?;
        tracing::debug!(%path, %format, "Loading resource");

        format.parse(&content).map_err(|message| Error::ConfigParse {
            path: path.to_native(),
            format: format.to_string(),
            message,
        })
    }

    /// Serialize `value` as YAML and write it atomically.
    pub fn save_yaml<T: Serialize>(&self, path: &NormalizedPath, value: &T) -> Result<()> {
        let content = serde_yaml::to_string(value).map_err(|e| Error::ConfigSerialize {
            path: path.to_native(),
            format: ResourceFormat::Yaml.to_string(),
            message: e.to_string(),
        })?;
        io::write_atomic(path, content.as_bytes())
    }
}
