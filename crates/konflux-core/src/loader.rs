//! Typed resource loading
//!
//! Resources are addressed by category and name. The root config file is
//! loaded from exactly the path it was given; the rest of the tree sits
//! beside it and shares its extension:
//!
//! ```text
//! {dir}/konflux.yml
//! {dir}/applications/{name}.yml
//! {dir}/repos/{name}.yml
//! ```

use std::fmt;
use std::path::Path;

use konflux_fs::{NormalizedPath, ResourceStore};
use serde::de::DeserializeOwned;

use crate::{Error, Result};

/// Category of a resource, which determines its directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Config,
    Application,
    Repository,
}

impl ResourceKind {
    /// Directory holding resources of this kind, relative to the config dir.
    pub fn dir(&self) -> &'static str {
        match self {
            Self::Config => "",
            Self::Application => "applications",
            Self::Repository => "repos",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config => write!(f, "config"),
            Self::Application => write!(f, "application"),
            Self::Repository => write!(f, "repository"),
        }
    }
}

/// Loads a named resource into a typed record.
pub trait ResourceLoader {
    fn load<T: DeserializeOwned>(&self, kind: ResourceKind, name: &str) -> Result<T>;
}

/// Loads resources from the tree around a root config file.
#[derive(Debug, Clone)]
pub struct FsResourceLoader {
    config_file: NormalizedPath,
    dir: NormalizedPath,
    extension: String,
    store: ResourceStore,
}

impl FsResourceLoader {
    pub fn new(config_file: impl AsRef<Path>) -> Self {
        let config_file = NormalizedPath::new(config_file);
        let extension = config_file.extension().unwrap_or("yaml").to_string();
        Self {
            dir: config_file.parent(),
            config_file,
            extension,
            store: ResourceStore::new(),
        }
    }

    /// Path of the file backing a resource. The root config is always the
    /// file the loader was created with, whatever name it is asked for.
    pub fn path_for(&self, kind: ResourceKind, name: &str) -> NormalizedPath {
        match kind {
            ResourceKind::Config => self.config_file.clone(),
            _ => self
                .dir
                .join(kind.dir())
                .join(&format!("{name}.{}", self.extension)),
        }
    }
}

impl ResourceLoader for FsResourceLoader {
    fn load<T: DeserializeOwned>(&self, kind: ResourceKind, name: &str) -> Result<T> {
        let path = self.path_for(kind, name);
        tracing::debug!(%kind, name, %path, "Loading resource");

        self.store.load(&path).map_err(|err| match err {
            konflux_fs::Error::NotFound { path } => Error::ResourceNotFound {
                kind,
                name: name.to_string(),
                path,
            },
            konflux_fs::Error::ConfigParse { path, message, .. } => Error::Parse {
                kind,
                name: name.to_string(),
                path,
                message,
            },
            other => Error::Fs(other),
        })
    }
}
