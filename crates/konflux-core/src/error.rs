//! Error types for konflux-core

use std::path::PathBuf;

use crate::loader::ResourceKind;

/// Result type for konflux-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving or generating configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A named resource file does not exist at the expected path
    #[error("{kind} '{name}' not found at {path}")]
    ResourceNotFound {
        kind: ResourceKind,
        name: String,
        path: PathBuf,
    },

    /// A resource file exists but does not match its schema
    #[error("Failed to parse {kind} '{name}' at {path}: {message}")]
    Parse {
        kind: ResourceKind,
        name: String,
        path: PathBuf,
        message: String,
    },

    /// The component defaulter rejected a component
    #[error("Failed to default component '{component}' in repository '{repository}': {message}")]
    Defaulting {
        component: String,
        repository: String,
        message: String,
    },

    /// The generator failed to emit output for an application
    #[error("Failed to generate '{application}' for version {version}: {source}")]
    Generate {
        application: String,
        version: String,
        #[source]
        source: konflux_fs::Error,
    },

    /// An application name or version label cannot be used as an output path segment
    #[error("Refusing to write '{application}' for version {version}: {source}")]
    OutputPath {
        application: String,
        version: String,
        #[source]
        source: konflux_meta::Error,
    },

    /// Filesystem error from konflux-fs
    #[error(transparent)]
    Fs(#[from] konflux_fs::Error),
}
