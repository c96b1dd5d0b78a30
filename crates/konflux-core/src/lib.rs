//! Resolution engine for Konflux release configuration
//!
//! Walks the resource hierarchy and produces one fully-resolved
//! [`Application`](konflux_meta::Application) per (version, application)
//! pair:
//!
//! ```text
//!   ConfigResolver          konflux.yaml, versions x applications
//!        |
//!   ApplicationResolver     applications/{name}.yaml
//!        |
//!   RepositoryResolver      repos/{name}.yaml, url / branch / tekton
//!        |
//!   ComponentDefaulter      per component, inherited fields
//! ```
//!
//! Each resolved application is handed to a [`ConfigGenerator`]. Any error
//! aborts the whole run before the next generator call.
//!
//! # Example
//!
//! ```ignore
//! use konflux_core::{ConfigResolver, Settings};
//!
//! let settings = Settings::default();
//! ConfigResolver::from_settings(&settings).run()?;
//! ```

pub mod defaults;
pub mod error;
pub mod generator;
pub mod loader;
pub mod resolve;
pub mod settings;

pub use defaults::{ComponentDefaulter, StandardDefaulter};
pub use error::{Error, Result};
pub use generator::{ConfigGenerator, ManifestWriter};
pub use loader::{FsResourceLoader, ResourceKind, ResourceLoader};
pub use resolve::{
    ApplicationResolver, ConfigResolver, DEFAULT_WATCHED_SOURCES, RepositoryResolver,
    branch_for, repository_url,
};
pub use settings::Settings;
