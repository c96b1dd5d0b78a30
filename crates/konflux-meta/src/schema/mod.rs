//! Schema definitions for the release configuration
//!
//! Resources live under a single config directory:
//!
//! ```text
//! config/
//!   konflux.yaml            # Config
//!   applications/
//!     openshift-pipelines.yaml  # ApplicationConfig
//!   repos/
//!     pipeline.yaml         # Repository (with its components)
//! ```

pub mod application;
pub mod component;
pub mod config;
pub mod repository;

pub use application::{Application, ApplicationConfig, ApplicationRef};
pub use component::Component;
pub use config::{Config, Version};
pub use repository::{Branch, Repository, Tekton};
