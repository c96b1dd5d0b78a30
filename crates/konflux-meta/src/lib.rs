//! Schema types for the Konflux release configuration.
//!
//! Raw records (`Config`, `ApplicationConfig`, `Repository`, `Component`)
//! are deserialized strictly from YAML resources. Resolved records carry
//! additional derived fields that are never read from disk.

pub mod error;
pub mod schema;
pub mod validation;

pub use error::{Error, Result};
pub use schema::{
    Application, ApplicationConfig, ApplicationRef, Branch, Component, Config, Repository, Tekton,
    Version,
};
