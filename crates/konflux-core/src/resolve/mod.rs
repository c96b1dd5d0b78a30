//! Hierarchical resolution of the release configuration
//!
//! Each layer loads its raw record and derives the fields that depend on
//! ancestor context. Nothing is cached between (version, application)
//! pairs: an application released for two versions is resolved twice.

mod application;
mod config;
mod repository;

pub use application::ApplicationResolver;
pub use config::ConfigResolver;
pub use repository::{DEFAULT_WATCHED_SOURCES, RepositoryResolver, branch_for, repository_url};
