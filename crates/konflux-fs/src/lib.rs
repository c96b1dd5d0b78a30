//! Filesystem layer for the Konflux config resolver
//!
//! Provides normalized path handling, strict typed loading of resource
//! files, and atomic writes for generated output.

pub mod error;
pub mod io;
pub mod path;
pub mod store;

pub use error::{Error, Result};
pub use path::NormalizedPath;
pub use store::{ResourceFormat, ResourceStore};
