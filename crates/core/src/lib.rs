//! Core domain types for the job environment assembly subsystem
//!
//! This crate contains the resource and file-category vocabulary, the
//! well-known tokens of the on-disk job layout, the pure path-resolution
//! functions and the Tag entity shared across bounded contexts.

pub mod constants;
pub mod error;
pub mod paths;
pub mod resource;
pub mod tag;

pub use crate::error::EnvironmentError;
pub use crate::paths::{
    file_name, resolve_local_file_path, resource_config_dir, resource_dependencies_dir,
    resource_instance_dir,
};
pub use crate::resource::{FileCategory, ResourceKind};
pub use crate::tag::Tag;

/// Result type used across the assembly crates
pub type Result<T> = std::result::Result<T, EnvironmentError>;
