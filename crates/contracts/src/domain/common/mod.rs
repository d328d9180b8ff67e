//! Common types and traits for all backend resources

pub mod directory;
pub mod resource;

pub use directory::{entry_cell, DirectoryKind};
pub use resource::{lookup_name, name_lookup, NameLookup, Resource};

/// Numeric identifier assigned by the backend.
pub type EntityId = i64;
