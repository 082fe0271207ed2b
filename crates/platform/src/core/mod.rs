//! Shared registry infrastructure.

pub mod source;
pub mod table;

pub use source::{InsertAction, RegistrySource};
pub use table::TypeRegistry;
