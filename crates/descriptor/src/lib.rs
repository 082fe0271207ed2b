//! Serialized entity descriptors.
//!
//! A [`SerializerElement`] is the engine-agnostic, tree-shaped form of one entity's persisted
//! configuration. Factories read it through typed attribute getters with a default-on-missing
//! policy; the tree round-trips through JSON and XML.

mod element;
mod error;
mod json;
mod value;
mod xml;

pub use element::SerializerElement;
pub use error::{DescriptorError, Result};
pub use json::JSON_VALUE_KEY;
pub use value::SerializerValue;
