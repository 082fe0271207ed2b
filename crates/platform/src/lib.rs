//! Type-indexed factory registry and extension platform.
//!
//! The [`Platform`] owns a [`TypeRegistry`] that maps `(entity kind, type identifier)` to a
//! [`Factory`]. Extensions contribute factories through [`ExtensionRecord`]s; the engine asks
//! the platform to build runtime objects, behaviors and behavior shared data from serialized
//! descriptors by type identifier.
//!
//! ```
//! use gantry_platform::{EntityKind, Platform, RuntimeObject, RuntimeScene};
//! use gantry_descriptor::SerializerElement;
//!
//! let platform = Platform::get();
//! let scene = RuntimeScene::new("Level 1");
//! let mut hero = SerializerElement::new();
//! hero.set_attribute("name", "Hero").set_attribute("type", "Sprite");
//!
//! let object = platform.instantiate_object(&scene, &hero).unwrap();
//! assert_eq!(object.object_name(), "Hero");
//! assert!(platform.registry().contains(EntityKind::Object, "Sprite"));
//! ```

pub mod builtins;
pub mod config;
pub mod core;
pub mod entity;
pub mod error;
pub mod extension;
pub mod factory;
mod platform;

#[cfg(test)]
mod test_fixtures;

pub use config::{ConfigError, PlatformConfig};
pub use crate::core::{InsertAction, RegistrySource, TypeRegistry};
pub use entity::{BehaviorsSharedData, EntityKind, RuntimeBehavior, RuntimeInstance, RuntimeObject, RuntimeScene};
pub use error::{CreateError, Result};
pub use extension::{
	BuiltinContext, BuiltinExtensionDef, EXTENSION_ENTRY_SYMBOL, ExtensionEntryFn, ExtensionRecord, IngestReport,
	ingest,
};
pub use factory::{BehaviorFactory, Factory, FactoryError, FactoryResult, ObjectFactory, SharedDataFactory};
pub use platform::Platform;
