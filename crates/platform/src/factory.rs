//! Factory functions turning descriptors into runtime instances.
//!
//! Factories are plain callable values. The registry stores and clones them but never owns the
//! code behind them: when an extension's factories live in a dynamically loaded module, the
//! loader must keep that module alive until the factories are withdrawn
//! (see [`crate::Platform::remove_extension`]).

use std::fmt;
use std::sync::Arc;

use gantry_descriptor::SerializerElement;

use crate::entity::{BehaviorsSharedData, EntityKind, RuntimeBehavior, RuntimeObject, RuntimeScene};

pub type FactoryResult<T> = std::result::Result<T, FactoryError>;

pub type ObjectFactory =
	Arc<dyn Fn(&RuntimeScene, &SerializerElement) -> FactoryResult<Box<dyn RuntimeObject>> + Send + Sync>;
pub type BehaviorFactory = Arc<dyn Fn(&SerializerElement) -> FactoryResult<Box<dyn RuntimeBehavior>> + Send + Sync>;
pub type SharedDataFactory =
	Arc<dyn Fn(&SerializerElement) -> FactoryResult<Box<dyn BehaviorsSharedData>> + Send + Sync>;

/// Errors raised by factory bodies while interpreting a descriptor.
///
/// The platform forwards these untouched; they belong to the factory that produced them.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FactoryError {
	#[error("{type_name}: missing required attribute '{attribute}'")]
	MissingAttribute { type_name: String, attribute: String },
	#[error("{type_name}: invalid value '{value}' for '{attribute}': {reason}")]
	InvalidAttribute {
		type_name: String,
		attribute: String,
		value: String,
		reason: String,
	},
	#[error("{type_name}: {message}")]
	Malformed { type_name: String, message: String },
}

/// A factory of any kind, tagged with the kind it produces.
#[derive(Clone)]
pub enum Factory {
	Object(ObjectFactory),
	Behavior(BehaviorFactory),
	SharedData(SharedDataFactory),
}

impl Factory {
	pub fn object<F>(f: F) -> Self
	where
		F: Fn(&RuntimeScene, &SerializerElement) -> FactoryResult<Box<dyn RuntimeObject>> + Send + Sync + 'static,
	{
		Self::Object(Arc::new(f))
	}

	pub fn behavior<F>(f: F) -> Self
	where
		F: Fn(&SerializerElement) -> FactoryResult<Box<dyn RuntimeBehavior>> + Send + Sync + 'static,
	{
		Self::Behavior(Arc::new(f))
	}

	pub fn shared_data<F>(f: F) -> Self
	where
		F: Fn(&SerializerElement) -> FactoryResult<Box<dyn BehaviorsSharedData>> + Send + Sync + 'static,
	{
		Self::SharedData(Arc::new(f))
	}

	pub fn kind(&self) -> EntityKind {
		match self {
			Self::Object(_) => EntityKind::Object,
			Self::Behavior(_) => EntityKind::Behavior,
			Self::SharedData(_) => EntityKind::SharedData,
		}
	}

	/// True if both values share the same underlying callable.
	pub fn ptr_eq(&self, other: &Factory) -> bool {
		match (self, other) {
			(Self::Object(a), Self::Object(b)) => Arc::ptr_eq(a, b),
			(Self::Behavior(a), Self::Behavior(b)) => Arc::ptr_eq(a, b),
			(Self::SharedData(a), Self::SharedData(b)) => Arc::ptr_eq(a, b),
			_ => false,
		}
	}
}

impl fmt::Debug for Factory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Factory::{:?}", self.kind())
	}
}
