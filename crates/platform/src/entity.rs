//! Entity kinds and the runtime instances factories produce.

use std::any::Any;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// The three categories of runtime construct the platform can instantiate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
	Object,
	Behavior,
	SharedData,
}

impl EntityKind {
	pub const ALL: [EntityKind; 3] = [EntityKind::Object, EntityKind::Behavior, EntityKind::SharedData];
}

impl fmt::Display for EntityKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Object => write!(f, "object"),
			Self::Behavior => write!(f, "behavior"),
			Self::SharedData => write!(f, "behavior shared data"),
		}
	}
}

/// Scene-level context handed to object factories.
///
/// Owned by the engine; the platform only borrows it for the duration of one factory call.
#[derive(Debug)]
pub struct RuntimeScene {
	name: String,
	next_object_id: AtomicU64,
}

impl RuntimeScene {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			next_object_id: AtomicU64::new(1),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns a fresh object id, unique within this scene.
	pub fn allocate_object_id(&self) -> u64 {
		self.next_object_id.fetch_add(1, Ordering::Relaxed)
	}
}

/// A live object in a running scene.
pub trait RuntimeObject: Any {
	/// Scene-unique id assigned at construction.
	fn id(&self) -> u64;
	/// Name of the object as authored.
	fn object_name(&self) -> &str;
	/// Type identifier the object was created from.
	fn type_name(&self) -> &str;
	fn as_any(&self) -> &dyn Any;
}

/// Per-object behavior state.
pub trait RuntimeBehavior: Any {
	fn name(&self) -> &str;
	fn type_name(&self) -> &str;
	fn is_activated(&self) -> bool {
		true
	}
	fn as_any(&self) -> &dyn Any;
}

/// State shared by every behavior instance of one type within a scene.
pub trait BehaviorsSharedData: Any {
	fn type_name(&self) -> &str;
	fn as_any(&self) -> &dyn Any;
}

/// An owned instance of any kind, as returned by kind-generic creation.
pub enum RuntimeInstance {
	Object(Box<dyn RuntimeObject>),
	Behavior(Box<dyn RuntimeBehavior>),
	SharedData(Box<dyn BehaviorsSharedData>),
}

impl RuntimeInstance {
	pub fn kind(&self) -> EntityKind {
		match self {
			Self::Object(_) => EntityKind::Object,
			Self::Behavior(_) => EntityKind::Behavior,
			Self::SharedData(_) => EntityKind::SharedData,
		}
	}

	pub fn type_name(&self) -> &str {
		match self {
			Self::Object(o) => o.type_name(),
			Self::Behavior(b) => b.type_name(),
			Self::SharedData(s) => s.type_name(),
		}
	}

	pub fn into_object(self) -> Option<Box<dyn RuntimeObject>> {
		match self {
			Self::Object(o) => Some(o),
			_ => None,
		}
	}

	pub fn into_behavior(self) -> Option<Box<dyn RuntimeBehavior>> {
		match self {
			Self::Behavior(b) => Some(b),
			_ => None,
		}
	}

	pub fn into_shared_data(self) -> Option<Box<dyn BehaviorsSharedData>> {
		match self {
			Self::SharedData(s) => Some(s),
			_ => None,
		}
	}
}

impl fmt::Debug for RuntimeInstance {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RuntimeInstance")
			.field("kind", &self.kind())
			.field("type_name", &self.type_name())
			.finish()
	}
}
