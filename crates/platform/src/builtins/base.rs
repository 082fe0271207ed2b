use std::any::Any;

use gantry_descriptor::SerializerElement;

use crate::entity::{RuntimeObject, RuntimeScene};

/// Plain object with no type-specific state.
///
/// Never registered. Callers that prefer a degraded scene over a failed load substitute it for
/// objects whose type is unknown (see [`crate::Platform::create_runtime_object_or_base`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseObject {
	id: u64,
	name: String,
	type_name: String,
}

impl BaseObject {
	pub fn from_descriptor(scene: &RuntimeScene, descriptor: &SerializerElement) -> Self {
		Self {
			id: scene.allocate_object_id(),
			name: descriptor.string_attribute("name", ""),
			type_name: descriptor.string_attribute("type", ""),
		}
	}
}

impl RuntimeObject for BaseObject {
	fn id(&self) -> u64 {
		self.id
	}

	fn object_name(&self) -> &str {
		&self.name
	}

	fn type_name(&self) -> &str {
		&self.type_name
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}
