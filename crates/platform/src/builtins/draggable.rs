use std::any::Any;

use gantry_descriptor::SerializerElement;

use crate::entity::RuntimeBehavior;
use crate::extension::{BuiltinContext, BuiltinExtensionDef, ExtensionRecord};

pub const DRAGGABLE_BEHAVIOR: &str = "DraggableBehavior::Draggable";

/// Lets the owning object be dragged with the mouse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraggableBehavior {
	name: String,
	activated: bool,
}

impl DraggableBehavior {
	pub fn from_descriptor(descriptor: &SerializerElement) -> Self {
		Self {
			name: descriptor.string_attribute("name", "Draggable"),
			activated: descriptor.bool_attribute("activated", true),
		}
	}
}

impl RuntimeBehavior for DraggableBehavior {
	fn name(&self) -> &str {
		&self.name
	}

	fn type_name(&self) -> &str {
		DRAGGABLE_BEHAVIOR
	}

	fn is_activated(&self) -> bool {
		self.activated
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}

fn declare(_: &BuiltinContext<'_>) -> ExtensionRecord {
	ExtensionRecord::new("DraggableBehavior")
		.with_behavior(DRAGGABLE_BEHAVIOR, |d| Ok(Box::new(DraggableBehavior::from_descriptor(d))))
}

inventory::submit!(BuiltinExtensionDef::new("DraggableBehavior", 0, declare));
