use std::any::Any;

use gantry_descriptor::SerializerElement;

use crate::entity::{BehaviorsSharedData, RuntimeBehavior, RuntimeObject};
use crate::factory::Factory;

/// Instance of any kind that remembers which factory built it.
pub(crate) struct Tagged {
	pub id: u64,
	pub name: String,
	pub type_name: String,
	pub tag: &'static str,
}

impl Tagged {
	fn from_descriptor(id: u64, descriptor: &SerializerElement, tag: &'static str) -> Self {
		Self {
			id,
			name: descriptor.string_attribute("name", ""),
			type_name: descriptor.string_attribute("type", ""),
			tag,
		}
	}
}

impl RuntimeObject for Tagged {
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

impl RuntimeBehavior for Tagged {
	fn name(&self) -> &str {
		&self.name
	}
	fn type_name(&self) -> &str {
		&self.type_name
	}
	fn as_any(&self) -> &dyn Any {
		self
	}
}

impl BehaviorsSharedData for Tagged {
	fn type_name(&self) -> &str {
		&self.type_name
	}
	fn as_any(&self) -> &dyn Any {
		self
	}
}

pub(crate) fn tagged_object(tag: &'static str) -> Factory {
	Factory::object(move |scene, d| Ok(Box::new(Tagged::from_descriptor(scene.allocate_object_id(), d, tag))))
}

pub(crate) fn tagged_behavior(tag: &'static str) -> Factory {
	Factory::behavior(move |d| Ok(Box::new(Tagged::from_descriptor(0, d, tag))))
}

pub(crate) fn tagged_shared_data(tag: &'static str) -> Factory {
	Factory::shared_data(move |d| Ok(Box::new(Tagged::from_descriptor(0, d, tag))))
}

/// Which fixture factory built `any`, if it was one.
pub(crate) fn tag_of(any: &dyn Any) -> Option<&'static str> {
	any.downcast_ref::<Tagged>().map(|t| t.tag)
}

pub(crate) fn descriptor(name: &str, type_name: &str) -> SerializerElement {
	let mut element = SerializerElement::new();
	element.set_attribute("name", name).set_attribute("type", type_name);
	element
}
