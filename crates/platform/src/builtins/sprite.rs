use std::any::Any;

use gantry_descriptor::SerializerElement;

use crate::entity::{RuntimeObject, RuntimeScene};
use crate::extension::{BuiltinContext, BuiltinExtensionDef, ExtensionRecord};

pub const SPRITE_OBJECT: &str = "Sprite";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteAnimation {
	pub name: String,
	pub looping: bool,
}

/// Animated image object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteObject {
	id: u64,
	name: String,
	animations: Vec<SpriteAnimation>,
	update_if_not_visible: bool,
}

impl SpriteObject {
	pub fn from_descriptor(scene: &RuntimeScene, descriptor: &SerializerElement) -> Self {
		// Item names differ between encodings, so every child of `animations` counts.
		let animations = descriptor
			.child("animations")
			.map(|list| {
				list.children()
					.map(|(_, item)| SpriteAnimation {
						name: item.string_attribute("name", ""),
						looping: item.bool_attribute("loop", false),
					})
					.collect()
			})
			.unwrap_or_default();

		Self {
			id: scene.allocate_object_id(),
			name: descriptor.string_attribute("name", ""),
			animations,
			update_if_not_visible: descriptor.bool_attribute("updateIfNotVisible", false),
		}
	}

	pub fn animations(&self) -> &[SpriteAnimation] {
		&self.animations
	}

	pub fn animation(&self, name: &str) -> Option<&SpriteAnimation> {
		self.animations.iter().find(|a| a.name == name)
	}

	pub fn update_if_not_visible(&self) -> bool {
		self.update_if_not_visible
	}
}

impl RuntimeObject for SpriteObject {
	fn id(&self) -> u64 {
		self.id
	}

	fn object_name(&self) -> &str {
		&self.name
	}

	fn type_name(&self) -> &str {
		SPRITE_OBJECT
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}

fn declare(_: &BuiltinContext<'_>) -> ExtensionRecord {
	ExtensionRecord::new("Sprite")
		.with_object(SPRITE_OBJECT, |scene, d| Ok(Box::new(SpriteObject::from_descriptor(scene, d))))
}

inventory::submit!(BuiltinExtensionDef::new("Sprite", 0, declare));
