//! Minimal example extension contributing platformer types.
//!
//! Exports [`gantry_create_extension`] so a host can fetch the record through the platform's
//! entry symbol; in-process hosts can call [`declare`] directly.

use std::any::Any;

use gantry_descriptor::SerializerElement;
use gantry_platform::{
	ExtensionRecord, FactoryError, FactoryResult, RuntimeBehavior, RuntimeObject, RuntimeScene, export_extension,
};

pub const EXTENSION_NAME: &str = "Platformer";
pub const PLATFORM_OBJECT: &str = "Platformer::Platform";
pub const PLATFORMER_BEHAVIOR: &str = "Platformer::PlatformerObject";

/// Solid or jump-through ground tile.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformTile {
	id: u64,
	name: String,
	pub jump_through: bool,
	pub width: f64,
}

impl PlatformTile {
	fn from_descriptor(scene: &RuntimeScene, d: &SerializerElement) -> Self {
		Self {
			id: scene.allocate_object_id(),
			name: d.string_attribute("name", ""),
			jump_through: d.bool_attribute("jumpThrough", false),
			width: d.number_attribute("width", 32.0),
		}
	}
}

impl RuntimeObject for PlatformTile {
	fn id(&self) -> u64 {
		self.id
	}

	fn object_name(&self) -> &str {
		&self.name
	}

	fn type_name(&self) -> &str {
		PLATFORM_OBJECT
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}

/// Character controller moving its object over platforms.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformerBehavior {
	name: String,
	pub max_speed: f64,
	pub jump_speed: f64,
}

impl PlatformerBehavior {
	/// Speeds must be non-negative.
	fn from_descriptor(d: &SerializerElement) -> FactoryResult<Self> {
		let max_speed = d.number_attribute("maxSpeed", 250.0);
		if max_speed < 0.0 {
			return Err(FactoryError::InvalidAttribute {
				type_name: PLATFORMER_BEHAVIOR.to_string(),
				attribute: "maxSpeed".to_string(),
				value: max_speed.to_string(),
				reason: "must not be negative".to_string(),
			});
		}
		Ok(Self {
			name: d.string_attribute("name", "PlatformerObject"),
			max_speed,
			jump_speed: d.number_attribute("jumpSpeed", 600.0),
		})
	}
}

impl RuntimeBehavior for PlatformerBehavior {
	fn name(&self) -> &str {
		&self.name
	}

	fn type_name(&self) -> &str {
		PLATFORMER_BEHAVIOR
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}

pub fn declare() -> ExtensionRecord {
	ExtensionRecord::new(EXTENSION_NAME)
		.with_object(PLATFORM_OBJECT, |scene, d| Ok(Box::new(PlatformTile::from_descriptor(scene, d))))
		.with_behavior(PLATFORMER_BEHAVIOR, |d| Ok(Box::new(PlatformerBehavior::from_descriptor(d)?)))
}

export_extension!(declare);
