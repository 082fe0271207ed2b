//! Rigid-body physics behavior and its per-scene world settings.

use std::any::Any;
use std::fmt;
use std::str::FromStr;

use gantry_descriptor::SerializerElement;

use crate::entity::{BehaviorsSharedData, RuntimeBehavior};
use crate::extension::{BuiltinContext, BuiltinExtensionDef, ExtensionRecord};
use crate::factory::{FactoryError, FactoryResult};

/// Identifier shared by the behavior and its shared data.
pub const PHYSICS_BEHAVIOR: &str = "PhysicsBehavior::PhysicsBehavior";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyType {
	Static,
	#[default]
	Dynamic,
	Kinematic,
}

impl FromStr for BodyType {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"Static" => Ok(Self::Static),
			"Dynamic" => Ok(Self::Dynamic),
			"Kinematic" => Ok(Self::Kinematic),
			_ => Err(()),
		}
	}
}

impl fmt::Display for BodyType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Static => write!(f, "Static"),
			Self::Dynamic => write!(f, "Dynamic"),
			Self::Kinematic => write!(f, "Kinematic"),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhysicsBehavior {
	name: String,
	body_type: BodyType,
	fixed_rotation: bool,
}

impl PhysicsBehavior {
	/// Fails if `bodyType` is present but not one of `Static`, `Dynamic` or `Kinematic`.
	pub fn from_descriptor(descriptor: &SerializerElement) -> FactoryResult<Self> {
		let body_type = match descriptor.attribute("bodyType") {
			None => BodyType::default(),
			Some(value) => {
				let raw = value.to_string_value();
				raw.parse::<BodyType>().map_err(|()| FactoryError::InvalidAttribute {
					type_name: PHYSICS_BEHAVIOR.to_string(),
					attribute: "bodyType".to_string(),
					value: raw.clone(),
					reason: "expected Static, Dynamic or Kinematic".to_string(),
				})?
			}
		};

		Ok(Self {
			name: descriptor.string_attribute("name", "Physics"),
			body_type,
			fixed_rotation: descriptor.bool_attribute("fixedRotation", false),
		})
	}

	pub fn body_type(&self) -> BodyType {
		self.body_type
	}

	pub fn fixed_rotation(&self) -> bool {
		self.fixed_rotation
	}
}

impl RuntimeBehavior for PhysicsBehavior {
	fn name(&self) -> &str {
		&self.name
	}

	fn type_name(&self) -> &str {
		PHYSICS_BEHAVIOR
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}

/// World settings common to every physics body in a scene.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsSharedData {
	pub gravity: (f64, f64),
	/// Pixels per world unit along each axis.
	pub scale: (f64, f64),
}

impl PhysicsSharedData {
	pub fn from_descriptor(descriptor: &SerializerElement) -> Self {
		Self {
			gravity: (
				descriptor.number_attribute("gravityX", 0.0),
				descriptor.number_attribute("gravityY", 9.0),
			),
			scale: (
				descriptor.number_attribute("scaleX", 100.0),
				descriptor.number_attribute("scaleY", 100.0),
			),
		}
	}
}

impl BehaviorsSharedData for PhysicsSharedData {
	fn type_name(&self) -> &str {
		PHYSICS_BEHAVIOR
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}

fn declare(_: &BuiltinContext<'_>) -> ExtensionRecord {
	ExtensionRecord::new("PhysicsBehavior")
		.with_behavior(PHYSICS_BEHAVIOR, |d| Ok(Box::new(PhysicsBehavior::from_descriptor(d)?)))
		.with_shared_data(PHYSICS_BEHAVIOR, |d| Ok(Box::new(PhysicsSharedData::from_descriptor(d))))
}

inventory::submit!(BuiltinExtensionDef::new("PhysicsBehavior", 0, declare));
