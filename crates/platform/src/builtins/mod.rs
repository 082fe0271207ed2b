//! Built-in extensions shipped with the platform.
//!
//! Each module declares one extension and submits it through `inventory`; the platform ingests
//! them at construction and again on every built-in reload.

mod base;
mod draggable;
mod physics;
mod sprite;
mod text;

pub use base::BaseObject;
pub use draggable::{DRAGGABLE_BEHAVIOR, DraggableBehavior};
pub use physics::{BodyType, PHYSICS_BEHAVIOR, PhysicsBehavior, PhysicsSharedData};
pub use sprite::{SPRITE_OBJECT, SpriteAnimation, SpriteObject};
pub use text::{TEXT_OBJECT, TextObject, placeholder_text};
