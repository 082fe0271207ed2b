use std::any::Any;

use gantry_descriptor::SerializerElement;

use crate::entity::{RuntimeObject, RuntimeScene};
use crate::extension::{BuiltinContext, BuiltinExtensionDef, ExtensionRecord};

pub const TEXT_OBJECT: &str = "TextObject::Text";

const DEFAULT_CHARACTER_SIZE: i64 = 20;

/// Placeholder shown by text objects whose descriptor carries no string.
///
/// Matches on the language part of `locale` (`fr-CA` and `fr_FR` both give French); unknown
/// languages fall back to English.
pub fn placeholder_text(locale: &str) -> &'static str {
	let language = locale.split(['-', '_']).next().unwrap_or_default();
	match language.to_ascii_lowercase().as_str() {
		"fr" => "Texte",
		"es" | "pt" => "Texto",
		"it" => "Testo",
		_ => "Text",
	}
}

/// Single-line text object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextObject {
	id: u64,
	name: String,
	string: String,
	font: String,
	character_size: u32,
	color: [u8; 3],
}

impl TextObject {
	pub fn from_descriptor(scene: &RuntimeScene, descriptor: &SerializerElement, placeholder: &str) -> Self {
		let channel = |name| descriptor.int_attribute(name, 0).clamp(0, 255) as u8;
		Self {
			id: scene.allocate_object_id(),
			name: descriptor.string_attribute("name", ""),
			string: descriptor.string_attribute("string", placeholder),
			font: descriptor.string_attribute("font", ""),
			character_size: descriptor
				.int_attribute("characterSize", DEFAULT_CHARACTER_SIZE)
				.clamp(1, i64::from(u32::MAX)) as u32,
			color: [channel("r"), channel("g"), channel("b")],
		}
	}

	pub fn string(&self) -> &str {
		&self.string
	}

	pub fn font(&self) -> &str {
		&self.font
	}

	pub fn character_size(&self) -> u32 {
		self.character_size
	}

	pub fn color(&self) -> [u8; 3] {
		self.color
	}
}

impl RuntimeObject for TextObject {
	fn id(&self) -> u64 {
		self.id
	}

	fn object_name(&self) -> &str {
		&self.name
	}

	fn type_name(&self) -> &str {
		TEXT_OBJECT
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}

fn declare(cx: &BuiltinContext<'_>) -> ExtensionRecord {
	let placeholder = placeholder_text(cx.locale);
	ExtensionRecord::new("TextObject").with_object(TEXT_OBJECT, move |scene, d| {
		Ok(Box::new(TextObject::from_descriptor(scene, d, placeholder)))
	})
}

inventory::submit!(BuiltinExtensionDef::new("TextObject", 0, declare));
