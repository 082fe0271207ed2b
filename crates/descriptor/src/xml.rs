//! XML encoding.
//!
//! Attributes map to XML attributes, children to child tags and the element's own value to
//! its text content. XML has no typed scalars, so every attribute loads back as a string; the
//! typed getters on [`SerializerElement`] coerce.

use crate::element::SerializerElement;
use crate::error::Result;

/// Tag used for unnamed children (items of arrays loaded from JSON).
const ITEM_TAG: &str = "item";

impl SerializerElement {
	/// Serializes to compact XML with `root_name` as the outermost tag.
	pub fn to_xml(&self, root_name: &str) -> String {
		let mut out = String::new();
		write_element(&mut out, root_name, self);
		out
	}

	/// Parses XML text. The root tag name is not kept.
	pub fn from_xml(text: &str) -> Result<Self> {
		let doc = roxmltree::Document::parse(text)?;
		Ok(read_node(doc.root_element()))
	}
}

fn write_element(out: &mut String, name: &str, element: &SerializerElement) {
	out.push('<');
	out.push_str(name);
	for (key, value) in element.attributes() {
		out.push(' ');
		out.push_str(key);
		out.push_str("=\"");
		escape_into(out, &value.to_string_value());
		out.push('"');
	}

	let text = element.value().map(|v| v.to_string_value());
	if text.is_none() && element.children_count() == 0 {
		out.push_str("/>");
		return;
	}
	out.push('>');

	if let Some(text) = text {
		escape_into(out, &text);
	}

	let item_name = element.array_item_name().filter(|n| !n.is_empty()).unwrap_or(ITEM_TAG);
	for (child_name, child) in element.children() {
		let tag = if child_name.is_empty() { item_name } else { child_name };
		write_element(out, tag, child);
	}

	out.push_str("</");
	out.push_str(name);
	out.push('>');
}

fn read_node(node: roxmltree::Node<'_, '_>) -> SerializerElement {
	let mut element = SerializerElement::new();
	for attr in node.attributes() {
		element.set_attribute(attr.name(), attr.value());
	}

	let mut text = String::new();
	for child in node.children() {
		if child.is_element() {
			element.push_child(child.tag_name().name(), read_node(child));
		} else if child.is_text() {
			text.push_str(child.text().unwrap_or_default());
		}
	}

	let text = text.trim();
	if !text.is_empty() {
		element.set_value(text);
	}
	element
}

fn escape_into(out: &mut String, raw: &str) {
	for ch in raw.chars() {
		match ch {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&apos;"),
			c => out.push(c),
		}
	}
}
