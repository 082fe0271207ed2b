//! The descriptor tree.

use std::collections::BTreeMap;

use crate::value::SerializerValue;

/// One node of a persisted entity description.
///
/// An element carries an optional own value, a set of named attributes and an ordered list of
/// named children. Child names may repeat. An element can be marked as an array, in which case
/// its children are its items and encodings that support arrays emit them as such.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SerializerElement {
	value: Option<SerializerValue>,
	attributes: BTreeMap<String, SerializerValue>,
	children: Vec<(String, SerializerElement)>,
	array_of: Option<String>,
}

impl SerializerElement {
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a leaf element holding `value`.
	pub fn with_value(value: impl Into<SerializerValue>) -> Self {
		Self {
			value: Some(value.into()),
			..Self::default()
		}
	}

	pub fn set_value(&mut self, value: impl Into<SerializerValue>) -> &mut Self {
		self.value = Some(value.into());
		self
	}

	pub fn value(&self) -> Option<&SerializerValue> {
		self.value.as_ref()
	}

	/// Sets (or replaces) an attribute.
	pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<SerializerValue>) -> &mut Self {
		self.attributes.insert(name.into(), value.into());
		self
	}

	/// Iterates attributes in name order.
	pub fn attributes(&self) -> impl Iterator<Item = (&str, &SerializerValue)> {
		self.attributes.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Returns true if `name` resolves either as an attribute or as a valued child.
	pub fn has_attribute(&self, name: &str) -> bool {
		self.lookup(name).is_some()
	}

	/// Raw attribute access with the same fallback as the typed getters.
	pub fn attribute(&self, name: &str) -> Option<&SerializerValue> {
		self.lookup(name)
	}

	fn lookup(&self, name: &str) -> Option<&SerializerValue> {
		self.attributes
			.get(name)
			.or_else(|| self.child(name).and_then(|c| c.value.as_ref()))
	}

	pub fn string_attribute(&self, name: &str, default: &str) -> String {
		self.lookup(name)
			.map(SerializerValue::to_string_value)
			.unwrap_or_else(|| default.to_string())
	}

	/// Numeric attribute; strings that do not parse yield `default`.
	pub fn number_attribute(&self, name: &str, default: f64) -> f64 {
		self.lookup(name).and_then(SerializerValue::as_number).unwrap_or(default)
	}

	/// Integer attribute, truncating toward zero.
	pub fn int_attribute(&self, name: &str, default: i64) -> i64 {
		self.lookup(name)
			.and_then(SerializerValue::as_number)
			.map(|n| n as i64)
			.unwrap_or(default)
	}

	pub fn bool_attribute(&self, name: &str, default: bool) -> bool {
		self.lookup(name).map(SerializerValue::as_bool).unwrap_or(default)
	}

	/// Appends a new child and returns it for filling in.
	pub fn add_child(&mut self, name: impl Into<String>) -> &mut SerializerElement {
		self.children.push((name.into(), SerializerElement::new()));
		let last = self.children.len() - 1;
		&mut self.children[last].1
	}

	/// Appends an already built child.
	pub fn push_child(&mut self, name: impl Into<String>, child: SerializerElement) -> &mut Self {
		self.children.push((name.into(), child));
		self
	}

	/// First child named `name`.
	pub fn child(&self, name: &str) -> Option<&SerializerElement> {
		self.children.iter().find(|(n, _)| n == name).map(|(_, c)| c)
	}

	pub fn child_mut(&mut self, name: &str) -> Option<&mut SerializerElement> {
		self.children.iter_mut().find(|(n, _)| n == name).map(|(_, c)| c)
	}

	pub fn has_child(&self, name: &str) -> bool {
		self.child(name).is_some()
	}

	/// All children in insertion order.
	pub fn children(&self) -> impl Iterator<Item = (&str, &SerializerElement)> {
		self.children.iter().map(|(n, c)| (n.as_str(), c))
	}

	/// Children named `name`.
	///
	/// Items of an array loaded from an encoding without item names (JSON) are stored unnamed;
	/// they match any name asked of their array.
	pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a SerializerElement> + 'a {
		let unnamed_items = self.is_array();
		self.children
			.iter()
			.filter(move |(n, _)| n == name || (unnamed_items && n.is_empty()))
			.map(|(_, c)| c)
	}

	pub fn children_count(&self) -> usize {
		self.children.len()
	}

	/// Removes every child named `name`, returning how many were removed.
	pub fn remove_child(&mut self, name: &str) -> usize {
		let before = self.children.len();
		self.children.retain(|(n, _)| n != name);
		before - self.children.len()
	}

	/// Marks this element as an array whose items are named `item_name`.
	pub fn consider_as_array_of(&mut self, item_name: impl Into<String>) -> &mut Self {
		self.array_of = Some(item_name.into());
		self
	}

	/// Marks this element as an array with unnamed items.
	pub fn consider_as_array(&mut self) -> &mut Self {
		self.consider_as_array_of(String::new())
	}

	pub fn is_array(&self) -> bool {
		self.array_of.is_some()
	}

	pub fn array_item_name(&self) -> Option<&str> {
		self.array_of.as_deref()
	}

	/// True if the element carries nothing at all.
	pub fn is_empty(&self) -> bool {
		self.value.is_none() && self.attributes.is_empty() && self.children.is_empty()
	}

	pub(crate) fn attributes_map(&self) -> &BTreeMap<String, SerializerValue> {
		&self.attributes
	}

	pub(crate) fn children_slice(&self) -> &[(String, SerializerElement)] {
		&self.children
	}
}
