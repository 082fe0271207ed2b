//! JSON encoding.
//!
//! Mapping:
//!
//! | Element | JSON |
//! |---------|------|
//! | valued leaf | primitive |
//! | array | array of items |
//! | anything else | object of attributes and children, own value under `"#value"` |
//!
//! When loading, primitives inside objects become attributes, objects and arrays become
//! children and `null` becomes an empty child. A primitive under `"#value"` becomes the element's
//! own value. Repeated child names collapse to the last one in JSON since object keys are unique.

use serde_json::{Map, Number, Value};

use crate::element::SerializerElement;
use crate::error::Result;
use crate::value::SerializerValue;

/// Object key holding the own value of an element that also has attributes or children.
pub const JSON_VALUE_KEY: &str = "#value";

impl SerializerElement {
	pub fn to_json_value(&self) -> Value {
		if self.is_array() {
			return Value::Array(self.children().map(|(_, c)| c.to_json_value()).collect());
		}

		if self.attributes_map().is_empty() && self.children_slice().is_empty() {
			return match self.value() {
				Some(v) => primitive(v),
				None => Value::Object(Map::new()),
			};
		}

		let mut map = Map::new();
		if let Some(value) = self.value() {
			map.insert(JSON_VALUE_KEY.to_string(), primitive(value));
		}
		for (name, value) in self.attributes() {
			map.insert(name.to_string(), primitive(value));
		}
		for (name, child) in self.children() {
			map.insert(name.to_string(), child.to_json_value());
		}
		Value::Object(map)
	}

	pub fn from_json_value(value: &Value) -> Self {
		let mut element = SerializerElement::new();
		match value {
			Value::Null => {}
			Value::Bool(b) => {
				element.set_value(*b);
			}
			Value::Number(n) => {
				element.set_value(n.as_f64().unwrap_or_default());
			}
			Value::String(s) => {
				element.set_value(s.as_str());
			}
			Value::Array(items) => {
				element.consider_as_array();
				for item in items {
					element.push_child("", SerializerElement::from_json_value(item));
				}
			}
			Value::Object(map) => {
				for (key, item) in map {
					if key == JSON_VALUE_KEY {
						match item {
							Value::Bool(b) => {
								element.set_value(*b);
								continue;
							}
							Value::Number(n) => {
								element.set_value(n.as_f64().unwrap_or_default());
								continue;
							}
							Value::String(s) => {
								element.set_value(s.as_str());
								continue;
							}
							Value::Null | Value::Array(_) | Value::Object(_) => {}
						}
					}
					match item {
						Value::Bool(b) => {
							element.set_attribute(key.as_str(), *b);
						}
						Value::Number(n) => {
							element.set_attribute(key.as_str(), n.as_f64().unwrap_or_default());
						}
						Value::String(s) => {
							element.set_attribute(key.as_str(), s.as_str());
						}
						Value::Null | Value::Array(_) | Value::Object(_) => {
							element.push_child(key.as_str(), SerializerElement::from_json_value(item));
						}
					}
				}
			}
		}
		element
	}

	/// Serializes to compact JSON text.
	pub fn to_json(&self) -> String {
		self.to_json_value().to_string()
	}

	/// Parses JSON text.
	pub fn from_json(text: &str) -> Result<Self> {
		let value: Value = serde_json::from_str(text)?;
		Ok(Self::from_json_value(&value))
	}
}

fn primitive(value: &SerializerValue) -> Value {
	match value {
		SerializerValue::String(s) => Value::String(s.clone()),
		SerializerValue::Bool(b) => Value::Bool(*b),
		SerializerValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => Value::from(*n as i64),
		SerializerValue::Number(n) => Number::from_f64(*n).map(Value::Number).unwrap_or(Value::Null),
	}
}
