//! Scalar values carried by descriptor elements and attributes.

use std::fmt;

/// A scalar stored on a [`crate::SerializerElement`], either as its own value or as an attribute.
///
/// Getters coerce between representations rather than failing, so a number written by one
/// encoding and read back as a string (XML attributes are always strings) still answers.
#[derive(Debug, Clone, PartialEq)]
pub enum SerializerValue {
	String(String),
	Number(f64),
	Bool(bool),
}

impl SerializerValue {
	/// Returns the value as a string. Integral numbers print without a fractional part.
	pub fn to_string_value(&self) -> String {
		match self {
			Self::String(s) => s.clone(),
			Self::Number(n) => format_number(*n),
			Self::Bool(b) => b.to_string(),
		}
	}

	/// Returns the value as a number, or `None` when a string does not parse.
	pub fn as_number(&self) -> Option<f64> {
		match self {
			Self::String(s) => s.trim().parse().ok(),
			Self::Number(n) => Some(*n),
			Self::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
		}
	}

	/// Returns the value as a boolean.
	///
	/// Strings are true only when they read `"true"` or `"1"`.
	pub fn as_bool(&self) -> bool {
		match self {
			Self::String(s) => matches!(s.trim(), "true" | "1"),
			Self::Number(n) => *n != 0.0,
			Self::Bool(b) => *b,
		}
	}
}

pub(crate) fn format_number(n: f64) -> String {
	if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
		format!("{}", n as i64)
	} else {
		n.to_string()
	}
}

impl fmt::Display for SerializerValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_string_value())
	}
}

impl From<&str> for SerializerValue {
	fn from(value: &str) -> Self {
		Self::String(value.to_string())
	}
}

impl From<String> for SerializerValue {
	fn from(value: String) -> Self {
		Self::String(value)
	}
}

impl From<f64> for SerializerValue {
	fn from(value: f64) -> Self {
		Self::Number(value)
	}
}

impl From<i64> for SerializerValue {
	fn from(value: i64) -> Self {
		Self::Number(value as f64)
	}
}

impl From<i32> for SerializerValue {
	fn from(value: i32) -> Self {
		Self::Number(f64::from(value))
	}
}

impl From<u32> for SerializerValue {
	fn from(value: u32) -> Self {
		Self::Number(f64::from(value))
	}
}

impl From<bool> for SerializerValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}
