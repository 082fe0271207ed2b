use std::fmt;
use std::sync::Arc;

/// Where a registry entry came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RegistrySource {
	/// A built-in extension shipped with the platform.
	Builtin(&'static str),
	/// An extension ingested at runtime, by name.
	Extension(Arc<str>),
	/// A factory registered directly, outside any extension.
	Runtime,
}

impl RegistrySource {
	pub fn extension(name: &str) -> Self {
		Self::Extension(Arc::from(name))
	}

	/// Name of the contributing extension, if any.
	pub fn extension_name(&self) -> Option<&str> {
		match self {
			Self::Builtin(name) => Some(name),
			Self::Extension(name) => Some(name),
			Self::Runtime => None,
		}
	}
}

impl fmt::Display for RegistrySource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Builtin(name) => write!(f, "builtin:{name}"),
			Self::Extension(name) => write!(f, "extension:{name}"),
			Self::Runtime => write!(f, "runtime"),
		}
	}
}

/// Outcome of a single registration.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InsertAction {
	/// Key was new; factory inserted.
	InsertedNew,
	/// Key existed; the new factory superseded it.
	ReplacedExisting,
}
