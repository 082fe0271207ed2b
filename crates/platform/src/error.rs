//! Error types for instance creation.

use thiserror::Error;

use crate::entity::EntityKind;
use crate::factory::FactoryError;

/// Errors returned when the platform is asked to build a runtime instance.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CreateError {
	/// No factory is registered for the identifier under this kind.
	#[error("unknown {kind} type '{type_name}'{}", suggestion.as_ref().map(|s| format!(" (did you mean '{s}'?)")).unwrap_or_default())]
	UnknownType {
		kind: EntityKind,
		type_name: String,
		/// Closest registered identifier of the same kind, if one is near enough.
		suggestion: Option<String>,
	},

	/// An object was requested through the kind-generic path without a scene.
	#[error("object type '{type_name}' needs a runtime scene")]
	MissingScene { type_name: String },

	/// The factory ran and rejected its descriptor.
	#[error(transparent)]
	Factory(#[from] FactoryError),
}

impl CreateError {
	/// True when the error means "nothing registered under that name".
	pub fn is_unknown_type(&self) -> bool {
		matches!(self, Self::UnknownType { .. })
	}
}

/// Result type for platform creation operations.
pub type Result<T, E = CreateError> = std::result::Result<T, E>;
