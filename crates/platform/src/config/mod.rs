//! Platform configuration.
//!
//! Read from TOML with kebab-case keys. Every key is optional; unknown keys are rejected.
//!
//! ```toml
//! locale = "fr"
//! warn-on-collision = false
//! disabled-builtins = ["PhysicsBehavior"]
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("I/O error reading {path}: {source}")]
	Io {
		path: PathBuf,
		source: std::io::Error,
	},

	#[error("TOML parse error: {0}")]
	Parse(#[from] toml::de::Error),
}

/// Settings applied when the platform is constructed and on every built-in reload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct PlatformConfig {
	/// Locale handed to built-in extensions (e.g. for placeholder text).
	pub locale: String,
	/// Warn when one extension's factory replaces another extension's.
	pub warn_on_collision: bool,
	/// Built-in extensions, by name, that are never ingested.
	pub disabled_builtins: Vec<String>,
}

impl Default for PlatformConfig {
	fn default() -> Self {
		Self {
			locale: "en".to_string(),
			warn_on_collision: true,
			disabled_builtins: Vec::new(),
		}
	}
}

impl PlatformConfig {
	pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(input)?)
	}

	/// Load configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_toml_str(&content)
	}

	pub fn is_builtin_disabled(&self, name: &str) -> bool {
		self.disabled_builtins.iter().any(|n| n == name)
	}
}
