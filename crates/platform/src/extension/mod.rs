//! Extension records and their ingestion into the type registry.
//!
//! An extension contributes `(type identifier, factory)` pairs for any subset of the entity kinds.
//! Ingestion is a merge: every pair is registered, identifiers the record omits keep whatever
//! binding they had, and colliding identifiers take the record's factory.

mod builtin;

pub use builtin::{BuiltinContext, BuiltinExtensionDef};
pub(crate) use builtin::builtin_extensions;

use gantry_descriptor::SerializerElement;

use crate::core::{InsertAction, RegistrySource, TypeRegistry};
use crate::entity::{BehaviorsSharedData, EntityKind, RuntimeBehavior, RuntimeObject, RuntimeScene};
use crate::factory::{Factory, FactoryResult};

/// Name of the symbol an extension module exports to hand over its [`ExtensionRecord`].
///
/// The symbol has the signature of [`ExtensionEntryFn`]; see [`export_extension!`](crate::export_extension).
pub const EXTENSION_ENTRY_SYMBOL: &str = "gantry_create_extension";

/// Signature of the exported entry point.
///
/// The entry point uses the Rust ABI and returns a Rust type across the module boundary. Host and
/// extension must be built by the same compiler against the same `gantry-platform` build; nothing
/// checks this at load time.
pub type ExtensionEntryFn = extern "Rust" fn() -> ExtensionRecord;

/// Exports `$declare` (a `fn() -> ExtensionRecord`) under [`EXTENSION_ENTRY_SYMBOL`] with the
/// [`ExtensionEntryFn`] signature.
#[macro_export]
macro_rules! export_extension {
	($declare:path) => {
		#[unsafe(no_mangle)]
		pub extern "Rust" fn gantry_create_extension() -> $crate::ExtensionRecord {
			$declare()
		}
	};
}

/// The set of factories a single extension contributes.
#[derive(Debug, Clone)]
pub struct ExtensionRecord {
	name: String,
	factories: Vec<(String, Factory)>,
}

impl ExtensionRecord {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			factories: Vec::new(),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Adds a factory of any kind.
	pub fn with_factory(mut self, type_name: impl Into<String>, factory: Factory) -> Self {
		self.add_factory(type_name, factory);
		self
	}

	pub fn add_factory(&mut self, type_name: impl Into<String>, factory: Factory) -> &mut Self {
		self.factories.push((type_name.into(), factory));
		self
	}

	pub fn with_object<F>(self, type_name: impl Into<String>, f: F) -> Self
	where
		F: Fn(&RuntimeScene, &SerializerElement) -> FactoryResult<Box<dyn RuntimeObject>> + Send + Sync + 'static,
	{
		self.with_factory(type_name, Factory::object(f))
	}

	pub fn with_behavior<F>(self, type_name: impl Into<String>, f: F) -> Self
	where
		F: Fn(&SerializerElement) -> FactoryResult<Box<dyn RuntimeBehavior>> + Send + Sync + 'static,
	{
		self.with_factory(type_name, Factory::behavior(f))
	}

	pub fn with_shared_data<F>(self, type_name: impl Into<String>, f: F) -> Self
	where
		F: Fn(&SerializerElement) -> FactoryResult<Box<dyn BehaviorsSharedData>> + Send + Sync + 'static,
	{
		self.with_factory(type_name, Factory::shared_data(f))
	}

	/// Declared identifiers, in declaration order.
	pub fn declared_types(&self) -> impl Iterator<Item = (EntityKind, &str)> {
		self.factories.iter().map(|(name, f)| (f.kind(), name.as_str()))
	}

	pub fn factories(&self) -> impl Iterator<Item = (&str, &Factory)> {
		self.factories.iter().map(|(name, f)| (name.as_str(), f))
	}

	pub fn is_empty(&self) -> bool {
		self.factories.is_empty()
	}
}

/// Summary of one ingestion pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
	pub extension: String,
	pub inserted: usize,
	pub replaced: usize,
	/// Declarations dropped for having an empty type identifier.
	pub skipped: usize,
}

/// Registers every factory of `record` into `registry`, attributed to `source`.
///
/// Always runs to completion. Empty identifiers are the only declarations rejected.
pub fn ingest(registry: &TypeRegistry, record: &ExtensionRecord, source: RegistrySource) -> IngestReport {
	let mut report = IngestReport {
		extension: record.name().to_string(),
		..IngestReport::default()
	};

	for (type_name, factory) in record.factories() {
		if type_name.is_empty() {
			tracing::warn!(extension = record.name(), kind = %factory.kind(), "skipping factory with empty type identifier");
			report.skipped += 1;
			continue;
		}
		match registry.register(type_name, factory.clone(), source.clone()) {
			InsertAction::InsertedNew => report.inserted += 1,
			InsertAction::ReplacedExisting => report.replaced += 1,
		}
	}

	tracing::info!(
		extension = record.name(),
		source = %source,
		inserted = report.inserted,
		replaced = report.replaced,
		skipped = report.skipped,
		"extension ingested"
	);
	report
}
