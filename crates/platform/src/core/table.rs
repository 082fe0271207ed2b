//! The type registry table: one mapping per entity kind from type identifier to factory.
//!
//! # Invariants
//!
//! - At most one factory per `(kind, type identifier)`. A later registration supersedes the
//!   earlier one (last writer wins); this is how reloaded extensions replace stale factories.
//! - Kinds are isolated: a name registered as an object never resolves as a behavior.
//! - Lookups are exact, case-sensitive byte matches.
//!
//! # Concurrency
//!
//! All three mappings sit behind a single reader/writer lock. Resolution clones the factory out
//! and releases the lock before anything is constructed, so factories may call back into the
//! registry.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use super::source::{InsertAction, RegistrySource};
use crate::entity::EntityKind;
use crate::factory::{BehaviorFactory, Factory, ObjectFactory, SharedDataFactory};

/// Maximum edit distance for "did you mean" suggestions.
const SUGGESTION_DISTANCE: usize = 3;

struct Entry<F> {
	factory: F,
	source: RegistrySource,
}

#[derive(Default)]
struct Tables {
	objects: FxHashMap<String, Entry<ObjectFactory>>,
	behaviors: FxHashMap<String, Entry<BehaviorFactory>>,
	shared_data: FxHashMap<String, Entry<SharedDataFactory>>,
}

impl Tables {
	fn names(&self, kind: EntityKind) -> Vec<&str> {
		match kind {
			EntityKind::Object => self.objects.keys().map(String::as_str).collect(),
			EntityKind::Behavior => self.behaviors.keys().map(String::as_str).collect(),
			EntityKind::SharedData => self.shared_data.keys().map(String::as_str).collect(),
		}
	}

	fn source_of(&self, kind: EntityKind, name: &str) -> Option<&RegistrySource> {
		match kind {
			EntityKind::Object => self.objects.get(name).map(|e| &e.source),
			EntityKind::Behavior => self.behaviors.get(name).map(|e| &e.source),
			EntityKind::SharedData => self.shared_data.get(name).map(|e| &e.source),
		}
	}

	fn len(&self, kind: EntityKind) -> usize {
		match kind {
			EntityKind::Object => self.objects.len(),
			EntityKind::Behavior => self.behaviors.len(),
			EntityKind::SharedData => self.shared_data.len(),
		}
	}

	fn clear(&mut self, kind: EntityKind) -> usize {
		let removed = self.len(kind);
		match kind {
			EntityKind::Object => self.objects.clear(),
			EntityKind::Behavior => self.behaviors.clear(),
			EntityKind::SharedData => self.shared_data.clear(),
		}
		removed
	}
}

/// Process-wide table of factories, indexed by entity kind and type identifier.
pub struct TypeRegistry {
	tables: RwLock<Tables>,
	warn_on_collision: AtomicBool,
}

impl Default for TypeRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl TypeRegistry {
	pub fn new() -> Self {
		Self {
			tables: RwLock::new(Tables::default()),
			warn_on_collision: AtomicBool::new(true),
		}
	}

	/// Enables or disables warnings when one extension's factory replaces another's.
	pub fn set_collision_warnings(&self, enabled: bool) {
		self.warn_on_collision.store(enabled, Ordering::Relaxed);
	}

	/// Inserts or replaces the factory for `(factory.kind(), type_name)`.
	///
	/// Never fails. Replacing an existing binding is the designed hot-swap path, not an error.
	pub fn register(&self, type_name: &str, factory: Factory, source: RegistrySource) -> InsertAction {
		let kind = factory.kind();
		let previous = {
			let mut tables = self.tables.write();
			match factory {
				Factory::Object(factory) => tables
					.objects
					.insert(type_name.to_string(), Entry { factory, source: source.clone() })
					.map(|e| e.source),
				Factory::Behavior(factory) => tables
					.behaviors
					.insert(type_name.to_string(), Entry { factory, source: source.clone() })
					.map(|e| e.source),
				Factory::SharedData(factory) => tables
					.shared_data
					.insert(type_name.to_string(), Entry { factory, source: source.clone() })
					.map(|e| e.source),
			}
		};

		match previous {
			None => {
				tracing::trace!(kind = %kind, type_name, source = %source, "factory registered");
				InsertAction::InsertedNew
			}
			Some(previous) => {
				self.report_overwrite(kind, type_name, &previous, &source);
				InsertAction::ReplacedExisting
			}
		}
	}

	fn report_overwrite(&self, kind: EntityKind, type_name: &str, previous: &RegistrySource, incoming: &RegistrySource) {
		let foreign = matches!(
			(previous, incoming),
			(RegistrySource::Extension(a), RegistrySource::Extension(b)) if a != b
		);
		if foreign && self.warn_on_collision.load(Ordering::Relaxed) {
			tracing::warn!(
				kind = %kind,
				type_name,
				previous = %previous,
				incoming = %incoming,
				"type identifier claimed by two extensions; last registration wins"
			);
		} else {
			tracing::debug!(kind = %kind, type_name, previous = %previous, incoming = %incoming, "factory replaced");
		}
	}

	/// Exact-match lookup. `None` means the type is unknown for this kind.
	pub fn resolve(&self, kind: EntityKind, type_name: &str) -> Option<Factory> {
		match kind {
			EntityKind::Object => self.resolve_object(type_name).map(Factory::Object),
			EntityKind::Behavior => self.resolve_behavior(type_name).map(Factory::Behavior),
			EntityKind::SharedData => self.resolve_shared_data(type_name).map(Factory::SharedData),
		}
	}

	pub fn resolve_object(&self, type_name: &str) -> Option<ObjectFactory> {
		self.tables.read().objects.get(type_name).map(|e| e.factory.clone())
	}

	pub fn resolve_behavior(&self, type_name: &str) -> Option<BehaviorFactory> {
		self.tables.read().behaviors.get(type_name).map(|e| e.factory.clone())
	}

	pub fn resolve_shared_data(&self, type_name: &str) -> Option<SharedDataFactory> {
		self.tables.read().shared_data.get(type_name).map(|e| e.factory.clone())
	}

	pub fn contains(&self, kind: EntityKind, type_name: &str) -> bool {
		self.tables.read().source_of(kind, type_name).is_some()
	}

	/// Which source currently owns the binding for `(kind, type_name)`.
	pub fn source_of(&self, kind: EntityKind, type_name: &str) -> Option<RegistrySource> {
		self.tables.read().source_of(kind, type_name).cloned()
	}

	/// Registered identifiers for `kind`, sorted.
	pub fn type_names(&self, kind: EntityKind) -> Vec<String> {
		let tables = self.tables.read();
		let mut names: Vec<String> = tables.names(kind).into_iter().map(str::to_string).collect();
		names.sort_unstable();
		names
	}

	pub fn len(&self, kind: EntityKind) -> usize {
		self.tables.read().len(kind)
	}

	pub fn is_empty(&self) -> bool {
		let tables = self.tables.read();
		EntityKind::ALL.iter().all(|&k| tables.len(k) == 0)
	}

	/// Removes every entry of `kind`, returning how many were removed.
	pub fn clear(&self, kind: EntityKind) -> usize {
		let removed = self.tables.write().clear(kind);
		tracing::debug!(kind = %kind, removed, "registry kind cleared");
		removed
	}

	/// Removes every entry of every kind.
	pub fn clear_all(&self) -> usize {
		let mut tables = self.tables.write();
		let removed: usize = EntityKind::ALL.iter().map(|&k| tables.clear(k)).sum();
		drop(tables);
		tracing::debug!(removed, "registry cleared");
		removed
	}

	/// Withdraws every entry currently owned by `source`.
	///
	/// Entries that `source` registered but another source has since replaced are left alone.
	pub fn remove_source(&self, source: &RegistrySource) -> usize {
		let mut tables = self.tables.write();
		let before: usize = EntityKind::ALL.iter().map(|&k| tables.len(k)).sum();
		tables.objects.retain(|_, e| e.source != *source);
		tables.behaviors.retain(|_, e| e.source != *source);
		tables.shared_data.retain(|_, e| e.source != *source);
		let after: usize = EntityKind::ALL.iter().map(|&k| tables.len(k)).sum();
		before - after
	}

	/// Nearest registered identifier of `kind`, for "did you mean" diagnostics.
	pub fn suggest(&self, kind: EntityKind, type_name: &str) -> Option<String> {
		let tables = self.tables.read();
		tables
			.names(kind)
			.into_iter()
			.map(|candidate| (strsim::levenshtein(type_name, candidate), candidate))
			.filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE)
			.min()
			.map(|(_, candidate)| candidate.to_string())
	}
}

impl fmt::Debug for TypeRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let tables = self.tables.read();
		f.debug_struct("TypeRegistry")
			.field("objects", &tables.len(EntityKind::Object))
			.field("behaviors", &tables.len(EntityKind::Behavior))
			.field("shared_data", &tables.len(EntityKind::SharedData))
			.finish()
	}
}
