//! The process-wide platform instance.
//!
//! [`Platform::get`] lazily constructs the one instance: it builds an empty registry and ingests
//! every enabled built-in extension. [`Platform::destroy`] releases it; the next `get` starts over
//! from built-ins only. A handle obtained before a `destroy` is never a dead end: its operations
//! re-enter [`Platform::get`] and act on the live instance, recreating it if needed.
use std::ops::Deref;
use std::sync::Arc;

use gantry_descriptor::SerializerElement;
use parking_lot::{Mutex, RwLock};

use crate::builtins::BaseObject;
use crate::config::PlatformConfig;
use crate::core::{InsertAction, RegistrySource, TypeRegistry};
use crate::entity::{BehaviorsSharedData, EntityKind, RuntimeBehavior, RuntimeInstance, RuntimeObject, RuntimeScene};
use crate::error::{CreateError, Result};
use crate::extension::{self, BuiltinContext, EXTENSION_ENTRY_SYMBOL, ExtensionRecord, IngestReport};
use crate::factory::Factory;

const PLATFORM_NAME: &str = "Gantry native platform";

struct Slot {
	instance: Option<Arc<Platform>>,
	/// Configuration for the next construction; `None` means defaults.
	config: Option<PlatformConfig>,
}

static SLOT: Mutex<Slot> = Mutex::new(Slot {
	instance: None,
	config: None,
});

/// Registry owner and creation entry point for runtime objects, behaviors and shared data.
pub struct Platform {
	registry: Arc<TypeRegistry>,
	config: RwLock<PlatformConfig>,
	/// Names of runtime-ingested extensions, in load order.
	extensions: Mutex<Vec<String>>,
	/// Set for instances owned by the process-wide slot.
	slot_bound: bool,
}

/// The instance an operation acts on: the receiver, or the live instance that replaced it.
enum Live<'a> {
	This(&'a Platform),
	Current(Arc<Platform>),
}

impl Deref for Live<'_> {
	type Target = Platform;

	fn deref(&self) -> &Platform {
		match self {
			Self::This(platform) => platform,
			Self::Current(platform) => platform,
		}
	}
}

impl Platform {
	/// Returns the process-wide instance, constructing it on first use.
	///
	/// Every call between two [`destroy`](Self::destroy) calls returns the same instance.
	pub fn get() -> Arc<Platform> {
		let mut slot = SLOT.lock();
		if let Some(instance) = &slot.instance {
			return Arc::clone(instance);
		}
		let config = slot.config.clone().unwrap_or_default();
		let mut platform = Platform::new(config);
		platform.slot_bound = true;
		let instance = Arc::new(platform);
		slot.instance = Some(Arc::clone(&instance));
		instance
	}

	/// Releases the process-wide instance and its registrations. Returns false if none existed.
	///
	/// Outstanding handles stay valid; their next operation recreates the instance.
	pub fn destroy() -> bool {
		let released = SLOT.lock().instance.take();
		match released {
			Some(instance) => {
				tracing::info!(
					objects = instance.registry.len(EntityKind::Object),
					behaviors = instance.registry.len(EntityKind::Behavior),
					shared_data = instance.registry.len(EntityKind::SharedData),
					"platform destroyed"
				);
				true
			}
			None => false,
		}
	}

	pub fn is_initialized() -> bool {
		SLOT.lock().instance.is_some()
	}

	/// Sets the configuration used by future constructions and applies it to the live instance.
	///
	/// Locale and disabled built-ins affect the live instance from its next
	/// [`reload_builtin_extensions`](Self::reload_builtin_extensions) on.
	pub fn configure(config: PlatformConfig) {
		let mut slot = SLOT.lock();
		if let Some(instance) = &slot.instance {
			instance.apply_config(config.clone());
		}
		slot.config = Some(config);
	}

	pub(crate) fn new(config: PlatformConfig) -> Self {
		let platform = Self {
			registry: Arc::new(TypeRegistry::new()),
			config: RwLock::new(PlatformConfig::default()),
			extensions: Mutex::new(Vec::new()),
			slot_bound: false,
		};
		platform.apply_config(config);
		let reports = platform.load_builtins();
		tracing::info!(
			builtins = reports.len(),
			objects = platform.registry.len(EntityKind::Object),
			behaviors = platform.registry.len(EntityKind::Behavior),
			shared_data = platform.registry.len(EntityKind::SharedData),
			"platform constructed"
		);
		platform
	}

	/// Resolves the instance to act on. A slot-bound handle that is no longer the slot's
	/// instance forwards to [`Platform::get`].
	fn live(&self) -> Live<'_> {
		if !self.slot_bound {
			return Live::This(self);
		}
		let current = SLOT
			.lock()
			.instance
			.as_ref()
			.is_some_and(|instance| std::ptr::eq(Arc::as_ptr(instance), self));
		if current {
			return Live::This(self);
		}
		tracing::debug!("platform handle outlived its instance; acting on the live one");
		Live::Current(Platform::get())
	}

	fn apply_config(&self, config: PlatformConfig) {
		self.registry.set_collision_warnings(config.warn_on_collision);
		*self.config.write() = config;
	}

	pub fn name(&self) -> &'static str {
		PLATFORM_NAME
	}

	/// Symbol an extension module must export, see [`EXTENSION_ENTRY_SYMBOL`].
	pub fn extension_entry_symbol(&self) -> &'static str {
		EXTENSION_ENTRY_SYMBOL
	}

	pub fn config(&self) -> PlatformConfig {
		self.live().config.read().clone()
	}

	/// Changes the locale handed to built-ins from the next reload on.
	pub fn set_locale(&self, locale: impl Into<String>) {
		let locale = locale.into();
		tracing::debug!(locale = %locale, "platform locale changed");
		self.live().config.write().locale = locale;
	}

	pub fn registry(&self) -> Arc<TypeRegistry> {
		Arc::clone(&self.live().registry)
	}

	/// Registers a single factory outside any extension.
	pub fn register_factory(&self, type_name: &str, factory: Factory) -> InsertAction {
		self.live().registry.register(type_name, factory, RegistrySource::Runtime)
	}

	/// Merges `record` into the registry and marks the extension as loaded.
	///
	/// Ingestion never withdraws anything: identifiers a previously loaded version of the same
	/// extension declared and `record` omits keep resolving until
	/// [`remove_extension`](Self::remove_extension).
	pub fn ingest_extension(&self, record: &ExtensionRecord) -> IngestReport {
		let this = self.live();
		let mut extensions = this.extensions.lock();
		let reloaded = extensions.iter().any(|n| n == record.name());
		if !reloaded {
			extensions.push(record.name().to_string());
		}
		let report = extension::ingest(&this.registry, record, RegistrySource::extension(record.name()));
		drop(extensions);

		if reloaded {
			tracing::debug!(extension = record.name(), "merged into loaded extension");
		}
		report
	}

	/// Withdraws every entry the named extension still owns and forgets it.
	///
	/// Returns how many registry entries were removed.
	pub fn remove_extension(&self, name: &str) -> usize {
		let this = self.live();
		let mut extensions = this.extensions.lock();
		let Some(pos) = extensions.iter().position(|n| n == name) else {
			return 0;
		};
		extensions.remove(pos);
		let removed = this.registry.remove_source(&RegistrySource::extension(name));
		drop(extensions);

		tracing::info!(extension = name, removed, "extension removed");
		removed
	}

	pub fn is_extension_loaded(&self, name: &str) -> bool {
		self.live().extensions.lock().iter().any(|n| n == name)
	}

	/// Runtime-ingested extensions, in load order.
	pub fn loaded_extensions(&self) -> Vec<String> {
		self.live().extensions.lock().clone()
	}

	/// Re-ingests every enabled built-in extension.
	///
	/// Additive: entries from runtime extensions whose identifiers no built-in declares survive,
	/// while built-in identifiers are restored to their built-in factories. Built-ins disabled in
	/// the configuration are withdrawn.
	pub fn reload_builtin_extensions(&self) -> Vec<IngestReport> {
		let reports = self.live().load_builtins();
		tracing::debug!(builtins = reports.len(), "built-in extensions reloaded");
		reports
	}

	fn load_builtins(&self) -> Vec<IngestReport> {
		let config = self.config.read().clone();
		let cx = BuiltinContext {
			locale: &config.locale,
		};

		let mut reports = Vec::new();
		for def in extension::builtin_extensions() {
			let source = RegistrySource::Builtin(def.name);
			if config.is_builtin_disabled(def.name) {
				let withdrawn = self.registry.remove_source(&source);
				tracing::debug!(extension = def.name, withdrawn, "built-in extension disabled");
				continue;
			}
			let record = (def.declare)(&cx);
			reports.push(extension::ingest(&self.registry, &record, source));
		}
		reports
	}

	/// Registered identifiers of `kind`, sorted.
	pub fn type_names(&self, kind: EntityKind) -> Vec<String> {
		self.live().registry.type_names(kind)
	}

	fn unknown_type(&self, kind: EntityKind, type_name: &str) -> CreateError {
		CreateError::UnknownType {
			kind,
			type_name: type_name.to_string(),
			suggestion: self.registry.suggest(kind, type_name),
		}
	}

	/// Looks up the factory for `(kind, type_name)` and runs it on `descriptor`.
	///
	/// Objects need `scene`; behaviors and shared data ignore it. Nothing is logged for unknown
	/// types: whether that is a problem is the caller's call.
	pub fn resolve_and_create(
		&self,
		kind: EntityKind,
		type_name: &str,
		descriptor: &SerializerElement,
		scene: Option<&RuntimeScene>,
	) -> Result<RuntimeInstance> {
		let this = self.live();
		let factory = this
			.registry
			.resolve(kind, type_name)
			.ok_or_else(|| this.unknown_type(kind, type_name))?;

		Ok(match factory {
			Factory::Object(f) => {
				let scene = scene.ok_or_else(|| CreateError::MissingScene {
					type_name: type_name.to_string(),
				})?;
				RuntimeInstance::Object(f(scene, descriptor)?)
			}
			Factory::Behavior(f) => RuntimeInstance::Behavior(f(descriptor)?),
			Factory::SharedData(f) => RuntimeInstance::SharedData(f(descriptor)?),
		})
	}

	pub fn create_runtime_object(
		&self,
		scene: &RuntimeScene,
		type_name: &str,
		descriptor: &SerializerElement,
	) -> Result<Box<dyn RuntimeObject>> {
		let this = self.live();
		let factory = this
			.registry
			.resolve_object(type_name)
			.ok_or_else(|| this.unknown_type(EntityKind::Object, type_name))?;
		Ok(factory(scene, descriptor)?)
	}

	pub fn create_runtime_behavior(
		&self,
		type_name: &str,
		descriptor: &SerializerElement,
	) -> Result<Box<dyn RuntimeBehavior>> {
		let this = self.live();
		let factory = this
			.registry
			.resolve_behavior(type_name)
			.ok_or_else(|| this.unknown_type(EntityKind::Behavior, type_name))?;
		Ok(factory(descriptor)?)
	}

	pub fn create_behaviors_shared_data(
		&self,
		type_name: &str,
		descriptor: &SerializerElement,
	) -> Result<Box<dyn BehaviorsSharedData>> {
		let this = self.live();
		let factory = this
			.registry
			.resolve_shared_data(type_name)
			.ok_or_else(|| this.unknown_type(EntityKind::SharedData, type_name))?;
		Ok(factory(descriptor)?)
	}

	/// Creates the object `descriptor` describes, using its `type` attribute as identifier.
	pub fn instantiate_object(&self, scene: &RuntimeScene, descriptor: &SerializerElement) -> Result<Box<dyn RuntimeObject>> {
		let type_name = descriptor.string_attribute("type", "");
		self.create_runtime_object(scene, &type_name, descriptor)
	}

	/// Like [`instantiate_object`](Self::instantiate_object), but substitutes a [`BaseObject`]
	/// for unknown types instead of failing.
	///
	/// Factory errors are still returned.
	pub fn create_runtime_object_or_base(
		&self,
		scene: &RuntimeScene,
		descriptor: &SerializerElement,
	) -> Result<Box<dyn RuntimeObject>> {
		match self.instantiate_object(scene, descriptor) {
			Err(CreateError::UnknownType { type_name, suggestion, .. }) => {
				tracing::warn!(
					scene = scene.name(),
					object = %descriptor.string_attribute("name", ""),
					type_name = %type_name,
					suggestion = ?suggestion,
					"unknown object type; falling back to a base object"
				);
				Ok(Box::new(BaseObject::from_descriptor(scene, descriptor)))
			}
			other => other,
		}
	}
}

impl std::fmt::Debug for Platform {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Platform")
			.field("registry", &self.registry)
			.field("extensions", &*self.extensions.lock())
			.finish()
	}
}

#[cfg(test)]
mod tests;
