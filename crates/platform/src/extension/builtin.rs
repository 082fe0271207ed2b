//! Built-in extension collection.
//!
//! Built-ins are gathered at link time through `inventory` and declared afresh on every
//! (re)load, so factories can capture runtime parameters such as the locale.

use super::ExtensionRecord;

/// Parameters available to built-in extensions when they declare their factories.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinContext<'a> {
	pub locale: &'a str,
}

/// A built-in extension submitted with `inventory::submit!`.
pub struct BuiltinExtensionDef {
	pub name: &'static str,
	/// Lower priorities are ingested first, so higher ones win identifier collisions.
	pub priority: i16,
	pub declare: fn(&BuiltinContext<'_>) -> ExtensionRecord,
}

inventory::collect!(BuiltinExtensionDef);

impl BuiltinExtensionDef {
	pub const fn new(name: &'static str, priority: i16, declare: fn(&BuiltinContext<'_>) -> ExtensionRecord) -> Self {
		Self { name, priority, declare }
	}
}

/// All submitted built-ins in ingestion order: priority, then name.
pub(crate) fn builtin_extensions() -> Vec<&'static BuiltinExtensionDef> {
	let mut defs: Vec<&'static BuiltinExtensionDef> = inventory::iter::<BuiltinExtensionDef>.into_iter().collect();
	defs.sort_by(|a, b| a.priority.cmp(&b.priority).then_with(|| a.name.cmp(b.name)));
	defs
}
