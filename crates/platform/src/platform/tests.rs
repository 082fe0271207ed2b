use std::sync::Arc;

use pretty_assertions::assert_eq;
use serial_test::serial;

use super::Platform;
use crate::builtins::{BaseObject, SPRITE_OBJECT, SpriteObject, TEXT_OBJECT, TextObject};
use crate::config::PlatformConfig;
use crate::core::{InsertAction, RegistrySource};
use crate::entity::{EntityKind, RuntimeObject, RuntimeScene};
use crate::error::CreateError;
use crate::extension::ExtensionRecord;
use crate::factory::FactoryError;
use crate::test_fixtures::{descriptor, tag_of, tagged_behavior, tagged_object};

fn platform() -> Platform {
	Platform::new(PlatformConfig::default())
}

#[test]
fn test_construction_registers_builtins() {
	let platform = platform();

	assert_eq!(platform.type_names(EntityKind::Object), vec![SPRITE_OBJECT, TEXT_OBJECT]);
	assert_eq!(
		platform.type_names(EntityKind::Behavior),
		vec!["DraggableBehavior::Draggable", "PhysicsBehavior::PhysicsBehavior"]
	);
	assert_eq!(
		platform.type_names(EntityKind::SharedData),
		vec!["PhysicsBehavior::PhysicsBehavior"]
	);
	assert!(platform.loaded_extensions().is_empty());
}

#[test]
fn test_platform_identity() {
	let platform = platform();
	assert_eq!(platform.name(), "Gantry native platform");
	assert_eq!(platform.extension_entry_symbol(), "gantry_create_extension");
}

#[test]
fn test_disabled_builtins_are_not_ingested() {
	let config = PlatformConfig {
		disabled_builtins: vec!["PhysicsBehavior".to_string()],
		..PlatformConfig::default()
	};
	let platform = Platform::new(config);

	assert!(!platform.registry().contains(EntityKind::Behavior, "PhysicsBehavior::PhysicsBehavior"));
	assert!(!platform.registry().contains(EntityKind::SharedData, "PhysicsBehavior::PhysicsBehavior"));
	assert!(platform.registry().contains(EntityKind::Object, SPRITE_OBJECT));
}

#[test]
fn test_create_unknown_type_reports_kind_and_suggestion() {
	let platform = platform();
	let scene = RuntimeScene::new("Level 1");

	let err = platform
		.create_runtime_object(&scene, "Sprit", &descriptor("Hero", "Sprit"))
		.err()
		.expect("unknown type");
	assert_eq!(
		err,
		CreateError::UnknownType {
			kind: EntityKind::Object,
			type_name: "Sprit".to_string(),
			suggestion: Some(SPRITE_OBJECT.to_string()),
		}
	);
	assert!(err.is_unknown_type());
	assert_eq!(err.to_string(), "unknown object type 'Sprit' (did you mean 'Sprite'?)");
}

/// A type registered only as an object is unknown to the behavior path.
#[test]
fn test_kind_mismatch_is_unknown() {
	let platform = platform();

	let err = platform
		.create_runtime_behavior(SPRITE_OBJECT, &descriptor("b", SPRITE_OBJECT))
		.err()
		.expect("objects are not behaviors");
	assert!(err.is_unknown_type());
	assert_eq!(err.to_string(), "unknown behavior type 'Sprite'");
}

#[test]
fn test_resolve_and_create_dispatches_on_kind() {
	let platform = platform();
	let scene = RuntimeScene::new("Level 1");
	let d = descriptor("Hero", SPRITE_OBJECT);

	let object = platform
		.resolve_and_create(EntityKind::Object, SPRITE_OBJECT, &d, Some(&scene))
		.expect("sprite builds");
	assert_eq!(object.kind(), EntityKind::Object);
	assert_eq!(object.type_name(), SPRITE_OBJECT);

	let shared = platform
		.resolve_and_create(
			EntityKind::SharedData,
			"PhysicsBehavior::PhysicsBehavior",
			&descriptor("", ""),
			None,
		)
		.expect("shared data builds");
	assert!(shared.into_shared_data().is_some());
}

#[test]
fn test_object_without_scene_is_rejected() {
	let platform = platform();

	let err = platform
		.resolve_and_create(EntityKind::Object, SPRITE_OBJECT, &descriptor("Hero", SPRITE_OBJECT), None)
		.unwrap_err();
	assert_eq!(
		err,
		CreateError::MissingScene {
			type_name: SPRITE_OBJECT.to_string()
		}
	);
}

#[test]
fn test_factory_errors_pass_through() {
	let platform = platform();
	let mut d = descriptor("Body", "");
	d.set_attribute("bodyType", "Floating");

	let err = platform
		.create_runtime_behavior("PhysicsBehavior::PhysicsBehavior", &d)
		.err()
		.expect("invalid body type");
	assert!(matches!(
		err,
		CreateError::Factory(FactoryError::InvalidAttribute { ref attribute, ref value, .. })
			if attribute == "bodyType" && value == "Floating"
	));
	assert!(!err.is_unknown_type());
}

#[test]
fn test_instantiate_object_reads_type_attribute() {
	let platform = platform();
	let scene = RuntimeScene::new("Level 1");

	let object = platform
		.instantiate_object(&scene, &descriptor("Title", TEXT_OBJECT))
		.expect("text builds");
	assert_eq!(object.object_name(), "Title");
	assert!(object.as_any().downcast_ref::<TextObject>().is_some());

	let err = platform
		.instantiate_object(&scene, &descriptor("Nameless", ""))
		.err()
		.expect("empty type is unknown");
	assert!(err.is_unknown_type());
}

#[test]
fn test_fallback_to_base_object() {
	let platform = platform();
	let scene = RuntimeScene::new("Level 1");

	let object = platform
		.create_runtime_object_or_base(&scene, &descriptor("Boss", "Enemy"))
		.expect("fallback never fails on unknown types");
	let base = object.as_any().downcast_ref::<BaseObject>().expect("base object");
	assert_eq!(base.object_name(), "Boss");
	assert_eq!(base.type_name(), "Enemy");

	let sprite = platform
		.create_runtime_object_or_base(&scene, &descriptor("Hero", SPRITE_OBJECT))
		.expect("known type");
	assert!(sprite.as_any().downcast_ref::<SpriteObject>().is_some());
}

#[test]
fn test_register_factory_is_runtime_sourced() {
	let platform = platform();

	assert_eq!(
		platform.register_factory("Enemy", tagged_object("enemy")),
		InsertAction::InsertedNew
	);
	assert_eq!(
		platform.registry().source_of(EntityKind::Object, "Enemy"),
		Some(RegistrySource::Runtime)
	);
}

#[test]
fn test_ingest_tracks_loaded_extensions() {
	let platform = platform();
	platform.ingest_extension(&ExtensionRecord::new("Platformer").with_factory("Platformer::Jump", tagged_behavior("p")));
	platform.ingest_extension(&ExtensionRecord::new("Particles").with_factory("Particles::Emitter", tagged_object("p")));

	assert_eq!(platform.loaded_extensions(), vec!["Platformer", "Particles"]);
	assert!(platform.is_extension_loaded("Particles"));
	assert!(!platform.is_extension_loaded("Sprite"));
}

/// Loading a newer version under the same name merges: identifiers it omits keep resolving.
#[test]
fn test_reingest_same_name_merges_with_previous_version() {
	let platform = platform();
	let v1 = ExtensionRecord::new("Enemies")
		.with_factory("Enemies::Walker", tagged_object("v1"))
		.with_factory("Enemies::Flyer", tagged_object("v1"));
	let v2 = ExtensionRecord::new("Enemies").with_factory("Enemies::Walker", tagged_object("v2"));

	platform.ingest_extension(&v1);
	let report = platform.ingest_extension(&v2);

	assert_eq!((report.inserted, report.replaced), (0, 1));
	let scene = RuntimeScene::new("s");
	let walker = platform
		.create_runtime_object(&scene, "Enemies::Walker", &descriptor("w", "Enemies::Walker"))
		.expect("walker builds");
	assert_eq!(tag_of(walker.as_any()), Some("v2"));
	let flyer = platform
		.create_runtime_object(&scene, "Enemies::Flyer", &descriptor("f", "Enemies::Flyer"))
		.expect("flyer still registered");
	assert_eq!(tag_of(flyer.as_any()), Some("v1"));
	assert_eq!(platform.loaded_extensions(), vec!["Enemies"]);

	assert_eq!(platform.remove_extension("Enemies"), 2);
}

/// The loaded list and the registry agree once concurrent loads and unloads settle.
#[test]
fn test_concurrent_ingest_and_remove_stay_consistent() {
	let platform = Arc::new(platform());
	let workers: Vec<_> = (0..4)
		.map(|t| {
			let platform = Arc::clone(&platform);
			std::thread::spawn(move || {
				for i in 0..200 {
					if (t + i) % 2 == 0 {
						platform.ingest_extension(
							&ExtensionRecord::new("Flicker").with_factory("Flicker::Spark", tagged_object("f")),
						);
					} else {
						platform.remove_extension("Flicker");
					}
				}
			})
		})
		.collect();
	for worker in workers {
		worker.join().expect("worker thread");
	}

	assert_eq!(
		platform.is_extension_loaded("Flicker"),
		platform.registry().contains(EntityKind::Object, "Flicker::Spark")
	);
}

#[test]
fn test_remove_extension() {
	let platform = platform();
	platform.ingest_extension(
		&ExtensionRecord::new("Enemies")
			.with_factory("Enemies::Walker", tagged_object("e"))
			.with_factory("Enemies::Patrol", tagged_behavior("e")),
	);

	assert_eq!(platform.remove_extension("Enemies"), 2);
	assert!(!platform.is_extension_loaded("Enemies"));
	assert!(!platform.registry().contains(EntityKind::Object, "Enemies::Walker"));
	assert_eq!(platform.remove_extension("Enemies"), 0);
}

#[test]
fn test_reload_restores_builtins_and_keeps_extensions() {
	let platform = platform();
	platform.ingest_extension(
		&ExtensionRecord::new("BetterSprite")
			.with_factory(SPRITE_OBJECT, tagged_object("better"))
			.with_factory("Enemy", tagged_object("better")),
	);
	let scene = RuntimeScene::new("s");

	let overridden = platform
		.create_runtime_object(&scene, SPRITE_OBJECT, &descriptor("Hero", SPRITE_OBJECT))
		.expect("sprite");
	assert_eq!(tag_of(overridden.as_any()), Some("better"));

	let reports = platform.reload_builtin_extensions();
	assert_eq!(reports.len(), 4);

	let restored = platform
		.create_runtime_object(&scene, SPRITE_OBJECT, &descriptor("Hero", SPRITE_OBJECT))
		.expect("sprite");
	assert!(restored.as_any().downcast_ref::<SpriteObject>().is_some());
	assert!(platform.registry().contains(EntityKind::Object, "Enemy"));
}

#[test]
fn test_reload_applies_locale() {
	let platform = platform();
	let scene = RuntimeScene::new("s");
	let text = |platform: &Platform| {
		let object = platform
			.create_runtime_object(&scene, TEXT_OBJECT, &descriptor("Title", TEXT_OBJECT))
			.expect("text");
		object
			.as_any()
			.downcast_ref::<TextObject>()
			.map(|t| t.string().to_string())
	};

	assert_eq!(text(&platform).as_deref(), Some("Text"));
	platform.set_locale("fr");
	assert_eq!(text(&platform).as_deref(), Some("Text"));
	platform.reload_builtin_extensions();
	assert_eq!(text(&platform).as_deref(), Some("Texte"));
	assert_eq!(platform.config().locale, "fr");
}

#[test]
#[serial]
fn test_singleton_get_is_idempotent() {
	Platform::destroy();
	assert!(!Platform::is_initialized());

	let a = Platform::get();
	let b = Platform::get();
	assert!(Arc::ptr_eq(&a, &b));
	assert!(Platform::is_initialized());

	assert!(Platform::destroy());
	assert!(!Platform::destroy());
}

#[test]
#[serial]
fn test_singleton_destroy_resets_state() {
	Platform::destroy();
	let first = Platform::get();
	first.register_factory("Enemy", tagged_object("enemy"));
	Platform::destroy();

	let second = Platform::get();
	assert!(!Arc::ptr_eq(&first, &second));
	assert!(!second.registry().contains(EntityKind::Object, "Enemy"));
	assert!(second.registry().contains(EntityKind::Object, SPRITE_OBJECT));
	Platform::destroy();
}

/// A handle kept across `destroy` acts on the live instance, recreating it when needed.
#[test]
#[serial]
fn test_stale_handle_routes_to_live_instance() {
	Platform::destroy();
	let stale = Platform::get();
	Platform::destroy();

	stale.register_factory("Late", tagged_object("late"));
	assert!(Platform::is_initialized());
	let live = Platform::get();
	assert!(!Arc::ptr_eq(&stale, &live));
	assert!(live.registry().contains(EntityKind::Object, "Late"));
	assert!(stale.registry().contains(EntityKind::Object, SPRITE_OBJECT));

	stale.ingest_extension(&ExtensionRecord::new("Enemies").with_factory("Enemies::Walker", tagged_object("e")));
	assert_eq!(live.loaded_extensions(), vec!["Enemies"]);
	assert_eq!(stale.loaded_extensions(), vec!["Enemies"]);
	Platform::destroy();
}

#[test]
#[serial]
fn test_configure_applies_to_live_and_future_instances() {
	Platform::destroy();
	let live = Platform::get();

	Platform::configure(PlatformConfig {
		locale: "es".to_string(),
		..PlatformConfig::default()
	});
	assert_eq!(live.config().locale, "es");

	Platform::destroy();
	assert_eq!(Platform::get().config().locale, "es");

	Platform::configure(PlatformConfig::default());
	Platform::destroy();
}
