use gantry_descriptor::SerializerElement;
use gantry_demo_extension::{
	EXTENSION_NAME, PLATFORM_OBJECT, PLATFORMER_BEHAVIOR, PlatformTile, PlatformerBehavior, gantry_create_extension,
};
use gantry_platform::{CreateError, EXTENSION_ENTRY_SYMBOL, EntityKind, ExtensionEntryFn, Platform, RuntimeScene};
use pretty_assertions::assert_eq;
use serial_test::serial;

#[test]
fn test_entry_point_matches_platform_convention() {
	let entry: ExtensionEntryFn = gantry_create_extension;
	assert_eq!(EXTENSION_ENTRY_SYMBOL, "gantry_create_extension");

	let record = entry();
	assert_eq!(record.name(), EXTENSION_NAME);
	let declared: Vec<(EntityKind, &str)> = record.declared_types().collect();
	assert_eq!(
		declared,
		vec![(EntityKind::Object, PLATFORM_OBJECT), (EntityKind::Behavior, PLATFORMER_BEHAVIOR)]
	);
}

#[test]
#[serial]
fn test_ingest_through_platform() {
	Platform::destroy();
	let platform = Platform::get();
	assert_eq!(platform.extension_entry_symbol(), EXTENSION_ENTRY_SYMBOL);

	let report = platform.ingest_extension(&gantry_create_extension());
	assert_eq!((report.inserted, report.replaced, report.skipped), (2, 0, 0));
	assert!(platform.is_extension_loaded(EXTENSION_NAME));

	let scene = RuntimeScene::new("Level 1");
	let mut ground = SerializerElement::new();
	ground
		.set_attribute("name", "Ground")
		.set_attribute("type", PLATFORM_OBJECT)
		.set_attribute("jumpThrough", true);
	let object = platform.instantiate_object(&scene, &ground).expect("tile builds");
	let tile = object.as_any().downcast_ref::<PlatformTile>().expect("tile type");
	assert!(tile.jump_through);
	assert_eq!(tile.width, 32.0);

	let behavior = platform
		.create_runtime_behavior(PLATFORMER_BEHAVIOR, &SerializerElement::new())
		.expect("behavior builds");
	let behavior = behavior
		.as_any()
		.downcast_ref::<PlatformerBehavior>()
		.expect("behavior type");
	assert_eq!(behavior.max_speed, 250.0);

	Platform::destroy();
}

#[test]
#[serial]
fn test_negative_speed_is_rejected() {
	Platform::destroy();
	let platform = Platform::get();
	platform.ingest_extension(&gantry_create_extension());

	let mut d = SerializerElement::new();
	d.set_attribute("maxSpeed", -1.0);
	let err = platform
		.create_runtime_behavior(PLATFORMER_BEHAVIOR, &d)
		.err()
		.expect("negative speed");
	assert!(matches!(err, CreateError::Factory(_)));
	assert!(err.to_string().contains("maxSpeed"));

	assert_eq!(platform.remove_extension(EXTENSION_NAME), 2);
	Platform::destroy();
}
