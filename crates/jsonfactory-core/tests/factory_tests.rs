//! End-to-end behavior of configured factories.

use assert_json_diff::assert_json_eq;
use jsonfactory_core::prelude::*;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

fn parse(json: &str) -> Value {
	serde_json::from_str(json).unwrap()
}

#[fixture]
fn bare() -> Factory {
	Factory::configure_with_settings("factory", FactorySettings::new(), |f| {
		f.set_fields(["id", "name", "position"]);
		Ok(())
	})
	.unwrap()
}

#[fixture]
fn stories() -> Factory {
	Factory::configure_with_settings("story", FactorySettings::new(), |f| {
		f.set_fields(["id", "name", "position"]);
		f.set_sequence("id", Some(1))?;
		f.set_sequence_with("name", Some(1), |n| format!("Story {}", n))?;
		f.set_sequence("position", Some(1))
	})
	.unwrap()
}

#[rstest]
fn test_record_keys_match_registered_fields(mut bare: Factory) {
	let record = bare.snapshot().unwrap();
	let keys: Vec<&String> = record.keys().collect();
	assert_eq!(keys, vec!["id", "name", "position"]);
}

#[rstest]
fn test_static_default(mut bare: Factory) {
	bare.set_default("name", "foo").unwrap();
	assert_json_eq!(
		parse(&bare.to_json().unwrap()),
		json!({"id": null, "name": "foo", "position": null})
	);
}

#[rstest]
fn test_numeric_sequence(mut bare: Factory) {
	bare.set_sequence("id", Some(1)).unwrap();
	for times in [1, 2] {
		assert_json_eq!(
			parse(&bare.to_json().unwrap()),
			json!({"id": times, "name": null, "position": null})
		);
	}
}

#[rstest]
fn test_zero_seeded_sequence(mut bare: Factory) {
	bare.set_sequence("position", Some(0)).unwrap();
	assert_eq!(bare.snapshot().unwrap()["position"], json!(0));
	assert_eq!(bare.snapshot().unwrap()["position"], json!(1));
}

#[rstest]
fn test_unseeded_sequence_starts_at_one(mut bare: Factory) {
	bare.set_sequence("id", None).unwrap();
	assert_eq!(bare.snapshot().unwrap()["id"], json!(1));
}

#[rstest]
fn test_generator_sequence(mut bare: Factory) {
	bare.set_sequence_with("name", Some(1), |n| format!("Foo {}", n))
		.unwrap();
	for times in [1, 2] {
		assert_json_eq!(
			parse(&bare.to_json().unwrap()),
			json!({"id": null, "name": format!("Foo {}", times), "position": null})
		);
	}
}

#[rstest]
fn test_overrides_and_sequence_advancement(mut stories: Factory) {
	let calls = [
		(
			Overrides::new().set("id", 4),
			json!({"id": 4, "name": "Story 1", "position": 1}),
		),
		(
			Overrides::new().set("name", "Foo"),
			json!({"id": 2, "name": "Foo", "position": 2}),
		),
		(
			Overrides::new().set("position", 11),
			json!({"id": 3, "name": "Story 3", "position": 11}),
		),
		(
			Overrides::new(),
			json!({"id": 4, "name": "Story 4", "position": 4}),
		),
	];

	for (overrides, expected) in calls {
		assert_json_eq!(parse(&stories.to_json_with(&overrides).unwrap()), expected);
	}
}

#[rstest]
fn test_legacy_truthy_overrides_ignore_falsy_values() {
	let settings = FactorySettings::new().with_override_mode(OverrideMode::Truthy);
	let mut factory = Factory::configure_with_settings("story", settings, |f| {
		f.set_fields(["title", "draft", "votes"]);
		f.set_default("title", "Untitled")?;
		f.set_default("draft", true)?;
		f.set_default("votes", 3)
	})
	.unwrap();

	let overrides = Overrides::from(json!({"title": "", "draft": false, "votes": 0}));
	assert_json_eq!(
		factory.snapshot_with(&overrides).unwrap(),
		json!({"title": "Untitled", "draft": true, "votes": 3})
	);
}

#[rstest]
fn test_presence_overrides_honor_falsy_values(mut bare: Factory) {
	bare.set_default("name", "foo").unwrap();
	bare.set_sequence("position", Some(5)).unwrap();

	let overrides = Overrides::from(json!({"name": "", "position": 0, "id": false}));
	assert_json_eq!(
		bare.snapshot_with(&overrides).unwrap(),
		json!({"id": false, "name": "", "position": 0})
	);
}

#[rstest]
fn test_failed_snapshot_does_not_advance_counters() {
	let mut factory = Factory::with_settings("story", FactorySettings::new());
	assert!(matches!(
		factory.snapshot(),
		Err(FactoryError::NotConfigured { .. })
	));
	assert!(factory.to_json().is_err());

	factory.set_fields(["id"]);
	factory.set_sequence("id", Some(1)).unwrap();
	assert_eq!(factory.snapshot().unwrap()["id"], json!(1));
}

#[rstest]
fn test_unregistered_default_fails(mut bare: Factory) {
	let err = bare.set_sequence("missing", None).unwrap_err();
	assert_eq!(
		err.to_string(),
		"Field 'missing' is not registered on factory 'factory'"
	);
}

#[rstest]
fn test_as_json_round_trips(mut stories: Factory) {
	let record = stories.snapshot().unwrap();
	let json = Factory::as_json(&record).unwrap();

	assert_eq!(parse(&json), Value::Object(record.clone()));
	assert_eq!(json, Factory::as_json(&record).unwrap());
}

#[rstest]
fn test_record_json_with_overrides(mut stories: Factory) {
	let record = stories.snapshot().unwrap();

	assert_eq!(record.to_json().unwrap(), record.to_json().unwrap());
	assert_ne!(
		parse(&record.to_json_with(&Overrides::new().set("name", "Bas")).unwrap()),
		parse(&record.to_json().unwrap())
	);
	assert_eq!(stories.current_value("id"), Some(&json!(2)));
}

#[rstest]
fn test_static_only_factory_serializes_identically(mut bare: Factory) {
	bare.set_default("name", "foo").unwrap();
	assert_eq!(bare.to_json().unwrap(), bare.to_json().unwrap());
}

#[rstest]
fn test_sequence_factory_serializes_differently(mut stories: Factory) {
	assert_ne!(stories.to_json().unwrap(), stories.to_json().unwrap());
}

#[rstest]
fn test_sequence_at_counter_limit_returns_error(mut bare: Factory) {
	bare.set_sequence("id", Some(i64::MAX)).unwrap();

	assert!(matches!(
		bare.snapshot(),
		Err(FactoryError::SequenceOverflow { .. })
	));
	assert_eq!(bare.current_value("id"), Some(&json!(i64::MAX)));
}

#[rstest]
fn test_snapshot_batch_on_unconfigured_factory() {
	let mut factory = Factory::with_settings("story", FactorySettings::new());
	assert!(matches!(
		factory.snapshot_batch(usize::MAX, &Overrides::new()),
		Err(FactoryError::NotConfigured { .. })
	));
}
