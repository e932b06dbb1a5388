//! The factory: field registration, defaults and snapshots.
//!
//! A [`Factory`] owns an ordered table of fields. Each snapshot resolves
//! every registered field to its override (when one applies) or its stored
//! value, and then advances every sequence field by one, overridden or not.

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{FactoryError, FactoryResult};
use crate::field::{FieldDefault, FieldSpec};
use crate::overrides::Overrides;
use crate::record::{self, Record};
use crate::settings::{self, FactorySettings};

/// In-memory builder of JSON test records.
///
/// Mutating calls take `&mut self`; sharing one factory between threads
/// requires external locking. One factory per test case is the usual shape.
///
/// # Examples
///
/// ```
/// use jsonfactory_core::{Factory, Overrides};
/// use serde_json::json;
///
/// let mut stories = Factory::configure("story", |f| {
///     f.set_fields(["id", "name", "position"]);
///     f.set_sequence("id", Some(1))?;
///     f.set_sequence_with("name", Some(1), |n| format!("Story {}", n))?;
///     f.set_default("position", 0)
/// })
/// .unwrap();
///
/// let first = stories.snapshot_with(&Overrides::new().set("id", 4)).unwrap();
/// assert_eq!(first["id"], json!(4));
/// assert_eq!(first["name"], json!("Story 1"));
///
/// let second = stories.snapshot().unwrap();
/// assert_eq!(second["id"], json!(2));
/// assert_eq!(second["name"], json!("Story 2"));
/// ```
#[derive(Debug, Clone)]
pub struct Factory {
	name: String,
	fields_registered: bool,
	fields: IndexMap<String, FieldSpec>,
	settings: Option<FactorySettings>,
}

impl Factory {
	/// Creates a factory following the process-wide settings.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			fields_registered: false,
			fields: IndexMap::new(),
			settings: None,
		}
	}

	/// Creates a factory with pinned settings, unaffected by the
	/// process-wide toggle.
	pub fn with_settings(name: impl Into<String>, settings: FactorySettings) -> Self {
		Self {
			settings: Some(settings),
			..Self::new(name)
		}
	}

	/// Creates a factory and runs `configure` on it once before returning it.
	///
	/// Errors raised inside `configure` are returned as-is.
	pub fn configure<F>(name: impl Into<String>, configure: F) -> FactoryResult<Self>
	where
		F: FnOnce(&mut Self) -> FactoryResult<()>,
	{
		let mut factory = Self::new(name);
		configure(&mut factory)?;
		Ok(factory)
	}

	/// Same as [`Factory::configure`] with pinned settings.
	pub fn configure_with_settings<F>(
		name: impl Into<String>,
		settings: FactorySettings,
		configure: F,
	) -> FactoryResult<Self>
	where
		F: FnOnce(&mut Self) -> FactoryResult<()>,
	{
		let mut factory = Self::with_settings(name, settings);
		configure(&mut factory)?;
		Ok(factory)
	}

	/// Factory name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns true once `set_fields` has been called.
	pub fn is_configured(&self) -> bool {
		self.fields_registered
	}

	/// Settings in effect for the next call.
	pub fn settings(&self) -> FactorySettings {
		self.settings.unwrap_or_else(settings::global_settings)
	}

	/// Registered field names in registration order.
	pub fn field_names(&self) -> impl Iterator<Item = &str> {
		self.fields.keys().map(String::as_str)
	}

	/// Registered field by name.
	pub fn field(&self, name: &str) -> Option<&FieldSpec> {
		self.fields.get(name)
	}

	/// Value the field would take in the next snapshot without overrides.
	pub fn current_value(&self, name: &str) -> Option<&Value> {
		self.fields.get(name).map(FieldSpec::value)
	}

	/// Registers the factory's fields, replacing any previous registration.
	///
	/// Every field starts as `null` without a sequence. Repeated names
	/// keep their first position.
	pub fn set_fields<I, S>(&mut self, names: I)
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut fields = IndexMap::new();
		for name in names {
			fields.entry(name.into()).or_insert_with(FieldSpec::new);
		}
		tracing::debug!(factory = %self.name, count = fields.len(), "Registered factory fields");
		self.fields = fields;
		self.fields_registered = true;
	}

	/// Sets a static default.
	pub fn set_default(&mut self, field: &str, value: impl Into<Value>) -> FactoryResult<()> {
		self.set_field_default(field, FieldDefault::value(value))
	}

	/// Makes the field an integer sequence starting at `seed` (1 when `None`).
	pub fn set_sequence(&mut self, field: &str, seed: Option<i64>) -> FactoryResult<()> {
		self.set_field_default(field, FieldDefault::sequence(seed))
	}

	/// Makes the field a sequence whose value is `generator(counter)`.
	pub fn set_sequence_with<F, V>(
		&mut self,
		field: &str,
		seed: Option<i64>,
		generator: F,
	) -> FactoryResult<()>
	where
		F: Fn(i64) -> V + Send + Sync + 'static,
		V: Into<Value>,
	{
		self.set_field_default(field, FieldDefault::sequence_with(seed, generator))
	}

	/// Installs `default` on `field`.
	///
	/// In strict mode the field must be registered. Otherwise an unknown
	/// field is registered on the fly, after the existing ones.
	pub fn set_field_default(&mut self, field: &str, default: FieldDefault) -> FactoryResult<()> {
		let whiny = self.settings().whiny;
		if !self.fields.contains_key(field) {
			if whiny {
				return Err(FactoryError::UnregisteredField {
					factory: self.name.clone(),
					field: field.to_string(),
				});
			}
			tracing::debug!(factory = %self.name, field = %field, "Registering field implicitly");
		}

		tracing::trace!(factory = %self.name, field = %field, default = ?default, "Setting field default");
		self.fields
			.entry(field.to_string())
			.or_insert_with(FieldSpec::new)
			.apply(default);
		Ok(())
	}

	/// Takes a snapshot without overrides.
	pub fn snapshot(&mut self) -> FactoryResult<Record> {
		self.snapshot_with(&Overrides::new())
	}

	/// Takes a snapshot, then advances every sequence field.
	///
	/// Fails with [`FactoryError::NotConfigured`] in strict mode when
	/// `set_fields` was never called, and with
	/// [`FactoryError::SequenceOverflow`] when a sequence counter sits at
	/// `i64::MAX`. Nothing is advanced in either case.
	pub fn snapshot_with(&mut self, overrides: &Overrides) -> FactoryResult<Record> {
		let settings = self.settings();
		self.ensure_configured(&settings)?;

		if let Some((name, _)) = self.fields.iter().find(|(_, field)| !field.can_advance()) {
			return Err(FactoryError::SequenceOverflow {
				factory: self.name.clone(),
				field: name.clone(),
			});
		}

		for (key, _) in overrides.iter() {
			if !self.fields.contains_key(key) {
				tracing::debug!(factory = %self.name, field = %key, "Ignoring override for unregistered field");
			}
		}

		let mut record = Record::new();
		for (name, field) in self.fields.iter_mut() {
			let value = overrides
				.resolve(name, settings.override_mode)
				.unwrap_or(field.value())
				.clone();
			record.insert(name.clone(), value);
			field.advance();
		}

		tracing::trace!(factory = %self.name, fields = record.len(), "Produced factory snapshot");
		Ok(record)
	}

	/// Takes `count` snapshots with the same overrides.
	///
	/// The strict-mode check runs even when `count` is zero.
	pub fn snapshot_batch(
		&mut self,
		count: usize,
		overrides: &Overrides,
	) -> FactoryResult<Vec<Record>> {
		self.ensure_configured(&self.settings())?;

		let mut records = Vec::new();
		for _ in 0..count {
			records.push(self.snapshot_with(overrides)?);
		}
		Ok(records)
	}

	/// Snapshot without overrides, encoded as JSON.
	pub fn to_json(&mut self) -> FactoryResult<String> {
		Self::as_json(&self.snapshot()?)
	}

	/// Snapshot with overrides, encoded as JSON.
	pub fn to_json_with(&mut self, overrides: &Overrides) -> FactoryResult<String> {
		Self::as_json(&self.snapshot_with(overrides)?)
	}

	fn ensure_configured(&self, settings: &FactorySettings) -> FactoryResult<()> {
		if settings.whiny && !self.fields_registered {
			return Err(FactoryError::NotConfigured {
				factory: self.name.clone(),
			});
		}
		Ok(())
	}

	/// Encodes a record taken earlier as compact JSON.
	pub fn as_json(record: &Record) -> FactoryResult<String> {
		record::encode(record)
	}
}
