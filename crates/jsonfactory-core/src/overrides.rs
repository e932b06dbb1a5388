//! Per-call overrides and their matching rules.

use serde_json::{Map, Value};

use crate::settings::OverrideMode;

/// Values replacing stored field values for a single snapshot.
///
/// Presence of a key is what counts in [`OverrideMode::Presence`]; an
/// explicit `null` is still an override there.
///
/// # Examples
///
/// ```
/// use jsonfactory_core::Overrides;
/// use serde_json::json;
///
/// let overrides = Overrides::new().set("id", 4).set("draft", false);
/// assert_eq!(overrides.get("draft"), Some(&json!(false)));
/// assert_eq!(overrides.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
	values: Map<String, Value>,
}

impl Overrides {
	/// Creates an empty override set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds or replaces an override.
	pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
		self.values.insert(field.into(), value.into());
		self
	}

	/// Adds or replaces an override in place.
	pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
		self.values.insert(field.into(), value.into());
	}

	/// Returns the override supplied for `field`, whatever its value.
	pub fn get(&self, field: &str) -> Option<&Value> {
		self.values.get(field)
	}

	/// Returns the override for `field` if it applies under `mode`.
	pub fn resolve(&self, field: &str, mode: OverrideMode) -> Option<&Value> {
		let value = self.values.get(field)?;
		match mode {
			OverrideMode::Presence => Some(value),
			OverrideMode::Truthy => is_truthy(value).then_some(value),
		}
	}

	/// Number of supplied overrides.
	pub fn len(&self) -> usize {
		self.values.len()
	}

	/// Returns true if no override was supplied.
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Iterates over the supplied overrides in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
		self.values.iter()
	}
}

impl From<Map<String, Value>> for Overrides {
	fn from(values: Map<String, Value>) -> Self {
		Self { values }
	}
}

/// Objects become overrides; any other value yields an empty set.
impl From<Value> for Overrides {
	fn from(value: Value) -> Self {
		match value {
			Value::Object(values) => Self { values },
			_ => Self::default(),
		}
	}
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Overrides {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			values: iter
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		}
	}
}

/// Loose truthiness used by [`OverrideMode::Truthy`].
///
/// `null`, `false`, numeric zero, NaN and the empty string are falsy.
/// Arrays and objects are always truthy, even when empty.
pub fn is_truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(b) => *b,
		Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
		Value::String(s) => !s.is_empty(),
		Value::Array(_) | Value::Object(_) => true,
	}
}
