//! Snapshot records and their JSON encoding.

use serde_json::{Map, Value};

use crate::error::FactoryResult;
use crate::overrides::Overrides;

/// A snapshot: registered field names mapped to values, in registration order.
pub type Record = Map<String, Value>;

/// Encodes a record as compact JSON.
pub fn encode(record: &Record) -> FactoryResult<String> {
	Ok(serde_json::to_string(record)?)
}

/// JSON helpers for records already taken from a factory.
///
/// These never touch the factory, so sequence counters do not move.
///
/// # Examples
///
/// ```
/// use jsonfactory_core::{Overrides, Record, RecordExt};
/// use serde_json::json;
///
/// let mut record = Record::new();
/// record.insert("id".to_string(), json!(1));
/// record.insert("name".to_string(), json!("Story 1"));
///
/// assert_eq!(record.to_json().unwrap(), r#"{"id":1,"name":"Story 1"}"#);
///
/// let renamed = record.to_json_with(&Overrides::new().set("name", "Bas")).unwrap();
/// assert_eq!(renamed, r#"{"id":1,"name":"Bas"}"#);
/// ```
pub trait RecordExt {
	/// Compact JSON encoding.
	fn to_json(&self) -> FactoryResult<String>;

	/// Compact JSON encoding of a copy with `overrides` merged in.
	///
	/// Every override key is written, including ones the record lacks
	/// (appended after the record's own fields).
	fn to_json_with(&self, overrides: &Overrides) -> FactoryResult<String>;

	/// Indented JSON encoding.
	fn to_json_pretty(&self) -> FactoryResult<String>;
}

impl RecordExt for Record {
	fn to_json(&self) -> FactoryResult<String> {
		encode(self)
	}

	fn to_json_with(&self, overrides: &Overrides) -> FactoryResult<String> {
		let mut merged = self.clone();
		for (field, value) in overrides.iter() {
			merged.insert(field.clone(), value.clone());
		}
		encode(&merged)
	}

	fn to_json_pretty(&self) -> FactoryResult<String> {
		Ok(serde_json::to_string_pretty(self)?)
	}
}
