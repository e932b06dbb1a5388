//! # jsonfactory
//!
//! Build JSON test data programmatically.
//!
//! A [`Factory`] registers a named set of fields, gives them static or
//! sequential defaults, and snapshots them as ordered JSON objects or JSON
//! strings. Snapshots accept per-call overrides, and every sequence field
//! advances once per snapshot, so the same record can be reused across a
//! fake `POST` and a later `GET` in one test.
//!
//! ## Quick Example
//!
//! ```rust
//! use jsonfactory::prelude::*;
//! use serde_json::json;
//!
//! let mut widgets = Factory::configure("widget", |f| {
//!     f.set_fields(["id", "name", "position"]);
//!     f.set_sequence("id", None)?;
//!     f.set_sequence_with("name", None, |n| format!("Widget {}", n))?;
//!     f.set_sequence("position", Some(0))
//! })
//! .unwrap();
//!
//! let widget = widgets.snapshot_with(&Overrides::new().set("name", "Widget A")).unwrap();
//! assert_eq!(widget["id"], json!(1));
//! assert_eq!(widget["position"], json!(0));
//!
//! // The same record, serialized twice, stays identical.
//! assert_eq!(widget.to_json().unwrap(), Factory::as_json(&widget).unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`error`] - `FactoryError` and `FactoryResult`
//! - [`settings`] - strict mode, override mode and the process-wide toggle
//! - [`field`] - static and sequence defaults
//! - [`overrides`] - per-call overrides
//! - [`record`] - snapshot records and JSON helpers

pub use jsonfactory_core::{
	Factory, FactoryError, FactoryResult, FactorySettings, FieldDefault, FieldSpec, OverrideMode,
	Overrides, Record, RecordExt, SequenceFn, SequenceState,
};
pub use jsonfactory_core::{error, factory, field, overrides, record, settings};

/// Prelude module for convenient imports
pub mod prelude {
	pub use jsonfactory_core::prelude::*;
}
