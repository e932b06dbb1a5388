//! In-memory JSON factories for test data.
//!
//! A factory holds a named set of fields with static or sequential defaults
//! and produces snapshots of them, either as ordered JSON objects or as JSON
//! strings, with per-call overrides.
//!
//! # Quick Start
//!
//! ```
//! use jsonfactory_core::prelude::*;
//! use serde_json::json;
//!
//! let mut widgets = Factory::configure("widget", |f| {
//!     f.set_fields(["id", "name", "active"]);
//!     f.set_sequence("id", None)?;
//!     f.set_sequence_with("name", None, |n| format!("Widget {}", n))?;
//!     f.set_default("active", true)
//! })
//! .unwrap();
//!
//! assert_eq!(
//!     widgets.to_json().unwrap(),
//!     r#"{"id":1,"name":"Widget 1","active":true}"#
//! );
//!
//! // Sequences advance on every snapshot, overridden or not.
//! let record = widgets
//!     .snapshot_with(&Overrides::new().set("name", "Custom"))
//!     .unwrap();
//! assert_eq!(record["id"], json!(2));
//! assert_eq!(record["name"], json!("Custom"));
//! ```
//!
//! # Strict mode
//!
//! By default a factory refuses to snapshot before [`Factory::set_fields`]
//! and refuses defaults for unregistered fields. The process-wide switch
//! lives in [`settings`]; individual factories can pin their own
//! [`FactorySettings`] instead.
//!
//! # Overrides
//!
//! [`OverrideMode::Presence`] (the default) applies an override whenever its
//! key is supplied. [`OverrideMode::Truthy`] reproduces the legacy behavior
//! where falsy overrides (`0`, `""`, `false`, `null`) are ignored.

#![warn(missing_docs)]

pub mod error;
pub mod factory;
pub mod field;
pub mod overrides;
pub mod prelude;
pub mod record;
pub mod settings;

pub use error::{FactoryError, FactoryResult};
pub use factory::Factory;
pub use field::{FieldDefault, FieldSpec, SequenceFn, SequenceState};
pub use overrides::Overrides;
pub use record::{Record, RecordExt};
pub use settings::{FactorySettings, OverrideMode};
