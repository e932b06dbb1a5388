//! Convenience re-exports for common usage.
//!
//! ```
//! use jsonfactory_core::prelude::*;
//!
//! let factory = Factory::new("widget");
//! assert_eq!(factory.name(), "widget");
//! ```

pub use crate::error::{FactoryError, FactoryResult};
pub use crate::factory::Factory;
pub use crate::field::FieldDefault;
pub use crate::overrides::Overrides;
pub use crate::record::{Record, RecordExt};
pub use crate::settings::{FactorySettings, OverrideMode};
