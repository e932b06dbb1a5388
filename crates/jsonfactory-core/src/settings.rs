//! Factory settings and the process-wide strict-mode toggle.
//!
//! Every [`Factory`](crate::Factory) either pins its own [`FactorySettings`]
//! or follows the process-wide settings stored here. The process-wide
//! `whiny` flag is a deliberate global switch: flipping it affects every
//! factory that did not pin settings, at its next call.
//!
//! # Example
//!
//! ```
//! use jsonfactory_core::settings::{self, FactorySettings, OverrideMode};
//!
//! let pinned = FactorySettings::new()
//!     .with_whiny(false)
//!     .with_override_mode(OverrideMode::Truthy);
//! assert!(!pinned.whiny);
//!
//! assert!(settings::is_whiny());
//! ```

use std::str::FromStr;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Environment variable controlling strict mode.
pub const WHINY_ENV: &str = "JSONFACTORY_WHINY";

/// Environment variable selecting the override mode.
pub const OVERRIDE_MODE_ENV: &str = "JSONFACTORY_OVERRIDE_MODE";

/// How per-call overrides are matched against registered fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverrideMode {
	/// An override applies whenever its key is present, whatever the value.
	#[default]
	Presence,
	/// Legacy behavior: an override applies only when its value is truthy,
	/// so `0`, `""`, `false` and `null` fall through to the stored default.
	Truthy,
}

impl FromStr for OverrideMode {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"presence" => Ok(Self::Presence),
			"truthy" => Ok(Self::Truthy),
			other => Err(format!("unknown override mode: {}", other)),
		}
	}
}

/// Behavioral switches for a factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactorySettings {
	/// Strict mode. When on, snapshots require `set_fields` first and
	/// defaults may only target registered fields.
	pub whiny: bool,

	/// Override matching rule.
	pub override_mode: OverrideMode,
}

impl FactorySettings {
	/// Creates settings with strict mode on and presence-based overrides.
	pub fn new() -> Self {
		Self {
			whiny: true,
			override_mode: OverrideMode::Presence,
		}
	}

	/// Sets strict mode.
	pub fn with_whiny(mut self, whiny: bool) -> Self {
		self.whiny = whiny;
		self
	}

	/// Sets the override mode.
	pub fn with_override_mode(mut self, mode: OverrideMode) -> Self {
		self.override_mode = mode;
		self
	}

	/// Loads settings from `JSONFACTORY_WHINY` and `JSONFACTORY_OVERRIDE_MODE`.
	///
	/// Missing variables keep their defaults. Unparseable values are logged
	/// and ignored.
	pub fn from_env() -> Self {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Loads settings through an arbitrary variable lookup.
	///
	/// # Examples
	///
	/// ```
	/// use jsonfactory_core::settings::{FactorySettings, OverrideMode};
	///
	/// let settings = FactorySettings::from_lookup(|key| match key {
	///     "JSONFACTORY_WHINY" => Some("off".to_string()),
	///     "JSONFACTORY_OVERRIDE_MODE" => Some("Truthy".to_string()),
	///     _ => None,
	/// });
	/// assert!(!settings.whiny);
	/// assert_eq!(settings.override_mode, OverrideMode::Truthy);
	/// ```
	pub fn from_lookup<F>(lookup: F) -> Self
	where
		F: Fn(&str) -> Option<String>,
	{
		let mut settings = Self::new();

		if let Some(value) = lookup(WHINY_ENV) {
			match parse_bool(&value) {
				Some(whiny) => settings.whiny = whiny,
				None => tracing::warn!(key = WHINY_ENV, value = %value, "Ignoring invalid boolean"),
			}
		}

		if let Some(value) = lookup(OVERRIDE_MODE_ENV) {
			match value.parse::<OverrideMode>() {
				Ok(mode) => settings.override_mode = mode,
				Err(e) => tracing::warn!(key = OVERRIDE_MODE_ENV, error = %e, "Ignoring invalid override mode"),
			}
		}

		settings
	}
}

impl Default for FactorySettings {
	fn default() -> Self {
		Self::new()
	}
}

fn parse_bool(value: &str) -> Option<bool> {
	match value.trim().to_lowercase().as_str() {
		"true" | "1" | "yes" | "on" => Some(true),
		"false" | "0" | "no" | "off" => Some(false),
		_ => None,
	}
}

/// Process-wide settings used by factories without pinned settings.
static GLOBAL_SETTINGS: Lazy<RwLock<FactorySettings>> =
	Lazy::new(|| RwLock::new(FactorySettings::new()));

/// Returns a copy of the process-wide settings.
pub fn global_settings() -> FactorySettings {
	*GLOBAL_SETTINGS.read()
}

/// Replaces the process-wide settings.
pub fn set_global_settings(settings: FactorySettings) {
	tracing::debug!(
		whiny = settings.whiny,
		override_mode = ?settings.override_mode,
		"Updating global factory settings"
	);
	*GLOBAL_SETTINGS.write() = settings;
}

/// Restores the process-wide settings to their defaults.
///
/// This is primarily useful for testing.
pub fn reset_global_settings() {
	set_global_settings(FactorySettings::new());
}

/// Returns whether process-wide strict mode is on.
pub fn is_whiny() -> bool {
	GLOBAL_SETTINGS.read().whiny
}

/// Turns process-wide strict mode on or off.
pub fn set_whiny(whiny: bool) {
	GLOBAL_SETTINGS.write().whiny = whiny;
}
