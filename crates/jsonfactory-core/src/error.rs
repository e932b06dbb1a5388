//! Error types for factory operations.
//!
//! Both usage errors are raised synchronously at the offending call so that
//! a misconfigured factory fails the test that uses it.

use thiserror::Error;

/// Errors that can occur while configuring or snapshotting a factory.
#[derive(Debug, Error)]
pub enum FactoryError {
	/// A snapshot was requested before `set_fields` while strict mode is on.
	#[error("Factory '{factory}' is not configured: call set_fields before generating records")]
	NotConfigured {
		/// Name of the factory.
		factory: String,
	},

	/// A default was set on a field that was never registered.
	#[error("Field '{field}' is not registered on factory '{factory}'")]
	UnregisteredField {
		/// Name of the factory.
		factory: String,
		/// Field that was not registered.
		field: String,
	},

	/// A sequence counter cannot advance past `i64::MAX`.
	#[error("Sequence for field '{field}' on factory '{factory}' is exhausted")]
	SequenceOverflow {
		/// Name of the factory.
		factory: String,
		/// Sequence field whose counter would overflow.
		field: String,
	},

	/// JSON encoding failed.
	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}

/// Result type alias for factory operations.
pub type FactoryResult<T> = Result<T, FactoryError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_not_configured_error() {
		let error = FactoryError::NotConfigured {
			factory: "story".to_string(),
		};
		assert_eq!(
			error.to_string(),
			"Factory 'story' is not configured: call set_fields before generating records"
		);
	}

	#[rstest]
	fn test_unregistered_field_error() {
		let error = FactoryError::UnregisteredField {
			factory: "story".to_string(),
			field: "title".to_string(),
		};
		assert_eq!(
			error.to_string(),
			"Field 'title' is not registered on factory 'story'"
		);
	}

	#[rstest]
	fn test_sequence_overflow_error() {
		let error = FactoryError::SequenceOverflow {
			factory: "story".to_string(),
			field: "id".to_string(),
		};
		assert_eq!(
			error.to_string(),
			"Sequence for field 'id' on factory 'story' is exhausted"
		);
	}

	#[rstest]
	fn test_json_error_from() {
		let json_error: serde_json::Error =
			serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
		let factory_error: FactoryError = json_error.into();
		assert!(matches!(factory_error, FactoryError::Serialization(_)));
	}
}
