//! Per-field state: stored values and sequences.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// Generator turning a sequence counter into a field value.
pub type SequenceFn = Arc<dyn Fn(i64) -> Value + Send + Sync>;

/// Counter used when a sequence is installed without a seed.
pub const DEFAULT_SEED: i64 = 1;

/// Default assigned to a registered field.
#[derive(Clone)]
pub enum FieldDefault {
	/// A value repeated verbatim in every snapshot.
	Static(Value),
	/// A counter advanced on every snapshot.
	Sequence {
		/// Starting counter. `None` starts at [`DEFAULT_SEED`]; `Some(0)` is a valid seed.
		seed: Option<i64>,
		/// Optional mapping from counter to value. Without one the counter
		/// itself is the value.
		generator: Option<SequenceFn>,
	},
}

impl FieldDefault {
	/// Static default.
	pub fn value(value: impl Into<Value>) -> Self {
		Self::Static(value.into())
	}

	/// Plain integer sequence.
	pub fn sequence(seed: Option<i64>) -> Self {
		Self::Sequence {
			seed,
			generator: None,
		}
	}

	/// Sequence mapped through `generator`.
	pub fn sequence_with<F, V>(seed: Option<i64>, generator: F) -> Self
	where
		F: Fn(i64) -> V + Send + Sync + 'static,
		V: Into<Value>,
	{
		Self::Sequence {
			seed,
			generator: Some(Arc::new(move |n| generator(n).into())),
		}
	}
}

impl fmt::Debug for FieldDefault {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Static(value) => f.debug_tuple("Static").field(value).finish(),
			Self::Sequence { seed, generator } => f
				.debug_struct("Sequence")
				.field("seed", seed)
				.field("generator", &generator.as_ref().map(|_| "<fn>"))
				.finish(),
		}
	}
}

/// Running state of a sequence field.
#[derive(Clone)]
pub struct SequenceState {
	counter: i64,
	generator: Option<SequenceFn>,
}

impl SequenceState {
	/// Creates a sequence starting at `seed` (or [`DEFAULT_SEED`]).
	pub fn new(seed: Option<i64>, generator: Option<SequenceFn>) -> Self {
		Self {
			counter: seed.unwrap_or(DEFAULT_SEED),
			generator,
		}
	}

	/// Current counter.
	pub fn counter(&self) -> i64 {
		self.counter
	}

	/// Value for the current counter: `generator(counter)`, or the counter itself.
	pub fn resolve(&self) -> Value {
		match &self.generator {
			Some(generator) => generator(self.counter),
			None => Value::from(self.counter),
		}
	}

	/// Returns true if the counter can move forward without overflowing.
	pub fn can_advance(&self) -> bool {
		self.counter.checked_add(1).is_some()
	}

	/// Advances the counter by one.
	///
	/// Returns false and leaves the counter untouched at `i64::MAX`.
	pub fn advance(&mut self) -> bool {
		match self.counter.checked_add(1) {
			Some(next) => {
				self.counter = next;
				true
			}
			None => false,
		}
	}
}

impl fmt::Debug for SequenceState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SequenceState")
			.field("counter", &self.counter)
			.field("generator", &self.generator.as_ref().map(|_| "<fn>"))
			.finish()
	}
}

/// A registered field: its stored value and optional sequence.
#[derive(Debug, Clone, Default)]
pub struct FieldSpec {
	value: Value,
	sequence: Option<SequenceState>,
}

impl FieldSpec {
	/// Freshly registered field: `null`, no sequence.
	pub fn new() -> Self {
		Self::default()
	}

	/// Stored value used when no override applies.
	pub fn value(&self) -> &Value {
		&self.value
	}

	/// Sequence state, if the field is sequential.
	pub fn sequence(&self) -> Option<&SequenceState> {
		self.sequence.as_ref()
	}

	/// Installs `default`, replacing any previous value or sequence.
	///
	/// Sequences resolve their current value immediately without advancing.
	pub fn apply(&mut self, default: FieldDefault) {
		match default {
			FieldDefault::Static(value) => {
				self.value = value;
				self.sequence = None;
			}
			FieldDefault::Sequence { seed, generator } => {
				let sequence = SequenceState::new(seed, generator);
				self.value = sequence.resolve();
				self.sequence = Some(sequence);
			}
		}
	}

	/// Returns false only for a sequence whose counter is exhausted.
	pub fn can_advance(&self) -> bool {
		self.sequence.as_ref().is_none_or(SequenceState::can_advance)
	}

	/// Advances the sequence, if any, and re-resolves the stored value.
	///
	/// Returns false when the sequence counter is exhausted; the stored
	/// value is then left as it was.
	pub fn advance(&mut self) -> bool {
		match self.sequence.as_mut() {
			Some(sequence) => {
				if !sequence.advance() {
					return false;
				}
				self.value = sequence.resolve();
				true
			}
			None => true,
		}
	}
}
