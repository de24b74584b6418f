use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::error::{EnumError, Result};

/// A named, integer-valued member of an [`Enum`](crate::Enum).
///
/// Items are created only while their enum is built and carry no setters.
/// Cloning shares the underlying strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EnumItem {
	enum_type: Arc<str>,
	name: Arc<str>,
	value: u64,
}

impl EnumItem {
	pub(crate) fn new(enum_type: Arc<str>, name: Arc<str>, value: u64) -> Self {
		Self {
			enum_type,
			name,
			value,
		}
	}

	/// Item name, unique within its enum.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Item value, unique within its enum.
	pub fn value(&self) -> u64 {
		self.value
	}

	/// Type name of the owning enum.
	pub fn enum_type(&self) -> &str {
		&self.enum_type
	}

	/// Returns true if this item belongs to the enum named `enum_type`.
	pub fn is_a(&self, enum_type: &str) -> bool {
		&*self.enum_type == enum_type
	}

	/// Write entry point for dynamic bindings; always rejected.
	pub fn assign(&self, member: &str) -> Result<()> {
		Err(EnumError::immutable(self, member))
	}
}

impl PartialOrd for EnumItem {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for EnumItem {
	fn cmp(&self, other: &Self) -> Ordering {
		self.enum_type
			.cmp(&other.enum_type)
			.then(self.value.cmp(&other.value))
			.then_with(|| self.name.cmp(&other.name))
	}
}

impl fmt::Display for EnumItem {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}.{}", self.enum_type, self.name)
	}
}
