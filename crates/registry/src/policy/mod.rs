//! Creation-time validation.
//!
//! # Check order
//!
//! Checks run in a fixed order so the reported error is deterministic:
//!
//! 1. enum name non-empty and not a reserved operation name
//! 2. no existing user enum (unless user overwrite is allowed)
//! 3. no standard enum of the same name (unless standard overwrite is allowed)
//! 4. item collection non-empty (unless empty enums are allowed), keys non-negative
//! 5. per item: non-empty name, unique key, unique name, not reserved, identifier syntax
//!
//! Validation never touches registry state. Conditions that are allowed but
//! suspicious are returned as [`RegistryWarning`]s alongside the validated items.

use std::sync::Arc;

use rustc_hash::FxHashSet;

use crate::enum_type::Enum;
use crate::error::{EnumError, EnumSource, ItemField, Result};
use crate::flags::RegistryFlags;
use crate::warning::RegistryWarning;


/// Registry operation names no user enum may take. Matched ASCII case-insensitively.
pub const RESERVED_ENUM_NAMES: &[&str] = &[
	"new",
	"create",
	"find",
	"get",
	"getStandardEnums",
	"fromValue",
	ITEM_ENUMERATION_METHOD,
];

/// Method name used to enumerate an enum's items; no item may take it.
pub const ITEM_ENUMERATION_METHOD: &str = "getEnumItems";

pub fn is_reserved_enum_name(name: &str) -> bool {
	RESERVED_ENUM_NAMES
		.iter()
		.any(|reserved| reserved.eq_ignore_ascii_case(name))
}

pub fn is_reserved_item_name(name: &str) -> bool {
	ITEM_ENUMERATION_METHOD.eq_ignore_ascii_case(name)
}

/// Returns true for `[A-Za-z_][A-Za-z0-9_]*`.
pub fn is_identifier(name: &str) -> bool {
	let mut chars = name.chars();
	match chars.next() {
		Some(first) if first.is_ascii_alphabetic() || first == '_' => {
			chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
		}
		_ => false,
	}
}

/// Read access to the names a new definition may collide with.
pub trait NameScope {
	/// Whether a user enum with this name is registered.
	fn has_user_enum(&self, name: &str) -> bool;

	/// Whether the standard provider exposes this name. Must not fail.
	fn has_standard_enum(&self, name: &str) -> bool;
}

/// Applies [`RegistryFlags`] to enum definitions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationPolicy {
	flags: RegistryFlags,
}

impl ValidationPolicy {
	pub fn new(flags: RegistryFlags) -> Self {
		Self { flags }
	}

	pub fn flags(&self) -> RegistryFlags {
		self.flags
	}

	/// Validates a definition of `name` with `(value, item name)` entries.
	pub fn validate<I, S>(&self, name: &str, items: I, scope: &impl NameScope) -> Result<ValidatedEnum>
	where
		I: IntoIterator<Item = (i64, S)>,
		S: AsRef<str>,
	{
		let mut warnings = Vec::new();

		self.check_name(name)?;

		if scope.has_user_enum(name) {
			if !self.flags.allow_user_overwrite {
				return Err(EnumError::DuplicateEnum {
					name: name.to_string(),
					origin: EnumSource::User,
				});
			}
			warnings.push(RegistryWarning::UserOverwrite {
				name: name.to_string(),
			});
		}

		if scope.has_standard_enum(name) {
			if !self.flags.allow_standard_overwrite {
				return Err(EnumError::DuplicateEnum {
					name: name.to_string(),
					origin: EnumSource::Standard,
				});
			}
			warnings.push(RegistryWarning::StandardShadowed {
				name: name.to_string(),
			});
		}

		let items: Vec<(i64, S)> = items.into_iter().collect();
		if items.is_empty() {
			if !self.flags.allow_empty {
				return Err(EnumError::EmptyDefinition {
					name: name.to_string(),
				});
			}
			warnings.push(RegistryWarning::EmptyEnum {
				name: name.to_string(),
			});
		}
		if let Some((key, _)) = items.iter().find(|(key, _)| *key < 0) {
			return Err(EnumError::invalid(
				"items",
				format!("item key {key} in `{name}` is negative"),
			));
		}

		let entries = self.check_items(name, &items)?;
		Ok(ValidatedEnum {
			name: name.to_string(),
			entries,
			warnings,
		})
	}

	fn check_name(&self, name: &str) -> Result<()> {
		if name.is_empty() {
			return Err(EnumError::invalid("name", "enum name must not be empty"));
		}
		if is_reserved_enum_name(name) {
			return Err(EnumError::ReservedName {
				name: name.to_string(),
				context: "registry operation",
			});
		}
		Ok(())
	}

	fn check_items<S: AsRef<str>>(&self, enum_name: &str, items: &[(i64, S)]) -> Result<Vec<(Arc<str>, u64)>> {
		let mut seen_keys = FxHashSet::default();
		let mut seen_names = FxHashSet::default();
		let mut entries = Vec::with_capacity(items.len());

		for (key, item) in items {
			let item = item.as_ref();
			if item.is_empty() {
				return Err(EnumError::invalid(
					"items",
					format!("item {key} in `{enum_name}` has an empty name"),
				));
			}
			if !seen_keys.insert(*key) {
				return Err(EnumError::DuplicateItem {
					enum_name: enum_name.to_string(),
					field: ItemField::Key,
					key: key.to_string(),
				});
			}
			if !seen_names.insert(item) {
				return Err(EnumError::DuplicateItem {
					enum_name: enum_name.to_string(),
					field: ItemField::Name,
					key: item.to_string(),
				});
			}
			if is_reserved_item_name(item) {
				return Err(EnumError::ReservedName {
					name: item.to_string(),
					context: "item enumeration method",
				});
			}
			if self.flags.enforce_identifier_naming && !is_identifier(item) {
				return Err(EnumError::InvalidIdentifier {
					enum_name: enum_name.to_string(),
					item: item.to_string(),
				});
			}
			// Keys were checked non-negative before this pass.
			let value = u64::try_from(*key).map_err(|_| {
				EnumError::invalid("items", format!("item key {key} is out of range"))
			})?;
			entries.push((Arc::from(item), value));
		}
		Ok(entries)
	}
}

/// A definition that passed every check, ready to become an [`Enum`].
#[derive(Debug, Clone)]
pub struct ValidatedEnum {
	name: String,
	entries: Vec<(Arc<str>, u64)>,
	warnings: Vec<RegistryWarning>,
}

impl ValidatedEnum {
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Warnings raised by permitted-but-suspicious conditions, in check order.
	pub fn warnings(&self) -> &[RegistryWarning] {
		&self.warnings
	}

	pub fn into_enum(self) -> Enum {
		Enum::from_checked(&self.name, self.entries)
	}
}
