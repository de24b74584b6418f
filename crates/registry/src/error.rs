//! Error types for enum definition and lookup.

use std::fmt;

/// Programmatically distinguishable error categories.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
	/// An argument had the wrong shape (empty name, negative key or value).
	InvalidArgumentType,
	/// A name collides with a registry operation or item-enumeration method.
	ReservedName,
	/// An enum name, item key or item name collides where overwrite is disallowed.
	DuplicateDefinition,
	/// A zero-item enum was defined while empty enums are disallowed.
	EmptyDefinition,
	/// An item name fails the identifier naming convention.
	InvalidIdentifier,
	/// A strict lookup found no enum or item under the requested name.
	NoSuchMember,
	/// A write was attempted against an enum, item or the registry.
	ImmutableWrite,
}

/// Where an already-existing enum name lives.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum EnumSource {
	/// Registered through [`EnumRegistry::create`](crate::EnumRegistry::create).
	User,
	/// Exposed by the standard enumeration provider.
	Standard,
}

impl fmt::Display for EnumSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			EnumSource::User => write!(f, "user"),
			EnumSource::Standard => write!(f, "standard"),
		}
	}
}

/// Which half of an item entry collided.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ItemField {
	/// The integer key (item value).
	Key,
	/// The item name.
	Name,
}

impl fmt::Display for ItemField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ItemField::Key => write!(f, "key"),
			ItemField::Name => write!(f, "name"),
		}
	}
}

/// What a strict lookup was searching for.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MemberKind {
	/// An enum, looked up on the registry.
	Enumerator,
	/// An item, looked up on an enum.
	Item,
}

impl fmt::Display for MemberKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			MemberKind::Enumerator => write!(f, "enumerator"),
			MemberKind::Item => write!(f, "enum item"),
		}
	}
}

/// Errors raised while defining, resolving or writing enumerations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnumError {
	/// An argument failed a shape or range check.
	#[error("invalid argument `{argument}`: {reason}")]
	InvalidArgument {
		/// Name of the offending argument.
		argument: &'static str,
		/// Human-readable explanation.
		reason: String,
	},

	/// A name collides with a reserved method name.
	#[error("`{name}` is reserved as a {context} name")]
	ReservedName {
		/// The rejected name.
		name: String,
		/// What the name is reserved for.
		context: &'static str,
	},

	/// The enum name is already taken.
	#[error("enum `{name}` already exists as a {origin} enum")]
	DuplicateEnum {
		/// The enum name.
		name: String,
		/// Where the existing definition lives.
		origin: EnumSource,
	},

	/// Two items in one definition share a key or a name.
	#[error("duplicate item {field} `{key}` in `{enum_name}`")]
	DuplicateItem {
		/// Enum being defined.
		enum_name: String,
		/// Which field collided.
		field: ItemField,
		/// The colliding key or name, rendered as text.
		key: String,
	},

	/// A zero-item enum was rejected.
	#[error("enum `{name}` has no items and empty enums are not allowed")]
	EmptyDefinition {
		/// The enum name.
		name: String,
	},

	/// An item name is not a valid identifier.
	#[error("item name `{item}` in `{enum_name}` is not a valid identifier")]
	InvalidIdentifier {
		/// Enum being defined.
		enum_name: String,
		/// The rejected item name.
		item: String,
	},

	/// Strict lookup of a missing enum or item.
	#[error("no such {kind} `{name}` in `{owner}`{}", suggestion.as_ref().map(|s| format!(" (did you mean `{s}`?)")).unwrap_or_default())]
	NoSuchMember {
		/// What was being looked up.
		kind: MemberKind,
		/// The enum (or registry) that was searched.
		owner: String,
		/// The missing name.
		name: String,
		/// Closest known name, if any is near enough.
		suggestion: Option<String>,
	},

	/// Attempted mutation of read-only data.
	#[error("cannot assign `{member}` on `{target}`: enumerations are read-only")]
	ImmutableWrite {
		/// Rendered form of the written object.
		target: String,
		/// The member the caller tried to assign.
		member: String,
	},
}

impl EnumError {
	/// Returns the error category.
	pub fn kind(&self) -> ErrorKind {
		match self {
			EnumError::InvalidArgument { .. } => ErrorKind::InvalidArgumentType,
			EnumError::ReservedName { .. } => ErrorKind::ReservedName,
			EnumError::DuplicateEnum { .. } | EnumError::DuplicateItem { .. } => {
				ErrorKind::DuplicateDefinition
			}
			EnumError::EmptyDefinition { .. } => ErrorKind::EmptyDefinition,
			EnumError::InvalidIdentifier { .. } => ErrorKind::InvalidIdentifier,
			EnumError::NoSuchMember { .. } => ErrorKind::NoSuchMember,
			EnumError::ImmutableWrite { .. } => ErrorKind::ImmutableWrite,
		}
	}

	pub(crate) fn invalid(argument: &'static str, reason: impl Into<String>) -> Self {
		EnumError::InvalidArgument {
			argument,
			reason: reason.into(),
		}
	}

	pub(crate) fn immutable(target: impl fmt::Display, member: &str) -> Self {
		EnumError::ImmutableWrite {
			target: target.to_string(),
			member: member.to_string(),
		}
	}
}

/// Errors reported by a standard enumeration provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
	/// No standard enum with this name.
	#[error("no standard enum named `{0}`")]
	UnknownEnum(String),

	/// The standard enum exists but lacks the item.
	#[error("standard enum `{enum_name}` has no item `{item}`")]
	UnknownItem {
		/// The standard enum.
		enum_name: String,
		/// The missing item name.
		item: String,
	},

	/// The provider could not answer at all.
	#[error("standard enum provider unavailable: {0}")]
	Unavailable(String),
}

/// Result alias defaulting to [`EnumError`].
pub type Result<T, E = EnumError> = std::result::Result<T, E>;

/// Suggests the closest candidate within edit distance 3.
pub(crate) fn suggest<'a>(key: &str, candidates: impl IntoIterator<Item = &'a str>) -> Option<String> {
	candidates
		.into_iter()
		.filter(|c| *c != key)
		.min_by_key(|c| strsim::levenshtein(key, c))
		.filter(|c| strsim::levenshtein(key, c) <= 3)
		.map(str::to_string)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn kinds_group_duplicate_variants() {
		let dup_enum = EnumError::DuplicateEnum {
			name: "Difficulty".into(),
			origin: EnumSource::User,
		};
		let dup_item = EnumError::DuplicateItem {
			enum_name: "Difficulty".into(),
			field: ItemField::Key,
			key: "1".into(),
		};
		assert_eq!(dup_enum.kind(), ErrorKind::DuplicateDefinition);
		assert_eq!(dup_item.kind(), ErrorKind::DuplicateDefinition);
	}

	#[test]
	fn no_such_member_renders_suggestion() {
		let err = EnumError::NoSuchMember {
			kind: MemberKind::Item,
			owner: "Difficulty".into(),
			name: "Hrad".into(),
			suggestion: Some("Hard".into()),
		};
		assert_eq!(
			err.to_string(),
			"no such enum item `Hrad` in `Difficulty` (did you mean `Hard`?)"
		);
	}

	#[test]
	fn suggest_ignores_distant_names() {
		assert_eq!(suggest("Normal", ["Easy", "Nromal"]), Some("Nromal".into()));
		assert_eq!(suggest("Normal", ["Unrelated"]), None);
	}
}
