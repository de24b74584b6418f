//! Immutable enumeration container.

use std::fmt;
use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::{EnumError, ItemField, MemberKind, Result, suggest};
use crate::item::EnumItem;

/// Largest item value; values must also be addressable through the signed
/// query API.
pub const MAX_ITEM_VALUE: u64 = i64::MAX as u64;

/// A named, read-only collection of [`EnumItem`]s.
///
/// Items are kept sorted by ascending value. Names and values are unique.
#[derive(Debug, Clone)]
pub struct Enum {
	type_name: Arc<str>,
	items: Box<[EnumItem]>,
	by_name: FxHashMap<Arc<str>, usize>,
}

impl Enum {
	/// Builds an enum from `(name, value)` pairs, checking only that names are
	/// non-empty, that values do not exceed [`MAX_ITEM_VALUE`] and that names
	/// and values are unique.
	///
	/// Naming conventions and reserved names are registry policy; see
	/// [`ValidationPolicy`](crate::ValidationPolicy).
	pub fn from_items<I, S>(type_name: &str, items: I) -> Result<Self>
	where
		I: IntoIterator<Item = (S, u64)>,
		S: AsRef<str>,
	{
		if type_name.is_empty() {
			return Err(EnumError::invalid("name", "enum name must not be empty"));
		}

		let mut seen_names = FxHashSet::default();
		let mut seen_values = FxHashSet::default();
		let mut entries = Vec::new();
		for (name, value) in items {
			let name = name.as_ref();
			if name.is_empty() {
				return Err(EnumError::invalid("items", "item name must not be empty"));
			}
			if value > MAX_ITEM_VALUE {
				return Err(EnumError::invalid(
					"items",
					format!("value {value} of `{type_name}.{name}` exceeds {MAX_ITEM_VALUE}"),
				));
			}
			if !seen_values.insert(value) {
				return Err(EnumError::DuplicateItem {
					enum_name: type_name.to_string(),
					field: ItemField::Key,
					key: value.to_string(),
				});
			}
			if !seen_names.insert(name.to_string()) {
				return Err(EnumError::DuplicateItem {
					enum_name: type_name.to_string(),
					field: ItemField::Name,
					key: name.to_string(),
				});
			}
			entries.push((Arc::from(name), value));
		}
		Ok(Self::from_checked(type_name, entries))
	}

	/// Assembles an enum from entries already known to be unique.
	pub(crate) fn from_checked(type_name: &str, mut entries: Vec<(Arc<str>, u64)>) -> Self {
		let type_name: Arc<str> = Arc::from(type_name);
		entries.sort_unstable_by_key(|(_, value)| *value);

		let by_name = entries
			.iter()
			.enumerate()
			.map(|(idx, (name, _))| (Arc::clone(name), idx))
			.collect();
		let items: Box<[EnumItem]> = entries
			.into_iter()
			.map(|(name, value)| EnumItem::new(type_name.clone(), name, value))
			.collect();

		Self {
			type_name,
			items,
			by_name,
		}
	}

	/// The registry key this enum is stored under.
	pub fn name(&self) -> &str {
		&self.type_name
	}

	/// All items, ascending by value.
	pub fn items(&self) -> &[EnumItem] {
		&self.items
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, EnumItem> {
		self.items.iter()
	}

	/// Item names in value order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.items.iter().map(EnumItem::name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.by_name.contains_key(name)
	}

	/// Non-failing member lookup.
	pub fn get(&self, name: &str) -> Option<&EnumItem> {
		self.by_name.get(name).map(|&idx| &self.items[idx])
	}

	/// Strict member lookup.
	pub fn member(&self, name: &str) -> Result<&EnumItem> {
		self.get(name).ok_or_else(|| EnumError::NoSuchMember {
			kind: MemberKind::Item,
			owner: self.type_name.to_string(),
			name: name.to_string(),
			suggestion: suggest(name, self.names()),
		})
	}

	/// Finds the item carrying `value`.
	pub fn item_by_value(&self, value: u64) -> Option<&EnumItem> {
		self.items
			.binary_search_by_key(&value, EnumItem::value)
			.ok()
			.map(|idx| &self.items[idx])
	}

	/// Write entry point for dynamic bindings; always rejected.
	pub fn assign(&self, member: &str) -> Result<()> {
		Err(EnumError::immutable(self, member))
	}
}

impl PartialEq for Enum {
	fn eq(&self, other: &Self) -> bool {
		self.type_name == other.type_name && self.items == other.items
	}
}

impl Eq for Enum {}

impl fmt::Display for Enum {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.type_name)
	}
}

impl<'a> IntoIterator for &'a Enum {
	type Item = &'a EnumItem;
	type IntoIter = std::slice::Iter<'a, EnumItem>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}
