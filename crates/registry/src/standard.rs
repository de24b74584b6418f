//! Standard enumeration providers.
//!
//! A provider is the read-only source of pre-existing enums the registry
//! falls back to. The registry never writes to it.

use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use crate::enum_type::Enum;
use crate::error::{EnumError, EnumSource, ProviderError, Result};
use crate::item::EnumItem;

/// A standard table: enum name plus `(item name, value)` pairs.
pub type StandardTable = (&'static str, &'static [(&'static str, u64)]);

/// Read-only source of built-in enumerations.
pub trait StandardProvider: Send + Sync {
	/// Returns the named enum, failing if absent.
	fn get(&self, name: &str) -> Result<Arc<Enum>, ProviderError>;

	/// Existence check.
	fn contains(&self, name: &str) -> bool {
		self.get(name).is_ok()
	}

	/// Returns the named item of the named enum, failing if either is absent.
	fn item(&self, enum_name: &str, item_name: &str) -> Result<EnumItem, ProviderError> {
		let e = self.get(enum_name)?;
		e.get(item_name)
			.cloned()
			.ok_or_else(|| ProviderError::UnknownItem {
				enum_name: enum_name.to_string(),
				item: item_name.to_string(),
			})
	}

	/// Names of every enum this provider exposes.
	fn names(&self) -> Vec<String>;
}

/// Provider backed by a fixed, in-memory set of enums.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
	enums: IndexMap<Box<str>, Arc<Enum>, FxBuildHasher>,
}

impl StaticProvider {
	/// Builds a provider from static tables.
	pub fn from_tables(tables: &[StandardTable]) -> Result<Self> {
		Self::from_definitions(tables.iter().map(|(name, items)| (*name, items.iter().copied())))
	}

	/// Builds a provider from `(enum name, items)` definitions.
	///
	/// Each enum must satisfy the structural invariants of [`Enum::from_items`];
	/// enum names must be unique.
	pub fn from_definitions<I, N, J, S>(defs: I) -> Result<Self>
	where
		I: IntoIterator<Item = (N, J)>,
		N: AsRef<str>,
		J: IntoIterator<Item = (S, u64)>,
		S: AsRef<str>,
	{
		let mut enums: IndexMap<Box<str>, Arc<Enum>, FxBuildHasher> = IndexMap::default();
		for (name, items) in defs {
			let name = name.as_ref();
			if enums.contains_key(name) {
				return Err(EnumError::DuplicateEnum {
					name: name.to_string(),
					origin: EnumSource::Standard,
				});
			}
			let e = Enum::from_items(name, items)?;
			enums.insert(Box::from(name), Arc::new(e));
		}
		Ok(Self { enums })
	}

	pub fn len(&self) -> usize {
		self.enums.len()
	}

	pub fn is_empty(&self) -> bool {
		self.enums.is_empty()
	}
}

impl StandardProvider for StaticProvider {
	fn get(&self, name: &str) -> Result<Arc<Enum>, ProviderError> {
		self.enums
			.get(name)
			.cloned()
			.ok_or_else(|| ProviderError::UnknownEnum(name.to_string()))
	}

	fn contains(&self, name: &str) -> bool {
		self.enums.contains_key(name)
	}

	fn names(&self) -> Vec<String> {
		self.enums.keys().map(|k| k.to_string()).collect()
	}
}

/// Provider exposing no enums.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyProvider;

impl StandardProvider for EmptyProvider {
	fn get(&self, name: &str) -> Result<Arc<Enum>, ProviderError> {
		Err(ProviderError::UnknownEnum(name.to_string()))
	}

	fn contains(&self, _name: &str) -> bool {
		false
	}

	fn names(&self) -> Vec<String> {
		Vec::new()
	}
}
