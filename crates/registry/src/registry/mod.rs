//! The registry facade.
//!
//! # Role
//!
//! [`EnumRegistry`] owns user-defined enums and resolves lookups against them
//! first, then against a read-only [`StandardProvider`].
//!
//! # Invariants
//!
//! - `create` validates and inserts under one write lock, so a failed
//!   validation leaves the mapping untouched.
//! - No caller code runs under the lock: `create` drains its item iterator
//!   before locking and emits warnings after the guard is released.
//! - Reserved operation names never resolve, in any lookup.
//! - Provider failures during a lookup are treated as "not found".

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;
use rustc_hash::FxBuildHasher;
use tracing::{debug, trace};

use crate::enum_type::Enum;
use crate::error::{EnumError, MemberKind, Result, suggest};
use crate::flags::RegistryFlags;
use crate::item::EnumItem;
use crate::policy::{NameScope, ValidationPolicy, is_reserved_enum_name};
use crate::standard::{EmptyProvider, StandardProvider};


type EnumMap = IndexMap<Box<str>, Arc<Enum>, FxBuildHasher>;

/// Unified namespace of user-defined and standard enums.
pub struct EnumRegistry {
	policy: ValidationPolicy,
	provider: Arc<dyn StandardProvider>,
	user: RwLock<EnumMap>,
}

impl Default for EnumRegistry {
	fn default() -> Self {
		Self::new(Arc::new(EmptyProvider))
	}
}

impl std::fmt::Debug for EnumRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("EnumRegistry")
			.field("flags", &self.flags())
			.field("user_enums", &self.user_enum_names())
			.finish_non_exhaustive()
	}
}

impl EnumRegistry {
	/// Creates a registry with default flags.
	pub fn new(provider: Arc<dyn StandardProvider>) -> Self {
		Self::with_flags(provider, RegistryFlags::default())
	}

	pub fn with_flags(provider: Arc<dyn StandardProvider>, flags: RegistryFlags) -> Self {
		Self {
			policy: ValidationPolicy::new(flags),
			provider,
			user: RwLock::new(EnumMap::default()),
		}
	}

	/// Defines a new enum from `(value, item name)` entries.
	///
	/// Fails without side effects if any policy check fails. Overwrites an
	/// existing user enum only when [`RegistryFlags::allow_user_overwrite`] is set.
	pub fn create<I, S>(&self, name: &str, items: I) -> Result<()>
	where
		I: IntoIterator<Item = (i64, S)>,
		S: AsRef<str>,
	{
		// Caller iterators may read this registry; drain them before locking.
		let items: Vec<(i64, S)> = items.into_iter().collect();

		let (warnings, count, replaced) = {
			let mut user = self.user.write();
			let scope = Scope {
				user: &user,
				provider: self.provider.as_ref(),
			};
			let validated = self.policy.validate(name, items, &scope)?;
			let warnings = validated.warnings().to_vec();
			let e = Arc::new(validated.into_enum());
			let count = e.len();
			let replaced = user.insert(Box::from(name), e).is_some();
			(warnings, count, replaced)
		};

		if self.policy.flags().warnings_enabled {
			for warning in &warnings {
				warning.emit();
			}
		}
		trace!(enum_name = name, items = count, replaced, "registered enum");
		Ok(())
	}

	/// Resolves `name` against user enums, then the standard provider.
	///
	/// Never fails: reserved and unknown names yield `None`.
	pub fn find(&self, name: &str) -> Option<Arc<Enum>> {
		if name.is_empty() || is_reserved_enum_name(name) {
			return None;
		}
		if let Some(e) = self.user.read().get(name) {
			return Some(e.clone());
		}
		lookup_standard(self.provider.as_ref(), name)
	}

	/// Strict variant of [`find`](Self::find).
	pub fn get(&self, name: &str) -> Result<Arc<Enum>> {
		self.find(name).ok_or_else(|| {
			let mut known = self.user_enum_names();
			known.extend(self.provider.names());
			EnumError::NoSuchMember {
				kind: MemberKind::Enumerator,
				owner: "registry".to_string(),
				name: name.to_string(),
				suggestion: suggest(name, known.iter().map(String::as_str)),
			}
		})
	}

	/// Strict two-level lookup of `enum_name.item_name`.
	pub fn item(&self, enum_name: &str, item_name: &str) -> Result<EnumItem> {
		self.get(enum_name)?.member(item_name).cloned()
	}

	/// The original provider, bypassing any user enum that shadows it.
	pub fn standard_enums(&self) -> &Arc<dyn StandardProvider> {
		&self.provider
	}

	/// Reverse-resolves `value` within the enum `name`.
	///
	/// Arguments are checked before any lookup: `name` must be a non-empty,
	/// non-reserved string and `value` must be non-negative. The enum itself
	/// must exist; a value with no matching item yields `Ok(None)`.
	pub fn from_value(&self, name: &str, value: i64) -> Result<Option<EnumItem>> {
		if name.is_empty() {
			return Err(EnumError::invalid("name", "enum name must not be empty"));
		}
		if is_reserved_enum_name(name) {
			return Err(EnumError::ReservedName {
				name: name.to_string(),
				context: "registry operation",
			});
		}
		let Ok(value) = u64::try_from(value) else {
			return Err(EnumError::invalid(
				"value",
				format!("value {value} is negative"),
			));
		};

		let e = self.get(name)?;
		Ok(e.item_by_value(value).cloned())
	}

	/// Write entry point for dynamic bindings; always rejected.
	pub fn assign(&self, member: &str) -> Result<()> {
		Err(EnumError::immutable("registry", member))
	}

	pub fn flags(&self) -> RegistryFlags {
		self.policy.flags()
	}

	pub fn allows_user_overwrite(&self) -> bool {
		self.flags().allow_user_overwrite
	}

	pub fn allows_standard_overwrite(&self) -> bool {
		self.flags().allow_standard_overwrite
	}

	pub fn allows_empty(&self) -> bool {
		self.flags().allow_empty
	}

	pub fn enforces_identifier_naming(&self) -> bool {
		self.flags().enforce_identifier_naming
	}

	pub fn warnings_enabled(&self) -> bool {
		self.flags().warnings_enabled
	}

	/// User enum names in registration order.
	pub fn user_enum_names(&self) -> Vec<String> {
		self.user.read().keys().map(|k| k.to_string()).collect()
	}

	pub fn contains_user_enum(&self, name: &str) -> bool {
		self.user.read().contains_key(name)
	}

	/// Number of user-defined enums.
	pub fn len(&self) -> usize {
		self.user.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.user.read().is_empty()
	}
}

fn lookup_standard(provider: &dyn StandardProvider, name: &str) -> Option<Arc<Enum>> {
	match provider.get(name) {
		Ok(e) => Some(e),
		Err(error) => {
			debug!(enum_name = name, %error, "standard enum lookup missed");
			None
		}
	}
}

/// Collision view over the locked user map and the provider.
struct Scope<'a> {
	user: &'a EnumMap,
	provider: &'a dyn StandardProvider,
}

impl NameScope for Scope<'_> {
	fn has_user_enum(&self, name: &str) -> bool {
		self.user.contains_key(name)
	}

	fn has_standard_enum(&self, name: &str) -> bool {
		self.provider.contains(name)
	}
}
