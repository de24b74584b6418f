#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Extensible enumeration registry.
//!
//! Callers define named, immutable enums of integer-valued items that resolve
//! through the same namespace as a read-only set of standard enums.
//!
//! # Modules
//!
//! - [`item`] - [`EnumItem`], a `(name, value)` pair owned by one enum
//! - [`enum_type`] - [`Enum`], an immutable item collection sorted by value
//! - [`policy`] - [`ValidationPolicy`], creation-time checks
//! - [`flags`] - [`RegistryFlags`], the policy toggles
//! - [`standard`] - [`StandardProvider`] and static implementations
//! - [`registry`] - [`EnumRegistry`], the facade
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use openum_registry::{EnumRegistry, StandardTable, StaticProvider};
//!
//! const STANDARD: &[StandardTable] = &[("Material", &[("Plastic", 256), ("Wood", 512)])];
//!
//! let standard = StaticProvider::from_tables(STANDARD).unwrap();
//! let registry = EnumRegistry::new(Arc::new(standard));
//!
//! registry
//! 	.create("Difficulty", [(0, "Easy"), (1, "Normal"), (2, "Hard")])
//! 	.unwrap();
//!
//! let hard = registry.from_value("Difficulty", 2).unwrap().unwrap();
//! assert_eq!(hard.to_string(), "Difficulty.Hard");
//! assert!(registry.find("Material").is_some());
//! ```

#[cfg(feature = "config-toml")]
pub mod config;
pub mod enum_type;
pub mod error;
pub mod flags;
pub mod item;
pub mod policy;
pub mod registry;
pub mod standard;
pub mod warning;

#[cfg(feature = "config-toml")]
pub use config::ConfigError;
pub use enum_type::{Enum, MAX_ITEM_VALUE};
pub use error::{
	EnumError, EnumSource, ErrorKind, ItemField, MemberKind, ProviderError, Result,
};
pub use flags::RegistryFlags;
pub use item::EnumItem;
pub use policy::{
	ITEM_ENUMERATION_METHOD, NameScope, RESERVED_ENUM_NAMES, ValidatedEnum, ValidationPolicy,
};
pub use registry::EnumRegistry;
pub use standard::{EmptyProvider, StandardProvider, StandardTable, StaticProvider};
pub use warning::{RegistryWarning, WARNING_TARGET};
