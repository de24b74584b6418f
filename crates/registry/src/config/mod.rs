//! Loading [`RegistryFlags`] from TOML.
//!
//! Every key is optional and kebab-cased; unknown keys are rejected.
//!
//! ```toml
//! allow-user-overwrite = false
//! allow-standard-overwrite = false
//! allow-empty = true
//! enforce-identifier-naming = true
//! warnings-enabled = true
//! ```

use crate::flags::RegistryFlags;

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// The text is not valid TOML or does not describe registry flags.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),
}

impl RegistryFlags {
	/// Parses flags from TOML text.
	pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(src)?)
	}
}
