/// Policy toggles consulted while creating and resolving enums.
///
/// A registry copies its flags at construction; they cannot change afterwards.
/// With the `config-toml` feature the struct deserializes from kebab-case keys,
/// each optional and defaulting as in [`RegistryFlags::default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
	feature = "config-toml",
	derive(serde::Deserialize),
	serde(default, rename_all = "kebab-case", deny_unknown_fields)
)]
pub struct RegistryFlags {
	/// Permit re-registering a name that already exists among user enums.
	pub allow_user_overwrite: bool,
	/// Permit registering a name exposed by the standard provider.
	pub allow_standard_overwrite: bool,
	/// Permit enums with zero items.
	pub allow_empty: bool,
	/// Require item names to match `[A-Za-z_][A-Za-z0-9_]*`.
	pub enforce_identifier_naming: bool,
	/// Emit warnings for permitted-but-suspicious definitions.
	pub warnings_enabled: bool,
}

impl Default for RegistryFlags {
	fn default() -> Self {
		Self {
			allow_user_overwrite: false,
			allow_standard_overwrite: false,
			allow_empty: false,
			enforce_identifier_naming: true,
			warnings_enabled: true,
		}
	}
}

impl RegistryFlags {
	pub fn with_user_overwrite(mut self, allow: bool) -> Self {
		self.allow_user_overwrite = allow;
		self
	}

	pub fn with_standard_overwrite(mut self, allow: bool) -> Self {
		self.allow_standard_overwrite = allow;
		self
	}

	pub fn with_empty(mut self, allow: bool) -> Self {
		self.allow_empty = allow;
		self
	}

	pub fn with_identifier_naming(mut self, enforce: bool) -> Self {
		self.enforce_identifier_naming = enforce;
		self
	}

	pub fn with_warnings(mut self, enabled: bool) -> Self {
		self.warnings_enabled = enabled;
		self
	}
}
