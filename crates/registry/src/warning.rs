use std::fmt;

/// Tracing target used for policy warnings.
pub const WARNING_TARGET: &str = "openum::warnings";

/// A permitted-but-suspicious definition.
///
/// Warnings never block creation. The registry emits them through
/// [`tracing`] when [`RegistryFlags::warnings_enabled`] is set.
///
/// [`RegistryFlags::warnings_enabled`]: crate::RegistryFlags::warnings_enabled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryWarning {
	/// An existing user enum is being replaced.
	UserOverwrite {
		/// The enum name.
		name: String,
	},
	/// A user enum now shadows a standard enum of the same name.
	StandardShadowed {
		/// The enum name.
		name: String,
	},
	/// An enum with no items is being created.
	EmptyEnum {
		/// The enum name.
		name: String,
	},
}

impl RegistryWarning {
	/// Name of the enum the warning concerns.
	pub fn enum_name(&self) -> &str {
		match self {
			RegistryWarning::UserOverwrite { name }
			| RegistryWarning::StandardShadowed { name }
			| RegistryWarning::EmptyEnum { name } => name,
		}
	}

	/// Stable identifier recorded in the `kind` field of the log event.
	pub fn kind(&self) -> &'static str {
		match self {
			RegistryWarning::UserOverwrite { .. } => "user-overwrite",
			RegistryWarning::StandardShadowed { .. } => "standard-shadowed",
			RegistryWarning::EmptyEnum { .. } => "empty-enum",
		}
	}

	pub(crate) fn emit(&self) {
		tracing::warn!(
			target: WARNING_TARGET,
			enum_name = self.enum_name(),
			kind = self.kind(),
			"{self}",
		);
	}
}

impl fmt::Display for RegistryWarning {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			RegistryWarning::UserOverwrite { name } => {
				write!(f, "overwriting existing enum '{name}'")
			}
			RegistryWarning::StandardShadowed { name } => {
				write!(f, "enum '{name}' shadows a standard enum of the same name")
			}
			RegistryWarning::EmptyEnum { name } => {
				write!(f, "creating empty enum '{name}'")
			}
		}
	}
}
