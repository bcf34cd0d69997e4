//! Resolver configuration.
//!
//! Every field has a default matching the conventional JSDoc-style
//! namepath vocabulary, so an empty TOML document is a valid config:
//!
//! ```toml
//! anonymous_object = "[[anonymousObject]]"
//! anonymous_function = "[[anonymous]]"
//! export_alias = "exports"
//! docspace_kinds = ["event", "module"]
//! file_kind = "file"
//! constructor_kind = "constructor"
//! ```

use std::path::Path;

use docpath_namepath::{Scope, is_scheme};
use serde::Deserialize;

mod error;

pub use error::{ConfigError, Result};

/// Tunable vocabulary of the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
	/// Container used for members of an object literal with no path.
	pub anonymous_object: String,
	/// Container used for inner symbols of an unnamed, undocumented function.
	pub anonymous_function: String,
	/// Leading name segment rewritten to the current module.
	pub export_alias: String,
	/// Symbol kinds whose paths carry a `<kind>:` namespace token.
	pub docspace_kinds: Vec<String>,
	/// Kind of file-level doclets, whose names are never split.
	pub file_kind: String,
	/// Kind whose methods bind `this` to the symbol itself.
	pub constructor_kind: String,
}

impl Default for ResolverConfig {
	fn default() -> Self {
		Self {
			anonymous_object: "[[anonymousObject]]".into(),
			anonymous_function: "[[anonymous]]".into(),
			export_alias: "exports".into(),
			docspace_kinds: vec!["event".into(), "module".into()],
			file_kind: "file".into(),
			constructor_kind: "constructor".into(),
		}
	}
}

impl ResolverConfig {
	/// Parses and validates a TOML document.
	pub fn from_toml_str(src: &str) -> Result<Self> {
		let config: Self = toml::from_str(src)?;
		config.validate()?;
		Ok(config)
	}

	/// Reads, parses and validates a TOML file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let src = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_toml_str(&src)
	}

	/// Checks that the configured tokens can appear where they are used.
	pub fn validate(&self) -> Result<()> {
		let alias = self.export_alias.as_str();
		if alias.is_empty() || alias.chars().any(|ch| ch.is_whitespace() || Scope::from_char(ch).is_some()) {
			return Err(ConfigError::InvalidAlias(alias.to_owned()));
		}

		if let Some(kind) = self.docspace_kinds.iter().find(|kind| !is_scheme(kind)) {
			return Err(ConfigError::InvalidDocspaceKind(kind.clone()));
		}

		Ok(())
	}
}
