//! Error types for configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading a [`ResolverConfig`](super::ResolverConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or an unknown field.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// The export alias is empty or contains whitespace or a separator.
	#[error("invalid export alias: {0:?}")]
	InvalidAlias(String),

	/// A doc-namespace kind cannot be written as a `<kind>:` scheme.
	#[error("invalid docspace kind: {0:?} (expected letters, '_', '$' or '-')")]
	InvalidDocspaceKind(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
