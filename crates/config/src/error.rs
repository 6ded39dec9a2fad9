//! Error types for configuration parsing.

use std::path::PathBuf;

use thiserror::Error;
use traitval_primitives::KeyError;

/// Errors that can occur when loading or saving settings.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or structure.
	#[error("TOML parse error: {0}")]
	Parse(#[from] toml::de::Error),

	/// Error serializing settings to TOML.
	#[error("TOML serialize error: {0}")]
	Serialize(#[from] toml::ser::Error),

	/// Error reading or writing a settings file.
	#[error("I/O error on {path}: {error}")]
	Io {
		/// Path to the file that failed.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A color value could not be parsed.
	#[error("invalid color format: {0}")]
	InvalidColor(String),

	/// A persisted override key is not a valid `traitId,degree` key.
	#[error("invalid override key: {0}")]
	InvalidKey(#[from] KeyError),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
