//! The persisted settings document.
//!
//! Overrides are keyed by the `traitId,degree` string form and kept as the
//! host wrote them. Malformed keys survive loading; the override applier
//! skips them at apply time. [`TraitValueSettings::validate_keys`] is there
//! for hosts that want to reject them up front.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use traitval_primitives::DegreeKey;

use crate::color::ColorBands;
use crate::error::{ConfigError, Result};

/// User-chosen replacement scores, keyed by `traitId,degree`.
pub type OverrideMap = BTreeMap<String, i32>;

/// Persisted settings: gradient colors and changed trait values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TraitValueSettings {
	pub colors: ColorBands,
	pub changed_values: OverrideMap,
}

impl TraitValueSettings {
	/// Parses settings from a TOML document.
	pub fn from_toml_str(input: &str) -> Result<Self> {
		Ok(toml::from_str(input)?)
	}

	/// Serializes settings to a TOML document.
	pub fn to_toml_string(&self) -> Result<String> {
		Ok(toml::to_string(self)?)
	}

	/// Loads settings from `path`.
	///
	/// A missing file yields the defaults; any other I/O failure is an error.
	pub fn load(path: &Path) -> Result<Self> {
		match std::fs::read_to_string(path) {
			Ok(input) => Self::from_toml_str(&input),
			Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
				tracing::debug!(
					domain = "trait_values",
					path = %path.display(),
					"settings file not found; using defaults"
				);
				Ok(Self::default())
			}
			Err(error) => Err(ConfigError::Io {
				path: path.to_path_buf(),
				error,
			}),
		}
	}

	/// Writes settings to `path`, creating parent directories as needed.
	pub fn save(&self, path: &Path) -> Result<()> {
		let contents = self.to_toml_string()?;
		let io_err = |error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		};
		if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
			std::fs::create_dir_all(parent).map_err(io_err)?;
		}
		std::fs::write(path, contents).map_err(io_err)
	}

	/// Returns the persisted overrides.
	pub fn overrides(&self) -> &OverrideMap {
		&self.changed_values
	}

	/// Records an override for one degree, replacing any previous one.
	pub fn set_value(&mut self, key: &DegreeKey, value: i32) {
		self.changed_values.insert(key.to_string(), value);
	}

	/// Removes the override for one degree, returning it if present.
	pub fn remove_value(&mut self, key: &DegreeKey) -> Option<i32> {
		self.changed_values.remove(&key.to_string())
	}

	/// Forgets every override.
	pub fn reset_values(&mut self) {
		self.changed_values.clear();
	}

	/// Checks that every override key decodes as `traitId,degree`.
	pub fn validate_keys(&self) -> Result<()> {
		for raw in self.changed_values.keys() {
			DegreeKey::parse(raw)?;
		}
		Ok(())
	}
}
