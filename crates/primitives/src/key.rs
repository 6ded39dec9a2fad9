//! Composite keys naming one degree of one trait.
//!
//! Internally a key is a `(trait id, degree)` pair. The `traitId,degree`
//! string form only exists at the persistence boundary, where overrides are
//! stored by the host.

use std::fmt;
use std::str::FromStr;

/// Errors produced when decoding a persisted key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
	/// The key did not split into exactly two comma-separated parts.
	#[error("'{key}' is not correctly formatted (expected `traitId,degree`, found {parts} parts)")]
	Malformed {
		/// The raw key as it was persisted.
		key: String,
		/// Number of parts the key split into.
		parts: usize,
	},
	/// The degree part is not an integer.
	#[error("'{key}' has a non-integer degree '{degree}'")]
	InvalidDegree {
		/// The raw key as it was persisted.
		key: String,
		/// The offending degree text.
		degree: String,
	},
}

/// Identifies one degree of one trait.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DegreeKey {
	pub trait_id: String,
	pub degree: i32,
}

impl DegreeKey {
	/// Separator between the trait id and the degree in the string form.
	pub const DELIMITER: char = ',';

	pub fn new(trait_id: impl Into<String>, degree: i32) -> Self {
		Self {
			trait_id: trait_id.into(),
			degree,
		}
	}

	/// Decodes a persisted `traitId,degree` key.
	///
	/// The key must split into exactly two parts on `,`. Whitespace around
	/// the degree is ignored, so `Kind, 2` and `Kind,2` name the same degree.
	pub fn parse(raw: &str) -> Result<Self, KeyError> {
		let parts = raw.split(Self::DELIMITER).count();
		let Some((trait_id, degree)) = raw.split_once(Self::DELIMITER).filter(|_| parts == 2) else {
			return Err(KeyError::Malformed {
				key: raw.to_string(),
				parts,
			});
		};

		let degree = degree.trim();
		let degree = degree.parse::<i32>().map_err(|_| KeyError::InvalidDegree {
			key: raw.to_string(),
			degree: degree.to_string(),
		})?;

		Ok(Self::new(trait_id, degree))
	}
}

impl fmt::Display for DegreeKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}{}{}", self.trait_id, Self::DELIMITER, self.degree)
	}
}

impl FromStr for DegreeKey {
	type Err = KeyError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

#[cfg(test)]
mod tests;
