//! Diagnostics emitted while scanning, repairing and overriding.
//!
//! Every pass keeps going after a problem. Each diagnostic is logged through
//! `tracing` when raised and also returned in the pass's report.

use std::fmt;

use traitval_primitives::{DegreeKey, KeyError};

/// A problem found by one of the passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
	/// A trait has no score extension; one scoring every degree zero was
	/// synthesized.
	MissingIntegration {
		trait_id: String,
		package: String,
		author: Option<String>,
	},
	/// A trait's score extension does not score every degree exactly once.
	CountMismatch {
		trait_id: String,
		package: String,
		degrees: usize,
		values: usize,
	},
	/// A persisted override key could not be decoded.
	MalformedKey(KeyError),
	/// No registered trait has the key's id.
	UnresolvedTrait(DegreeKey),
	/// The key's trait has no score extension.
	MissingExtension(DegreeKey),
	/// The key's trait does not score the key's degree.
	UnresolvedDegree(DegreeKey),
}

impl Diagnostic {
	/// Logs the diagnostic.
	pub(crate) fn emit(&self) {
		match self {
			Self::MissingIntegration { trait_id, package, .. } => {
				tracing::warn!(domain = "trait_values", %trait_id, %package, "{self}");
			}
			Self::CountMismatch {
				trait_id,
				package,
				degrees,
				values,
			} => {
				tracing::warn!(domain = "trait_values", %trait_id, %package, degrees, values, "{self}");
			}
			Self::MalformedKey(_) => {
				tracing::warn!(domain = "trait_values", "{self}");
			}
			Self::UnresolvedTrait(key) | Self::MissingExtension(key) | Self::UnresolvedDegree(key) => {
				tracing::warn!(domain = "trait_values", key = %key, "{self}");
			}
		}
	}
}

impl fmt::Display for Diagnostic {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::MissingIntegration {
				trait_id,
				package,
				author,
			} => write!(
				f,
				"{trait_id} from the package {package} does not have trait values set up; you can ask \
				 the author '{}' to add integration, but be polite about it",
				author.as_deref().unwrap_or("unknown")
			),
			Self::CountMismatch {
				trait_id,
				package,
				degrees,
				values,
			} => write!(
				f,
				"trait {trait_id} from the package {package} has {degrees} degrees, but {values} values; \
				 configure one value per degree"
			),
			Self::MalformedKey(error) => write!(f, "skipping override: {error}"),
			Self::UnresolvedTrait(key) => write!(f, "skipping override '{key}': no trait with that id"),
			Self::MissingExtension(key) => {
				write!(f, "skipping override '{key}': trait has no score extension")
			}
			Self::UnresolvedDegree(key) => {
				write!(f, "skipping override '{key}': trait does not score that degree")
			}
		}
	}
}

/// Records a diagnostic into a report after logging it.
pub(crate) fn record(diagnostics: &mut Vec<Diagnostic>, diagnostic: Diagnostic) {
	diagnostic.emit();
	diagnostics.push(diagnostic);
}
