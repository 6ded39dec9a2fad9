//! Reconciles each trait's degrees with its score values.
//!
//! After this pass every degree of every registered trait has a score, so
//! coloring never has to guess. Missing extensions are synthesized and
//! incomplete ones are zero-filled; surplus values are left in place.

use crate::def::{ScoreExtension, TraitDef};
use crate::diagnostic::{Diagnostic, record};
use crate::extremes::RunningExtremes;
use crate::registry::Registry;

/// Outcome of a consistency pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsistencyReport {
	/// Degrees across all registered traits.
	pub degrees_total: usize,
	/// Score values authored across all traits, counted before repair.
	pub degrees_valued: usize,
	/// Traits that received a synthesized extension.
	pub synthesized: usize,
	/// Zero scores appended to incomplete extensions.
	pub filled: usize,
	pub diagnostics: Vec<Diagnostic>,
}

/// Repairs missing score data and widens `extremes` with every authored
/// score.
pub fn check_consistency(
	registry: &Registry,
	defs: &mut [TraitDef],
	extremes: &mut RunningExtremes,
) -> ConsistencyReport {
	let mut report = ConsistencyReport::default();

	for &index in registry.trait_indices() {
		let Some(def) = defs.get_mut(index) else {
			continue;
		};
		let degrees = def.degrees.len();
		report.degrees_total += degrees;

		let Some(extension) = def.extension.as_mut() else {
			record(
				&mut report.diagnostics,
				Diagnostic::MissingIntegration {
					trait_id: def.id.clone(),
					package: def.package.name.clone(),
					author: def.package.author.clone(),
				},
			);
			def.extension = Some(ScoreExtension::zero_filled(&def.degrees));
			report.synthesized += 1;
			continue;
		};

		let values = extension.len();
		report.degrees_valued += values;

		let filled = extension.fill_missing(&def.degrees);
		if degrees != values || filled > 0 {
			record(
				&mut report.diagnostics,
				Diagnostic::CountMismatch {
					trait_id: def.id.clone(),
					package: def.package.name.clone(),
					degrees,
					values,
				},
			);
		}
		report.filled += filled;

		extremes.observe_all(extension.values.iter().map(|v| v.value));
	}

	tracing::info!(
		domain = "trait_values",
		degrees_total = report.degrees_total,
		degrees_valued = report.degrees_valued,
		synthesized = report.synthesized,
		filled = report.filled,
		"trait value analysis"
	);

	report
}

#[cfg(test)]
mod tests;
