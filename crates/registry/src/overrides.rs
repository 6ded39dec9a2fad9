//! Writes override or snapshot scores back into the score extensions.
//!
//! Each key is handled on its own: a key that cannot be decoded or resolved
//! is skipped with a diagnostic and the rest of the batch still applies. A
//! score is either fully overwritten or left untouched.

use traitval_config::OverrideMap;
use traitval_primitives::DegreeKey;

use crate::def::TraitDef;
use crate::diagnostic::{Diagnostic, record};
use crate::registry::Registry;
use crate::snapshot::Snapshot;

/// Where replacement scores come from.
#[derive(Debug, Clone, Copy)]
pub enum OverrideSource<'a> {
	/// Restore the scores captured at load.
	Reset,
	/// Apply user overrides keyed by `traitId,degree`.
	Apply(&'a OverrideMap),
}

/// Outcome of an override pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideReport {
	/// Scores written.
	pub applied: usize,
	/// Keys skipped.
	pub skipped: usize,
	pub diagnostics: Vec<Diagnostic>,
}

impl OverrideReport {
	fn skip(&mut self, diagnostic: Diagnostic) {
		self.skipped += 1;
		record(&mut self.diagnostics, diagnostic);
	}
}

/// Writes the scores from `source` into `defs`.
pub fn apply_overrides(
	registry: &Registry,
	defs: &mut [TraitDef],
	snapshot: &Snapshot,
	source: OverrideSource<'_>,
) -> OverrideReport {
	let mut report = OverrideReport::default();

	match source {
		OverrideSource::Reset => {
			for (key, value) in snapshot.iter() {
				match write_value(registry, defs, key, value) {
					Ok(()) => report.applied += 1,
					Err(diagnostic) => report.skip(diagnostic),
				}
			}
		}
		OverrideSource::Apply(overrides) => {
			for (raw, &value) in overrides {
				let result = DegreeKey::parse(raw)
					.map_err(Diagnostic::MalformedKey)
					.and_then(|key| write_value(registry, defs, &key, value));
				match result {
					Ok(()) => report.applied += 1,
					Err(diagnostic) => report.skip(diagnostic),
				}
			}
		}
	}

	tracing::debug!(
		domain = "trait_values",
		mode = if matches!(source, OverrideSource::Reset) { "reset" } else { "apply" },
		applied = report.applied,
		skipped = report.skipped,
		"applied trait value overrides"
	);
	report
}

fn write_value(
	registry: &Registry,
	defs: &mut [TraitDef],
	key: &DegreeKey,
	value: i32,
) -> Result<(), Diagnostic> {
	let def = registry
		.resolve_mut(defs, &key.trait_id)
		.ok_or_else(|| Diagnostic::UnresolvedTrait(key.clone()))?;
	let extension = def
		.extension
		.as_mut()
		.ok_or_else(|| Diagnostic::MissingExtension(key.clone()))?;
	let entry = extension
		.find_mut(key.degree)
		.ok_or_else(|| Diagnostic::UnresolvedDegree(key.clone()))?;
	entry.value = value;
	Ok(())
}
