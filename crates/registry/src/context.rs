//! Lifecycle context owning the registry, snapshot and extremes.
//!
//! The host decides when each hook runs and must not call them concurrently
//! or re-entrantly. The definitions themselves stay owned by the host and
//! are passed into every hook.

use traitval_config::{ColorBands, OverrideMap, TraitValueSettings};

use crate::consistency::{ConsistencyReport, check_consistency};
use crate::def::TraitDef;
use crate::extremes::RunningExtremes;
use crate::label::{color_labels, uncolor_labels};
use crate::overrides::{OverrideReport, OverrideSource, apply_overrides};
use crate::registry::Registry;
use crate::snapshot::Snapshot;

/// Outcome of [`TraitValueContext::load`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
	pub consistency: ConsistencyReport,
	pub overrides: OverrideReport,
	/// Labels colored by the final pass.
	pub colored: usize,
}

/// State shared by the trait value passes across one session.
#[derive(Debug, Clone, Default)]
pub struct TraitValueContext {
	registry: Registry,
	snapshot: Snapshot,
	extremes: RunningExtremes,
	bands: ColorBands,
}

impl TraitValueContext {
	pub fn new(bands: ColorBands) -> Self {
		Self {
			bands,
			..Self::default()
		}
	}

	pub fn registry(&self) -> &Registry {
		&self.registry
	}

	pub fn snapshot(&self) -> &Snapshot {
		&self.snapshot
	}

	pub fn extremes(&self) -> RunningExtremes {
		self.extremes
	}

	pub fn bands(&self) -> &ColorBands {
		&self.bands
	}

	/// Replaces the gradient colors used by later coloring passes.
	pub fn set_bands(&mut self, bands: ColorBands) {
		self.bands = bands;
	}

	/// Forgets the running extremes; the next coloring pass starts from
	/// zero.
	pub fn reset_extremes(&mut self) {
		self.extremes.reset();
	}

	/// Runs the full load sequence over freshly loaded definitions.
	///
	/// Rebuilds the registry, captures the snapshot, repairs missing scores,
	/// applies the persisted overrides and colors every label. The snapshot
	/// is taken before repair, so synthesized scores are not restorable.
	pub fn load(&mut self, defs: &mut [TraitDef], settings: &TraitValueSettings) -> LoadReport {
		self.bands = settings.colors;
		self.rebuild_registry(defs);
		self.capture_snapshot(defs);
		let consistency = self.check_consistency(defs);
		let overrides = self.apply_overrides(defs, OverrideSource::Apply(settings.overrides()));
		let colored = self.color_labels(defs);

		tracing::info!(
			domain = "trait_values",
			traits = self.registry.trait_count(),
			degrees = self.registry.degree_count(),
			overrides = overrides.applied,
			colored,
			"trait values loaded"
		);

		LoadReport {
			consistency,
			overrides,
			colored,
		}
	}

	/// Re-applies overrides and recolors after the user changed settings.
	pub fn settings_changed(
		&mut self,
		defs: &mut [TraitDef],
		settings: &TraitValueSettings,
	) -> OverrideReport {
		self.bands = settings.colors;
		self.uncolor_labels(defs);
		let report = self.apply_overrides(defs, OverrideSource::Apply(settings.overrides()));
		self.color_labels(defs);
		report
	}

	/// Restores every snapshotted score and recolors.
	///
	/// The persisted overrides are not touched; callers usually follow up
	/// with [`TraitValueSettings::reset_values`].
	pub fn reset(&mut self, defs: &mut [TraitDef]) -> OverrideReport {
		self.uncolor_labels(defs);
		let report = self.apply_overrides(defs, OverrideSource::Reset);
		self.color_labels(defs);
		report
	}

	pub fn rebuild_registry(&mut self, defs: &[TraitDef]) {
		self.registry.rebuild(defs);
	}

	/// Captures the snapshot for this load, replacing the previous one.
	pub fn capture_snapshot(&mut self, defs: &[TraitDef]) {
		self.snapshot = Snapshot::capture(&self.registry, defs);
	}

	pub fn check_consistency(&mut self, defs: &mut [TraitDef]) -> ConsistencyReport {
		check_consistency(&self.registry, defs, &mut self.extremes)
	}

	pub fn apply_overrides(&self, defs: &mut [TraitDef], source: OverrideSource<'_>) -> OverrideReport {
		apply_overrides(&self.registry, defs, &self.snapshot, source)
	}

	/// Applies overrides from a bare map rather than a settings document.
	pub fn apply_override_map(&self, defs: &mut [TraitDef], overrides: &OverrideMap) -> OverrideReport {
		self.apply_overrides(defs, OverrideSource::Apply(overrides))
	}

	pub fn color_labels(&mut self, defs: &mut [TraitDef]) -> usize {
		color_labels(&self.registry, defs, &mut self.extremes, &self.bands)
	}

	pub fn uncolor_labels(&self, defs: &mut [TraitDef]) -> usize {
		uncolor_labels(&self.registry, defs)
	}
}
