//! Idempotent label coloring.
//!
//! Coloring wraps a degree label as `<color=#RRGGBB>Label</color>` and
//! remembers the text it replaced in the degree's [`Annotation`], so
//! uncoloring restores the label exactly. Labels that already carry a color
//! tag without that state (colored by an earlier session) count as colored;
//! uncoloring strips their tags by position.

use traitval_config::ColorBands;
use traitval_primitives::{COLOR_TAG_CLOSE, COLOR_TAG_LEN, COLOR_TAG_MARKER};

use crate::def::{Annotation, DegreeData, TraitDef};
use crate::engine::value_tag;
use crate::extremes::RunningExtremes;
use crate::registry::Registry;

impl DegreeData {
	/// Returns true if the label carries a color tag.
	pub fn is_colored(&self) -> bool {
		matches!(self.annotation, Annotation::Colored { .. }) || self.label.contains(COLOR_TAG_MARKER)
	}

	/// Wraps the label in `tag`, unless it is already colored.
	///
	/// Returns true if the label changed.
	pub fn colorize(&mut self, tag: &str) -> bool {
		if self.is_colored() {
			return false;
		}
		let original = std::mem::take(&mut self.label);
		self.label = format!("{tag}{}{COLOR_TAG_CLOSE}", capitalize_first(&original));
		self.annotation = Annotation::Colored { original };
		true
	}

	/// Removes the color tag, restoring the label.
	///
	/// Returns true if the label changed.
	pub fn uncolorize(&mut self) -> bool {
		match std::mem::take(&mut self.annotation) {
			Annotation::Colored { original } => {
				self.label = original;
				true
			}
			Annotation::Plain => match strip_color_tags(&self.label) {
				Some(stripped) => {
					self.label = stripped;
					true
				}
				None => false,
			},
		}
	}
}

/// Uppercases the first character of `label`.
pub fn capitalize_first(label: &str) -> String {
	let mut chars = label.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

/// Removes the first opening tag and every closing tag from `label`.
///
/// Returns `None` if the label has no opening tag.
fn strip_color_tags(label: &str) -> Option<String> {
	let start = label.find(COLOR_TAG_MARKER)?;
	let end = (start + COLOR_TAG_LEN).min(label.len());
	let end = (end..=label.len()).find(|&i| label.is_char_boundary(i)).unwrap_or(label.len());

	let mut stripped = String::with_capacity(label.len());
	stripped.push_str(&label[..start]);
	stripped.push_str(&label[end..]);
	Some(stripped.replace(COLOR_TAG_CLOSE, ""))
}

/// Colors every uncolored degree label of every scored trait.
///
/// First widens `extremes` with every score of every registered trait, then
/// wraps each label in the tag for its degree's score. Already colored
/// labels and degrees without a score are left alone. Returns the number of
/// labels colored.
pub fn color_labels(
	registry: &Registry,
	defs: &mut [TraitDef],
	extremes: &mut RunningExtremes,
	bands: &ColorBands,
) -> usize {
	for def in registry.traits(defs) {
		if let Some(extension) = &def.extension {
			extremes.observe_all(extension.values.iter().map(|v| v.value));
		}
	}
	let extremes = *extremes;

	let mut colored = 0;
	for &index in registry.trait_indices() {
		let Some(def) = defs.get_mut(index) else {
			continue;
		};
		let Some(extension) = def.extension.as_ref().filter(|e| !e.is_empty()) else {
			continue;
		};
		for degree in &mut def.degrees {
			if degree.is_colored() {
				continue;
			}
			let Some(entry) = extension.find(degree.degree) else {
				tracing::debug!(
					domain = "trait_values",
					trait_id = %def.id,
					degree = degree.degree,
					"degree has no score; label left uncolored"
				);
				continue;
			};
			if degree.colorize(&value_tag(entry.value, extremes, bands)) {
				colored += 1;
			}
		}
	}

	tracing::debug!(
		domain = "trait_values",
		colored,
		best = extremes.best(),
		worst = extremes.worst(),
		"colored trait labels"
	);
	colored
}

/// Removes color tags from every registered degree label.
///
/// Returns the number of labels restored.
pub fn uncolor_labels(registry: &Registry, defs: &mut [TraitDef]) -> usize {
	let mut restored = 0;
	for &index in registry.trait_indices() {
		let Some(def) = defs.get_mut(index) else {
			continue;
		};
		restored += def.degrees.iter_mut().map(DegreeData::uncolorize).filter(|&changed| changed).count();
	}

	tracing::debug!(domain = "trait_values", restored, "uncolored trait labels");
	restored
}
