//! Original scores recorded at load, used to undo overrides.

use rustc_hash::FxHashMap as HashMap;
use traitval_primitives::DegreeKey;

use crate::def::TraitDef;
use crate::registry::Registry;

/// Scores as they were authored, before any override was applied.
///
/// Only degrees the extension scored at capture time are recorded; values
/// synthesized later by the consistency pass have no entry and are left
/// alone by a reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
	values: HashMap<DegreeKey, i32>,
}

impl Snapshot {
	/// Records the current score of every scored degree of every registered
	/// trait.
	pub fn capture(registry: &Registry, defs: &[TraitDef]) -> Self {
		let mut values = HashMap::default();
		for def in registry.traits(defs) {
			let Some(extension) = &def.extension else {
				continue;
			};
			for degree in &def.degrees {
				if let Some(entry) = extension.find(degree.degree) {
					values
						.entry(DegreeKey::new(def.id.as_str(), degree.degree))
						.or_insert(entry.value);
				}
			}
		}

		tracing::debug!(domain = "trait_values", entries = values.len(), "captured original trait values");
		Self { values }
	}

	pub fn get(&self, key: &DegreeKey) -> Option<i32> {
		self.values.get(key).copied()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&DegreeKey, i32)> {
		self.values.iter().map(|(k, &v)| (k, v))
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}
