//! Flattened lookup over the host's trait definitions.
//!
//! The registry stores positions into the host's definition slice, so it is
//! only valid for the slice it was built from. Rebuild it on every load;
//! lookups re-check the trait id and return `None` on a stale entry.

use rustc_hash::FxHashMap as HashMap;

use crate::def::{DegreeData, TraitDef};

/// Position of one degree inside the host's definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DegreeRef {
	/// Index of the owning trait in the definition slice.
	pub trait_index: usize,
	/// Index of the degree in the trait's degree list.
	pub degree_index: usize,
}

/// Traits with at least one degree, and all of their degrees.
#[derive(Debug, Clone, Default)]
pub struct Registry {
	traits: Vec<usize>,
	degrees: Vec<DegreeRef>,
	by_id: HashMap<String, usize>,
}

impl Registry {
	pub fn build(defs: &[TraitDef]) -> Self {
		let mut registry = Self::default();
		registry.rebuild(defs);
		registry
	}

	/// Clears the registry and repopulates it from `defs`.
	///
	/// Traits without degrees are skipped. On duplicate ids the first
	/// definition wins.
	pub fn rebuild(&mut self, defs: &[TraitDef]) {
		self.traits.clear();
		self.degrees.clear();
		self.by_id.clear();

		for (trait_index, def) in defs.iter().enumerate() {
			if def.degrees.is_empty() {
				continue;
			}
			self.traits.push(trait_index);
			self.by_id.entry(def.id.clone()).or_insert(trait_index);
			self.degrees
				.extend((0..def.degrees.len()).map(|degree_index| DegreeRef {
					trait_index,
					degree_index,
				}));
		}

		tracing::debug!(
			domain = "trait_values",
			traits = self.traits.len(),
			degrees = self.degrees.len(),
			"trait registry rebuilt"
		);
	}

	/// Indices of the registered traits, in definition order.
	pub fn trait_indices(&self) -> &[usize] {
		&self.traits
	}

	pub fn degrees(&self) -> &[DegreeRef] {
		&self.degrees
	}

	pub fn trait_count(&self) -> usize {
		self.traits.len()
	}

	/// Total number of degrees across all registered traits.
	pub fn degree_count(&self) -> usize {
		self.degrees.len()
	}

	pub fn is_empty(&self) -> bool {
		self.traits.is_empty()
	}

	/// Iterates the registered traits.
	pub fn traits<'a>(&'a self, defs: &'a [TraitDef]) -> impl Iterator<Item = &'a TraitDef> + 'a {
		self.traits.iter().filter_map(|&i| defs.get(i))
	}

	/// Iterates every registered degree with its owning trait.
	pub fn degree_entries<'a>(
		&'a self,
		defs: &'a [TraitDef],
	) -> impl Iterator<Item = (&'a TraitDef, &'a DegreeData)> + 'a {
		self.degrees.iter().filter_map(|r| {
			let def = defs.get(r.trait_index)?;
			Some((def, def.degrees.get(r.degree_index)?))
		})
	}

	/// Index of the trait named `id`.
	pub fn index_of(&self, id: &str) -> Option<usize> {
		self.by_id.get(id).copied()
	}

	pub fn resolve<'a>(&self, defs: &'a [TraitDef], id: &str) -> Option<&'a TraitDef> {
		defs.get(self.index_of(id)?).filter(|def| def.id == id)
	}

	pub fn resolve_mut<'a>(&self, defs: &'a mut [TraitDef], id: &str) -> Option<&'a mut TraitDef> {
		defs.get_mut(self.index_of(id)?).filter(|def| def.id == id)
	}
}
