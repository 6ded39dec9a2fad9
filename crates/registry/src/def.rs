//! Trait definitions as the host exposes them.
//!
//! A [`TraitDef`] owns its degrees and an optional [`ScoreExtension`]. A
//! degree's owning trait is the definition it is stored in; the registry
//! records that relationship as an index pair rather than a back-pointer.

/// Content package a trait definition was loaded from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageInfo {
	/// Stable package identifier.
	pub id: String,
	/// Human-readable package name.
	pub name: String,
	/// Package author, if the host knows it.
	pub author: Option<String>,
}

impl PackageInfo {
	pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			author: None,
		}
	}

	pub fn with_author(mut self, author: impl Into<String>) -> Self {
		self.author = Some(author.into());
		self
	}
}

/// Whether a degree label currently carries a color tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Annotation {
	/// The label is shown as the host defined it.
	#[default]
	Plain,
	/// The label is wrapped in a color tag; `original` is the text before
	/// wrapping.
	Colored { original: String },
}

/// One degree of a trait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegreeData {
	/// Degree level, unique within its trait.
	pub degree: i32,
	/// Display text, possibly wrapped in a color tag.
	pub label: String,
	pub(crate) annotation: Annotation,
}

impl DegreeData {
	pub fn new(degree: i32, label: impl Into<String>) -> Self {
		Self {
			degree,
			label: label.into(),
			annotation: Annotation::Plain,
		}
	}

	/// Returns the annotation state of the label.
	pub fn annotation(&self) -> &Annotation {
		&self.annotation
	}
}

/// A `(degree, score)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegreeValue {
	pub degree: i32,
	pub value: i32,
}

impl DegreeValue {
	pub const fn new(degree: i32, value: i32) -> Self {
		Self { degree, value }
	}
}

/// Per-trait score data.
///
/// Lookups return the first entry for a degree; later duplicates are kept
/// but never read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreExtension {
	pub values: Vec<DegreeValue>,
}

impl ScoreExtension {
	pub fn new(values: impl IntoIterator<Item = DegreeValue>) -> Self {
		Self {
			values: values.into_iter().collect(),
		}
	}

	/// Builds an extension scoring every degree zero.
	pub fn zero_filled(degrees: &[DegreeData]) -> Self {
		Self::new(degrees.iter().map(|d| DegreeValue::new(d.degree, 0)))
	}

	pub fn find(&self, degree: i32) -> Option<&DegreeValue> {
		self.values.iter().find(|v| v.degree == degree)
	}

	pub fn find_mut(&mut self, degree: i32) -> Option<&mut DegreeValue> {
		self.values.iter_mut().find(|v| v.degree == degree)
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Appends a zero score for every degree without one.
	///
	/// Existing entries, including ones for unknown degrees, are kept.
	/// Returns the number of values added.
	pub fn fill_missing(&mut self, degrees: &[DegreeData]) -> usize {
		let missing: Vec<DegreeValue> = degrees
			.iter()
			.filter(|d| self.find(d.degree).is_none())
			.map(|d| DegreeValue::new(d.degree, 0))
			.collect();
		let added = missing.len();
		self.values.extend(missing);
		added
	}
}

/// A trait definition with its degrees and optional score extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraitDef {
	/// Unique identifier.
	pub id: String,
	pub degrees: Vec<DegreeData>,
	/// Package that defined the trait, for diagnostics.
	pub package: PackageInfo,
	pub extension: Option<ScoreExtension>,
}

impl TraitDef {
	pub fn new(id: impl Into<String>, package: PackageInfo) -> Self {
		Self {
			id: id.into(),
			degrees: Vec::new(),
			package,
			extension: None,
		}
	}

	/// Adds a degree.
	pub fn with_degree(mut self, degree: i32, label: impl Into<String>) -> Self {
		self.degrees.push(DegreeData::new(degree, label));
		self
	}

	/// Attaches a score extension built from `(degree, value)` pairs.
	pub fn with_values(mut self, values: impl IntoIterator<Item = (i32, i32)>) -> Self {
		self.extension = Some(ScoreExtension::new(
			values.into_iter().map(|(degree, value)| DegreeValue::new(degree, value)),
		));
		self
	}

	/// Returns the score of `degree`, if the extension has one.
	pub fn value_of(&self, degree: i32) -> Option<i32> {
		self.extension.as_ref()?.find(degree).map(|v| v.value)
	}

	pub fn degree(&self, degree: i32) -> Option<&DegreeData> {
		self.degrees.iter().find(|d| d.degree == degree)
	}
}
