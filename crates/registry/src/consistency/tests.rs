use pretty_assertions::assert_eq;

use super::*;
use crate::def::{DegreeValue, PackageInfo};

fn package() -> PackageInfo {
	PackageInfo::new("ludeon.core", "Core").with_author("Ludeon")
}

fn run(defs: &mut [TraitDef]) -> (ConsistencyReport, RunningExtremes) {
	let registry = Registry::build(defs);
	let mut extremes = RunningExtremes::new();
	let report = check_consistency(&registry, defs, &mut extremes);
	(report, extremes)
}

#[test]
fn complete_traits_pass_silently() {
	let mut defs = vec![
		TraitDef::new("Kind", package())
			.with_degree(-2, "cruel")
			.with_degree(0, "neutral")
			.with_degree(2, "kind")
			.with_values([(-2, -10), (0, 0), (2, 10)]),
	];
	let (report, extremes) = run(&mut defs);

	assert_eq!(report.degrees_total, 3);
	assert_eq!(report.degrees_valued, 3);
	assert!(report.diagnostics.is_empty());
	assert_eq!((extremes.best(), extremes.worst()), (10, -10));
}

#[test]
fn incomplete_extension_is_zero_filled() {
	let mut defs = vec![
		TraitDef::new("Nerves", package())
			.with_degree(-1, "nervous")
			.with_degree(1, "steady")
			.with_degree(2, "iron-willed")
			.with_values([(2, 14)]),
	];
	let (report, _) = run(&mut defs);

	let values = &defs[0].extension.as_ref().unwrap().values;
	assert_eq!(
		values,
		&vec![DegreeValue::new(2, 14), DegreeValue::new(-1, 0), DegreeValue::new(1, 0)]
	);
	assert_eq!(report.filled, 2);
	assert_eq!(report.degrees_valued, 1);
	assert_eq!(
		report.diagnostics,
		vec![Diagnostic::CountMismatch {
			trait_id: "Nerves".into(),
			package: "Core".into(),
			degrees: 3,
			values: 1,
		}]
	);
}

#[test]
fn missing_extension_is_synthesized() {
	let mut defs = vec![
		TraitDef::new("Modded", PackageInfo::new("someone.mod", "Some Mod"))
			.with_degree(0, "odd")
			.with_degree(1, "odder"),
	];
	let (report, _) = run(&mut defs);

	assert_eq!(defs[0].value_of(0), Some(0));
	assert_eq!(defs[0].value_of(1), Some(0));
	assert_eq!(report.synthesized, 1);
	assert_eq!(report.degrees_total, 2);
	assert_eq!(report.degrees_valued, 0);
	assert!(matches!(
		&report.diagnostics[..],
		[Diagnostic::MissingIntegration { trait_id, author: None, .. }] if trait_id == "Modded"
	));
	assert!(report.diagnostics[0].to_string().contains("'unknown'"));
}

#[test]
fn extra_values_are_kept() {
	let mut defs = vec![
		TraitDef::new("Beauty", package())
			.with_degree(2, "beautiful")
			.with_values([(2, 9), (5, 40)]),
	];
	let (report, extremes) = run(&mut defs);

	assert_eq!(defs[0].extension.as_ref().unwrap().len(), 2);
	assert_eq!(report.filled, 0);
	assert!(matches!(
		&report.diagnostics[..],
		[Diagnostic::CountMismatch { degrees: 1, values: 2, .. }]
	));
	// Surplus values still count toward the extremes.
	assert_eq!(extremes.best(), 40);
}

#[test]
fn equal_counts_with_wrong_degrees_still_fill() {
	let mut defs = vec![
		TraitDef::new("Skewed", package())
			.with_degree(0, "zero")
			.with_degree(1, "one")
			.with_values([(0, 3), (4, 3)]),
	];
	let (report, _) = run(&mut defs);

	assert_eq!(defs[0].value_of(1), Some(0));
	assert_eq!(report.filled, 1);
	assert_eq!(report.diagnostics.len(), 1);
}

#[test]
fn every_degree_has_exactly_one_value_after_repair() {
	let mut defs = vec![
		TraitDef::new("A", package())
			.with_degree(-1, "a-")
			.with_degree(0, "a")
			.with_degree(1, "a+")
			.with_values([(1, 5)]),
		TraitDef::new("B", package()).with_degree(3, "b"),
		TraitDef::new("C", package())
			.with_degree(0, "c")
			.with_values([(0, -7)]),
	];
	let (report, extremes) = run(&mut defs);

	for def in &defs {
		let extension = def.extension.as_ref().unwrap();
		for degree in &def.degrees {
			let matches = extension.values.iter().filter(|v| v.degree == degree.degree).count();
			assert_eq!(matches, 1, "{}:{}", def.id, degree.degree);
		}
	}
	assert_eq!(report.degrees_total, 5);
	assert_eq!(report.degrees_valued, 2);
	assert_eq!((extremes.best(), extremes.worst()), (5, -7));
}
