use super::*;

#[test]
fn parse_accepts_two_parts() {
	assert_eq!(DegreeKey::parse("Kind,2"), Ok(DegreeKey::new("Kind", 2)));
	assert_eq!(DegreeKey::parse("Kind,-2"), Ok(DegreeKey::new("Kind", -2)));
}

#[test]
fn parse_tolerates_space_before_degree() {
	assert_eq!(DegreeKey::parse("Nerves, -1"), Ok(DegreeKey::new("Nerves", -1)));
}

#[test]
fn parse_keeps_underscores_in_trait_id() {
	let key: DegreeKey = "Too_Smart,0".parse().unwrap();
	assert_eq!(key.trait_id, "Too_Smart");
	assert_eq!(key.degree, 0);
}

#[test]
fn parse_rejects_single_part() {
	assert_eq!(
		DegreeKey::parse("OnlyOnePart"),
		Err(KeyError::Malformed {
			key: "OnlyOnePart".into(),
			parts: 1,
		})
	);
}

#[test]
fn parse_rejects_extra_parts() {
	assert!(matches!(
		DegreeKey::parse("a,b,3"),
		Err(KeyError::Malformed { parts: 3, .. })
	));
}

#[test]
fn parse_rejects_non_integer_degree() {
	assert!(matches!(
		DegreeKey::parse("Kind,high"),
		Err(KeyError::InvalidDegree { degree, .. }) if degree == "high"
	));
	assert!(matches!(DegreeKey::parse("Kind,"), Err(KeyError::InvalidDegree { .. })));
}

#[test]
fn display_matches_persisted_form() {
	let key = DegreeKey::new("Beauty", -2);
	assert_eq!(key.to_string(), "Beauty,-2");
	assert_eq!(DegreeKey::parse(&key.to_string()), Ok(key));
}
