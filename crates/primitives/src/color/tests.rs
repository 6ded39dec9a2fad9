use proptest::prelude::*;

use super::*;

#[test]
fn lerp_endpoints_are_exact() {
	let from = Rgb::new(200, 0, 0);
	let to = Rgb::new(0, 0, 200);
	assert_eq!(from.lerp(to, 0.0), from);
	assert_eq!(from.lerp(to, 1.0), to);
}

#[test]
fn lerp_clamps_out_of_range_parameters() {
	let from = Rgb::new(10, 20, 30);
	let to = Rgb::new(110, 120, 130);
	assert_eq!(from.lerp(to, -3.0), from);
	assert_eq!(from.lerp(to, 7.5), to);
	assert_eq!(from.lerp(to, f32::NAN), from);
}

#[test]
fn lerp_rounds_half_to_even() {
	// 0 + 255 * 0.5 = 127.5 rounds to 128, 1 + 0.5 = 1.5 rounds to 2.
	let mid = Rgb::new(0, 1, 0).lerp(Rgb::new(255, 2, 0), 0.5);
	assert_eq!(mid, Rgb::new(128, 2, 0));
}

#[test]
fn rich_text_is_uppercase_and_fixed_length() {
	let tag = Rgb::new(0xab, 0x0c, 0xff).to_rich_text();
	assert_eq!(tag, "<color=#AB0CFF>");
	assert_eq!(tag.len(), COLOR_TAG_LEN);
	assert!(tag.starts_with(COLOR_TAG_MARKER));
}

#[test]
fn display_renders_hex() {
	assert_eq!(Rgb::WHITE.to_string(), "#FFFFFF");
	assert_eq!(Rgb::from((1, 2, 3)).to_hex(), "#010203");
}

proptest! {
	#[test]
	fn prop_lerp_stays_between_endpoints(
		a in any::<(u8, u8, u8)>(),
		b in any::<(u8, u8, u8)>(),
		t in 0.0f32..=1.0,
	) {
		let (from, to) = (Rgb::from(a), Rgb::from(b));
		let mid = from.lerp(to, t);
		for (m, x, y) in [(mid.r, from.r, to.r), (mid.g, from.g, to.g), (mid.b, from.b, to.b)] {
			prop_assert!(m >= x.min(y) && m <= x.max(y));
		}
	}
}
