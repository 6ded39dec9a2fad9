//! Color band configuration.
//!
//! The gradient is anchored on four colors: `neutral` at a score of zero,
//! `good` at 90% of the best score, `best` at the best score and `bad` at
//! the worst score.

use serde::{Deserialize, Serialize};
use traitval_primitives::Rgb;

use crate::error::{ConfigError, Result};

/// The four anchor colors of the score gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorBands {
	#[serde(with = "hex")]
	pub neutral: Rgb,
	#[serde(with = "hex")]
	pub good: Rgb,
	#[serde(with = "hex")]
	pub best: Rgb,
	#[serde(with = "hex")]
	pub bad: Rgb,
}

impl ColorBands {
	pub const DEFAULT_NEUTRAL: Rgb = Rgb::WHITE;
	pub const DEFAULT_GOOD: Rgb = Rgb::new(0x4C, 0xD9, 0x64);
	pub const DEFAULT_BEST: Rgb = Rgb::new(0x2F, 0xA8, 0xFF);
	pub const DEFAULT_BAD: Rgb = Rgb::new(0xFF, 0x40, 0x40);
}

impl Default for ColorBands {
	fn default() -> Self {
		Self {
			neutral: Self::DEFAULT_NEUTRAL,
			good: Self::DEFAULT_GOOD,
			best: Self::DEFAULT_BEST,
			bad: Self::DEFAULT_BAD,
		}
	}
}

/// Parses a color string into an [`Rgb`].
///
/// Supports `#RGB`, `#RRGGBB` and a small set of names (`white`, `red`,
/// `bright-green`, ...).
pub fn parse_color(value: &str) -> Result<Rgb> {
	let value = value.trim();

	if let Some(hex) = value.strip_prefix('#') {
		return parse_hex_color(hex);
	}

	parse_named_color(value)
}

/// Parses the digits of a `#RGB` or `#RRGGBB` color.
fn parse_hex_color(hex: &str) -> Result<Rgb> {
	let err = || ConfigError::InvalidColor(format!("#{hex}"));
	if !hex.is_ascii() {
		return Err(err());
	}

	match hex.len() {
		3 => {
			let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).map_err(|_| err())?;
			let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).map_err(|_| err())?;
			let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).map_err(|_| err())?;
			Ok(Rgb::new(r, g, b))
		}
		6 => {
			let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| err())?;
			let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| err())?;
			let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| err())?;
			Ok(Rgb::new(r, g, b))
		}
		_ => Err(err()),
	}
}

fn parse_named_color(name: &str) -> Result<Rgb> {
	let normalized = name.to_lowercase().replace(['-', '_'], "");

	let color = match normalized.as_str() {
		"white" => Rgb::WHITE,
		"black" => Rgb::BLACK,
		"red" => Rgb::new(0xFF, 0x00, 0x00),
		"green" => Rgb::new(0x00, 0xFF, 0x00),
		"blue" => Rgb::new(0x00, 0x00, 0xFF),
		"yellow" => Rgb::new(0xFF, 0xEB, 0x04),
		"cyan" => Rgb::new(0x00, 0xFF, 0xFF),
		"magenta" => Rgb::new(0xFF, 0x00, 0xFF),
		"gray" | "grey" => Rgb::new(0x80, 0x80, 0x80),
		_ => return Err(ConfigError::InvalidColor(name.to_string())),
	};
	Ok(color)
}

/// Serde adapter storing [`Rgb`] as a `#RRGGBB` string.
mod hex {
	use serde::{Deserialize, Deserializer, Serializer};
	use traitval_primitives::Rgb;

	pub fn serialize<S: Serializer>(color: &Rgb, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&color.to_hex())
	}

	pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Rgb, D::Error> {
		let raw = String::deserialize(deserializer)?;
		super::parse_color(&raw).map_err(serde::de::Error::custom)
	}
}
