//! RGB colors and the rich-text tags labels are wrapped in.
//!
//! Colors are stored as 8-bit channels. Blending happens in floating point
//! and rounds back with ties-to-even, matching the host's integer rounding
//! when it renders `<color=#RRGGBB>` tags.

use std::fmt;

/// Prefix shared by every opening color tag.
pub const COLOR_TAG_MARKER: &str = "<color=#";
/// Closing color tag.
pub const COLOR_TAG_CLOSE: &str = "</color>";
/// Byte length of a rendered opening tag, `<color=#RRGGBB>`.
pub const COLOR_TAG_LEN: usize = COLOR_TAG_MARKER.len() + 7;

/// A true-color RGB value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Rgb {
	pub const WHITE: Self = Self::new(255, 255, 255);
	pub const BLACK: Self = Self::new(0, 0, 0);

	/// Creates a color from its three channels.
	pub const fn new(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// Linearly interpolates from `self` toward `target`.
	///
	/// * `t = 0.0` returns `self`
	/// * `t = 1.0` returns `target`
	///
	/// `t` is clamped to `[0.0, 1.0]`; NaN is treated as `0.0`.
	pub fn lerp(self, target: Self, t: f32) -> Self {
		let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
		Self {
			r: lerp_channel(self.r, target.r, t),
			g: lerp_channel(self.g, target.g, t),
			b: lerp_channel(self.b, target.b, t),
		}
	}

	/// Renders the color as `#RRGGBB` with uppercase hex digits.
	pub fn to_hex(self) -> String {
		format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
	}

	/// Renders the opening rich-text tag for this color, `<color=#RRGGBB>`.
	pub fn to_rich_text(self) -> String {
		format!("{COLOR_TAG_MARKER}{:02X}{:02X}{:02X}>", self.r, self.g, self.b)
	}
}

impl fmt::Display for Rgb {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_hex())
	}
}

impl From<(u8, u8, u8)> for Rgb {
	fn from((r, g, b): (u8, u8, u8)) -> Self {
		Self::new(r, g, b)
	}
}

#[inline]
fn lerp_channel(from: u8, to: u8, t: f32) -> u8 {
	let from = f32::from(from);
	let to = f32::from(to);
	(from + (to - from) * t).round_ties_even().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests;
