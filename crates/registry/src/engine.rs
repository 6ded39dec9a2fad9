//! Maps a score to a color on a three-band gradient.
//!
//! With `best` and `worst` taken from the running extremes:
//!
//! | band | scores | from | to | `t` |
//! | --- | --- | --- | --- | --- |
//! | [`Band::Top`] | `value >= 0.9 * best` | good | best | `value / best` |
//! | [`Band::Positive`] | `0 <= value < 0.9 * best` | neutral | good | `value / (0.9 * best)` |
//! | [`Band::Negative`] | `value < 0` | bad | neutral | `1 - value / worst` |
//!
//! A score of zero is always the neutral color, including when `best` is
//! zero. Any other ratio with a zero denominator saturates to the end of its
//! band instead of dividing by zero.

use traitval_config::ColorBands;
use traitval_primitives::Rgb;

use crate::extremes::RunningExtremes;

/// Fraction of `best` at which the top band starts.
pub const TOP_BAND_RATIO: f64 = 0.9;

/// Which segment of the gradient a score falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
	/// Near the best score: good toward best.
	Top,
	/// Zero up to the top band: neutral toward good.
	Positive,
	/// Below zero: bad toward neutral.
	Negative,
}

/// A score's position on the gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
	pub band: Band,
	pub from: Rgb,
	pub to: Rgb,
	/// Interpolation parameter, non-decreasing in the score within a band.
	pub t: f32,
}

impl Gradient {
	/// Blends `from` toward `to` by `t`.
	pub fn color(&self) -> Rgb {
		self.from.lerp(self.to, self.t)
	}
}

/// Places `value` on the gradient described by `bands` and `extremes`.
pub fn gradient(value: i32, extremes: RunningExtremes, bands: &ColorBands) -> Gradient {
	let value_f = f64::from(value);
	let best = f64::from(extremes.best());
	let top = best * TOP_BAND_RATIO;

	if value == 0 {
		Gradient {
			band: Band::Positive,
			from: bands.neutral,
			to: bands.good,
			t: 0.0,
		}
	} else if value_f >= top {
		Gradient {
			band: Band::Top,
			from: bands.good,
			to: bands.best,
			t: ratio(value_f, best),
		}
	} else if value > 0 {
		Gradient {
			band: Band::Positive,
			from: bands.neutral,
			to: bands.good,
			t: ratio(value_f, top),
		}
	} else {
		Gradient {
			band: Band::Negative,
			from: bands.bad,
			to: bands.neutral,
			t: 1.0 - ratio(value_f, f64::from(extremes.worst())),
		}
	}
}

/// Color for `value`.
pub fn value_color(value: i32, extremes: RunningExtremes, bands: &ColorBands) -> Rgb {
	gradient(value, extremes, bands).color()
}

/// Opening rich-text tag for `value`, e.g. `<color=#4CD964>`.
pub fn value_tag(value: i32, extremes: RunningExtremes, bands: &ColorBands) -> String {
	value_color(value, extremes, bands).to_rich_text()
}

/// `numerator / denominator` clamped to `[0, 1]`; a zero denominator
/// saturates to `1`.
fn ratio(numerator: f64, denominator: f64) -> f32 {
	if denominator == 0.0 {
		return 1.0;
	}
	(numerator / denominator).clamp(0.0, 1.0) as f32
}
