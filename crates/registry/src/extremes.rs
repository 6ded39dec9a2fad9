//! Running best and worst scores.

/// The highest and lowest scores observed so far.
///
/// Both start at zero and only ever widen: `best` never decreases and
/// `worst` never increases. Nothing resets them between passes, so a score
/// that has since been overridden still anchors the gradient until
/// [`RunningExtremes::reset`] is called.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunningExtremes {
	best: i32,
	worst: i32,
}

impl RunningExtremes {
	pub const fn new() -> Self {
		Self { best: 0, worst: 0 }
	}

	/// Highest score observed, never below zero.
	pub const fn best(&self) -> i32 {
		self.best
	}

	/// Lowest score observed, never above zero.
	pub const fn worst(&self) -> i32 {
		self.worst
	}

	/// Widens the extremes to include `value`.
	pub fn observe(&mut self, value: i32) {
		self.best = self.best.max(value);
		self.worst = self.worst.min(value);
	}

	pub fn observe_all(&mut self, values: impl IntoIterator<Item = i32>) {
		for value in values {
			self.observe(value);
		}
	}

	/// Collapses both extremes back to zero.
	pub fn reset(&mut self) {
		*self = Self::new();
	}
}

#[cfg(test)]
mod tests;
