//! Main-axis clamp that keeps the floating element inside the clipping boundary.

use tether_primitives::{Axis, Overflow, Point};

/// Allowed range for one coordinate, derived from the overflow at that coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiftLimits {
	/// Smallest coordinate that keeps the leading edge inside the boundary.
	pub min: f64,
	/// Largest coordinate that keeps the trailing edge inside the boundary.
	pub max: f64,
}

impl ShiftLimits {
	/// Limits for `coord` on `axis`, given the overflow measured at `coord`.
	pub fn new(coord: f64, overflow: &Overflow, axis: Axis) -> Self {
		Self {
			min: coord + overflow[axis.min_side()],
			max: coord - overflow[axis.max_side()],
		}
	}

	/// Clamps `value` into `[min, max]`.
	///
	/// When the range is inverted (element larger than the boundary) the result is `min`.
	pub fn clamp(self, value: f64) -> f64 {
		value.min(self.max).max(self.min)
	}
}

/// Clamps `coords` along `axis` using the overflow measured at `coords`.
pub fn shift(coords: Point, overflow: &Overflow, axis: Axis) -> Point {
	let value = coords.get(axis);
	coords.with(axis, ShiftLimits::new(value, overflow, axis).clamp(value))
}

#[cfg(test)]
mod tests;
