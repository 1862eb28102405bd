//! Device-pixel-aligned translation of the final coordinates.

use std::fmt;

use serde::Serialize;
use tether_primitives::Point;

/// Rounds `value` to the nearest device pixel.
///
/// Halves round toward positive infinity, so `-10.5` snaps to `-10`. Non-positive or
/// non-finite ratios fall back to whole layout pixels.
pub fn round_by_dpr(value: f64, device_pixel_ratio: f64) -> f64 {
	let ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
		device_pixel_ratio
	} else {
		1.0
	};
	(value * ratio + 0.5).floor() / ratio
}

/// A translation vector for moving the floating element into place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Translation {
	/// Horizontal translation in layout pixels.
	pub x: f64,
	/// Vertical translation in layout pixels.
	pub y: f64,
}

impl fmt::Display for Translation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "translate({}px, {}px)", self.x, self.y)
	}
}

/// Rounds `point` to device pixels.
pub fn translate(point: Point, device_pixel_ratio: f64) -> Translation {
	Translation {
		x: round_by_dpr(point.x, device_pixel_ratio),
		y: round_by_dpr(point.y, device_pixel_ratio),
	}
}
