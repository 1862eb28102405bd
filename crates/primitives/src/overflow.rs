//! Signed overflow of an element past a clipping boundary.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;
use crate::placement::Side;

/// Signed distances of an element's edges past a clipping boundary.
///
/// Positive values overflow, negative values are remaining clearance, zero is flush.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Overflow {
	/// Distance the top edge sits above the boundary's top edge.
	pub top: f64,
	/// Distance the right edge sits past the boundary's right edge.
	pub right: f64,
	/// Distance the bottom edge sits below the boundary's bottom edge.
	pub bottom: f64,
	/// Distance the left edge sits before the boundary's left edge.
	pub left: f64,
}

impl Overflow {
	/// Creates an overflow value from explicit per-side values.
	pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
		Self { top, right, bottom, left }
	}

	/// Measures `element` against `boundary`.
	///
	/// Every side is oriented so that a positive value means the element crosses the
	/// boundary on that side.
	pub fn between(element: Rect, boundary: Rect) -> Self {
		Self {
			top: boundary.top() - element.top(),
			right: element.right() - boundary.right(),
			bottom: element.bottom() - boundary.bottom(),
			left: boundary.left() - element.left(),
		}
	}

	/// Returns true if no side overflows.
	pub fn fits(&self) -> bool {
		self.top <= 0.0 && self.right <= 0.0 && self.bottom <= 0.0 && self.left <= 0.0
	}
}

impl Index<Side> for Overflow {
	type Output = f64;

	fn index(&self, side: Side) -> &f64 {
		match side {
			Side::Top => &self.top,
			Side::Right => &self.right,
			Side::Bottom => &self.bottom,
			Side::Left => &self.left,
		}
	}
}
