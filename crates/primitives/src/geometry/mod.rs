use serde::{Deserialize, Serialize};

use crate::placement::Axis;

/// Clamps negative and NaN lengths to zero.
#[inline]
fn non_negative(value: f64) -> f64 {
	if value > 0.0 { value } else { 0.0 }
}

/// Wire form of [`Size`], clamped on conversion.
#[derive(Deserialize)]
struct SizeFields {
	width: f64,
	height: f64,
}

impl From<SizeFields> for Size {
	fn from(fields: SizeFields) -> Self {
		Self::new(fields.width, fields.height)
	}
}

/// Wire form of [`Rect`], clamped on conversion.
#[derive(Deserialize)]
struct RectFields {
	x: f64,
	y: f64,
	width: f64,
	height: f64,
}

impl From<RectFields> for Rect {
	fn from(fields: RectFields) -> Self {
		Self::new(fields.x, fields.y, fields.width, fields.height)
	}
}

/// A point in screen space.
///
/// The origin is the top-left corner; `x` grows to the right and `y` grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
	/// Horizontal coordinate.
	pub x: f64,
	/// Vertical coordinate.
	pub y: f64,
}

impl Point {
	/// The coordinate origin.
	pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

	/// Creates a new point.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Returns the coordinate along `axis`.
	#[inline]
	pub fn get(self, axis: Axis) -> f64 {
		match axis {
			Axis::X => self.x,
			Axis::Y => self.y,
		}
	}

	/// Returns a copy with the coordinate along `axis` replaced.
	#[inline]
	pub fn with(self, axis: Axis, value: f64) -> Self {
		match axis {
			Axis::X => Self { x: value, ..self },
			Axis::Y => Self { y: value, ..self },
		}
	}

	/// Returns a copy moved by `(dx, dy)`.
	#[inline]
	pub fn translate(self, dx: f64, dy: f64) -> Self {
		Self::new(self.x + dx, self.y + dy)
	}

	/// Returns true if both coordinates are finite.
	pub fn is_finite(self) -> bool {
		self.x.is_finite() && self.y.is_finite()
	}
}

/// Non-negative width and height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "SizeFields")]
pub struct Size {
	/// Horizontal extent.
	pub width: f64,
	/// Vertical extent.
	pub height: f64,
}

impl Size {
	/// The empty size.
	pub const ZERO: Self = Self { width: 0.0, height: 0.0 };

	/// Creates a new size, clamping negative or NaN extents to zero.
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			width: non_negative(width),
			height: non_negative(height),
		}
	}

	/// Returns the extent along `axis` (width for `X`, height for `Y`).
	#[inline]
	pub fn get(self, axis: Axis) -> f64 {
		match axis {
			Axis::X => self.width,
			Axis::Y => self.height,
		}
	}
}

/// An axis-aligned rectangle.
///
/// Width and height are never negative when built through [`Rect::new`] or deserialized.
/// Operations that could produce a negative extent (such as [`Rect::intersection`] of
/// disjoint rects) collapse it to zero instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RectFields")]
pub struct Rect {
	/// Left edge.
	pub x: f64,
	/// Top edge.
	pub y: f64,
	/// Horizontal extent.
	pub width: f64,
	/// Vertical extent.
	pub height: f64,
}

impl Rect {
	/// The empty rectangle at the origin.
	pub const ZERO: Self = Self {
		x: 0.0,
		y: 0.0,
		width: 0.0,
		height: 0.0,
	};

	/// Creates a new rectangle, clamping negative or NaN extents to zero.
	pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
		Self {
			x,
			y,
			width: non_negative(width),
			height: non_negative(height),
		}
	}

	/// Creates a rectangle from its top-left corner and size.
	pub fn from_origin_size(origin: Point, size: Size) -> Self {
		Self::new(origin.x, origin.y, size.width, size.height)
	}

	/// Creates a rectangle from its four edges.
	pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
		Self::new(left, top, right - left, bottom - top)
	}

	/// Top-left corner.
	#[inline]
	pub fn origin(self) -> Point {
		Point::new(self.x, self.y)
	}

	/// Width and height.
	#[inline]
	pub fn size(self) -> Size {
		Size::new(self.width, self.height)
	}

	/// Left edge.
	#[inline]
	pub fn left(self) -> f64 {
		self.x
	}

	/// Top edge.
	#[inline]
	pub fn top(self) -> f64 {
		self.y
	}

	/// Right edge (`x + width`).
	#[inline]
	pub fn right(self) -> f64 {
		self.x + self.width
	}

	/// Bottom edge (`y + height`).
	#[inline]
	pub fn bottom(self) -> f64 {
		self.y + self.height
	}

	/// Leading edge along `axis` (left for `X`, top for `Y`).
	#[inline]
	pub fn start(self, axis: Axis) -> f64 {
		self.origin().get(axis)
	}

	/// Trailing edge along `axis` (right for `X`, bottom for `Y`).
	#[inline]
	pub fn end(self, axis: Axis) -> f64 {
		self.start(axis) + self.length(axis)
	}

	/// Extent along `axis`.
	#[inline]
	pub fn length(self, axis: Axis) -> f64 {
		self.size().get(axis)
	}

	/// Center point.
	pub fn center(self) -> Point {
		Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
	}

	/// Returns true if the rectangle has zero area.
	pub fn is_empty(self) -> bool {
		self.width == 0.0 || self.height == 0.0
	}

	/// Returns true if every component is finite.
	pub fn is_finite(self) -> bool {
		self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
	}

	/// Returns a copy with the top-left corner moved to `origin`.
	pub fn with_origin(self, origin: Point) -> Self {
		Self {
			x: origin.x,
			y: origin.y,
			..self
		}
	}

	/// Returns a copy moved by `(dx, dy)`.
	pub fn translate(self, dx: f64, dy: f64) -> Self {
		Self {
			x: self.x + dx,
			y: self.y + dy,
			..self
		}
	}

	/// Returns the overlapping area of two rectangles.
	///
	/// Disjoint rectangles produce a zero-sized rect anchored at the larger of the two
	/// leading edges on each axis.
	pub fn intersection(self, other: Self) -> Self {
		let left = self.left().max(other.left());
		let top = self.top().max(other.top());
		let right = self.right().min(other.right());
		let bottom = self.bottom().min(other.bottom());
		Self::new(left, top, right - left, bottom - top)
	}

	/// Returns true if `other` lies entirely inside this rectangle (edges inclusive).
	pub fn contains_rect(self, other: Self) -> bool {
		other.left() >= self.left()
			&& other.top() >= self.top()
			&& other.right() <= self.right()
			&& other.bottom() <= self.bottom()
	}

	/// Shrinks the rectangle by `insets` on each side.
	///
	/// Insets larger than the rectangle collapse it to zero size.
	pub fn inset(self, insets: EdgeInsets) -> Self {
		Self::new(
			self.x + insets.left,
			self.y + insets.top,
			self.width - insets.left - insets.right,
			self.height - insets.top - insets.bottom,
		)
	}

	/// Multiplies every component by the per-axis `factor`.
	pub fn scale(self, factor: Point) -> Self {
		Self::new(self.x * factor.x, self.y * factor.y, self.width * factor.x, self.height * factor.y)
	}
}

/// Per-side lengths: border widths, scrollbar gutters or boundary padding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeInsets {
	/// Top inset.
	pub top: f64,
	/// Right inset.
	pub right: f64,
	/// Bottom inset.
	pub bottom: f64,
	/// Left inset.
	pub left: f64,
}

impl EdgeInsets {
	/// No inset on any side.
	pub const ZERO: Self = Self {
		top: 0.0,
		right: 0.0,
		bottom: 0.0,
		left: 0.0,
	};

	/// Creates insets from explicit per-side values.
	pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
		Self { top, right, bottom, left }
	}

	/// The same inset on every side.
	pub const fn uniform(value: f64) -> Self {
		Self::new(value, value, value, value)
	}

	/// Returns true if every side is finite.
	pub fn is_finite(self) -> bool {
		self.top.is_finite() && self.right.is_finite() && self.bottom.is_finite() && self.left.is_finite()
	}
}

/// Scroll position of a container or of the viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollOffset {
	/// Horizontal scroll (`scrollLeft`).
	pub left: f64,
	/// Vertical scroll (`scrollTop`).
	pub top: f64,
}

impl ScrollOffset {
	/// Unscrolled.
	pub const ZERO: Self = Self { left: 0.0, top: 0.0 };

	/// Creates a new scroll offset.
	pub const fn new(left: f64, top: f64) -> Self {
		Self { left, top }
	}

	/// Returns the offset as a point (`x = left`, `y = top`).
	pub fn as_point(self) -> Point {
		Point::new(self.left, self.top)
	}
}

#[cfg(test)]
mod tests;
