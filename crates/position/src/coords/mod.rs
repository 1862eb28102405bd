//! Coordinate resolution: placement and offset to `(x, y)`, then the main-axis shift clamp.

use tether_primitives::{Alignment, Placement, Point, Side};

use crate::config::Offset;
use crate::overflow::OverflowDetector;
use crate::rects::ElementRects;
use crate::shift::shift;

/// Coordinates flush against the anchor on `placement`'s side, aligned on the cross axis.
///
/// Pure; no offset or clamping.
pub fn compute_coords_from_placement(rects: &ElementRects, placement: Placement, is_rtl: bool) -> Point {
	let ElementRects { anchor, floating } = *rects;
	let cross_axis = placement.cross_axis();

	let common_x = anchor.x + anchor.width / 2.0 - floating.width / 2.0;
	let common_y = anchor.y + anchor.height / 2.0 - floating.height / 2.0;
	let common_align = anchor.length(cross_axis) / 2.0 - floating.length(cross_axis) / 2.0;

	let base = match placement.side() {
		Side::Top => Point::new(common_x, anchor.y - floating.height),
		Side::Bottom => Point::new(common_x, anchor.bottom()),
		Side::Right => Point::new(anchor.right(), common_y),
		Side::Left => Point::new(anchor.x - floating.width, common_y),
	};

	let direction = if is_rtl && placement.is_vertical() { -1.0 } else { 1.0 };
	let cross = base.get(cross_axis);
	match placement.alignment() {
		Some(Alignment::Start) => base.with(cross_axis, cross - common_align * direction),
		Some(Alignment::End) => base.with(cross_axis, cross + common_align * direction),
		None => base,
	}
}

/// Moves `coords` by `offset`: away from the anchor on the main axis, along the anchor
/// edge on the cross axis.
pub fn apply_offset(coords: Point, placement: Placement, offset: Offset, is_rtl: bool) -> Point {
	let main_sign = if placement.side().is_leading() { -1.0 } else { 1.0 };
	let cross_sign = if is_rtl && placement.is_vertical() { -1.0 } else { 1.0 };
	let cross = match placement.alignment() {
		Some(Alignment::End) => -offset.cross_axis(),
		_ => offset.cross_axis(),
	};

	let main_axis = placement.main_axis();
	let cross_axis = placement.cross_axis();
	coords
		.with(main_axis, coords.get(main_axis) + offset.main_axis() * main_sign)
		.with(cross_axis, coords.get(cross_axis) + cross * cross_sign)
}

/// Coordinates produced by [`resolve_coordinates_with_shift`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedCoordinates {
	/// Final coordinates.
	pub coordinates: Point,
	/// Offset-applied coordinates before the shift clamp.
	pub unshifted: Point,
}

impl ResolvedCoordinates {
	/// Movement applied by the shift clamp.
	pub fn shift_delta(&self) -> Point {
		Point::new(
			self.coordinates.x - self.unshifted.x,
			self.coordinates.y - self.unshifted.y,
		)
	}
}

/// Full resolution for one placement: base coordinates, alignment, offset, then the
/// main-axis shift clamp against `detector`'s boundary.
pub fn resolve_coordinates(
	rects: &ElementRects,
	placement: Placement,
	offset: Offset,
	is_rtl: bool,
	detector: &OverflowDetector,
) -> Point {
	resolve_coordinates_with_shift(rects, placement, offset, is_rtl, detector).coordinates
}

/// [`resolve_coordinates`], also reporting the unclamped coordinates.
pub fn resolve_coordinates_with_shift(
	rects: &ElementRects,
	placement: Placement,
	offset: Offset,
	is_rtl: bool,
	detector: &OverflowDetector,
) -> ResolvedCoordinates {
	let base = compute_coords_from_placement(rects, placement, is_rtl);
	let unshifted = apply_offset(base, placement, offset, is_rtl);
	let overflow = detector.detect(unshifted, rects);
	ResolvedCoordinates {
		coordinates: shift(unshifted, &overflow, placement.main_axis()),
		unshifted,
	}
}
