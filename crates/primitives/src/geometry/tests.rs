use proptest::prelude::*;

use super::{EdgeInsets, Point, Rect, ScrollOffset, Size};
use crate::Axis;

#[test]
fn new_rect_clamps_negative_dimensions() {
	let rect = Rect::new(10.0, 10.0, -4.0, f64::NAN);
	assert_eq!(rect.width, 0.0);
	assert_eq!(rect.height, 0.0);
	assert!(rect.is_empty());
}

#[test]
fn deserialized_extents_are_clamped() {
	let rect: Rect = serde_json::from_str(r#"{ "x": 1, "y": 2, "width": -3, "height": 4 }"#).expect("valid json");
	assert_eq!(rect, Rect::new(1.0, 2.0, 0.0, 4.0));

	let size: Size = serde_json::from_str(r#"{ "width": 5, "height": -1 }"#).expect("valid json");
	assert_eq!(size, Size::new(5.0, 0.0));
}

#[test]
fn rect_edges() {
	let rect = Rect::new(10.0, 5.0, 3.0, 2.0);
	assert_eq!(rect.left(), 10.0);
	assert_eq!(rect.right(), 13.0);
	assert_eq!(rect.top(), 5.0);
	assert_eq!(rect.bottom(), 7.0);
	assert_eq!(rect.start(Axis::X), 10.0);
	assert_eq!(rect.end(Axis::Y), 7.0);
	assert_eq!(rect.length(Axis::X), 3.0);
	assert_eq!(rect.center(), Point::new(11.5, 6.0));
}

#[test]
fn intersection_of_overlapping_rects() {
	let a = Rect::new(0.0, 0.0, 100.0, 100.0);
	let b = Rect::new(50.0, 25.0, 100.0, 50.0);
	assert_eq!(a.intersection(b), Rect::new(50.0, 25.0, 50.0, 50.0));
}

#[test]
fn intersection_of_disjoint_rects_is_empty_not_negative() {
	let a = Rect::new(0.0, 0.0, 10.0, 10.0);
	let b = Rect::new(20.0, 20.0, 10.0, 10.0);
	let i = a.intersection(b);
	assert_eq!(i.width, 0.0);
	assert_eq!(i.height, 0.0);
	assert_eq!(i.origin(), Point::new(20.0, 20.0));
}

#[test]
fn inset_collapses_when_larger_than_rect() {
	let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
	assert_eq!(rect.inset(EdgeInsets::uniform(2.0)), Rect::new(2.0, 2.0, 6.0, 6.0));
	assert!(rect.inset(EdgeInsets::uniform(6.0)).is_empty());
}

#[test]
fn scale_multiplies_origin_and_size() {
	let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
	assert_eq!(rect.scale(Point::new(2.0, 0.5)), Rect::new(20.0, 10.0, 60.0, 20.0));
}

#[test]
fn contains_rect_is_edge_inclusive() {
	let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
	assert!(outer.contains_rect(Rect::new(0.0, 0.0, 100.0, 100.0)));
	assert!(!outer.contains_rect(Rect::new(90.0, 0.0, 11.0, 10.0)));
}

#[test]
fn point_axis_accessors() {
	let p = Point::new(3.0, 4.0);
	assert_eq!(p.get(Axis::X), 3.0);
	assert_eq!(p.with(Axis::Y, 9.0), Point::new(3.0, 9.0));
	assert_eq!(p.translate(1.0, -1.0), Point::new(4.0, 3.0));
	assert!(!Point::new(f64::INFINITY, 0.0).is_finite());
}

#[test]
fn size_and_scroll_helpers() {
	assert_eq!(Size::new(-1.0, 5.0), Size::new(0.0, 5.0));
	assert_eq!(Size::new(2.0, 5.0).get(Axis::Y), 5.0);
	assert_eq!(ScrollOffset::new(7.0, 8.0).as_point(), Point::new(7.0, 8.0));
}

fn arb_rect() -> impl Strategy<Value = Rect> {
	(-500..500i32, -500..500i32, 0..400i32, 0..400i32)
		.prop_map(|(x, y, w, h)| Rect::new(f64::from(x), f64::from(y), f64::from(w), f64::from(h)))
}

proptest! {
	/// Intersection is symmetric, never negative, and lies inside both operands when non-empty.
	#[test]
	fn prop_intersection_is_symmetric_and_contained(a in arb_rect(), b in arb_rect()) {
		let ab = a.intersection(b);
		let ba = b.intersection(a);
		prop_assert_eq!(ab, ba);
		prop_assert!(ab.width >= 0.0 && ab.height >= 0.0);
		if !ab.is_empty() {
			prop_assert!(a.contains_rect(ab));
			prop_assert!(b.contains_rect(ab));
		}
	}
}
