use proptest::prelude::*;
use tether_primitives::Rect;

use super::*;
use crate::overflow::OverflowDetector;
use crate::rects::ElementRects;

#[test]
fn limits_come_from_the_overflow_on_both_ends() {
	let overflow = Overflow::new(-124.0, 0.0, 19.0, 0.0);
	let limits = ShiftLimits::new(124.0, &overflow, Axis::Y);
	assert_eq!(limits, ShiftLimits { min: 0.0, max: 105.0 });
	assert_eq!(limits.clamp(124.0), 105.0);
}

#[test]
fn inverted_range_pins_to_min() {
	let limits = ShiftLimits { min: 15.0, max: -10.0 };
	assert_eq!(limits.clamp(10.0), 15.0);
	assert_eq!(limits.clamp(-50.0), 15.0);
	assert_eq!(limits.clamp(50.0), 15.0);
}

#[test]
fn shift_only_moves_the_requested_axis() {
	let overflow = Overflow::new(5.0, 7.0, -20.0, -20.0);
	assert_eq!(shift(Point::new(10.0, 10.0), &overflow, Axis::Y), Point::new(10.0, 15.0));
	assert_eq!(shift(Point::new(10.0, 10.0), &overflow, Axis::X), Point::new(3.0, 10.0));
}

proptest! {
	#[test]
	fn shift_is_idempotent(
		clip in (-200i32..200, -200i32..200, 0i32..400, 0i32..400),
		size in (0i32..500, 0i32..500),
		coords in (-600i32..600, -600i32..600),
		vertical in any::<bool>(),
	) {
		let clip = Rect::new(f64::from(clip.0), f64::from(clip.1), f64::from(clip.2), f64::from(clip.3));
		let detector = OverflowDetector::new(clip);
		let rects = ElementRects::new(Rect::ZERO, f64::from(size.0), f64::from(size.1));
		let axis = if vertical { Axis::Y } else { Axis::X };

		let start = Point::new(f64::from(coords.0), f64::from(coords.1));
		let once = shift(start, &detector.detect(start, &rects), axis);
		let twice = shift(once, &detector.detect(once, &rects), axis);
		prop_assert_eq!(once, twice);
	}
}
