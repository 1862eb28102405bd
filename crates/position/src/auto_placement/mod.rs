//! Picks the candidate placement with the most room.
//!
//! Candidates are ordered by alignment group, scored on three sides, stably sorted by
//! the overflow on their own side, and the first candidate that fits on all three
//! scored sides wins. If none fits, the one overflowing least on its own side wins.

use serde::Serialize;
use tether_primitives::{Alignment, Axis, Overflow, Placement, Side};

use crate::rects::ElementRects;

/// Overflow of one candidate on its own side and its two alignment sides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlacementScore {
	/// The candidate.
	pub placement: Placement,
	/// `[own side, alignment side, opposite alignment side]`.
	pub overflows: [f64; 3],
}

impl PlacementScore {
	/// Overflow on the candidate's own side; the ranking key.
	pub fn primary(&self) -> f64 {
		self.overflows[0]
	}

	/// Returns true if none of the scored sides overflows.
	pub fn fits(&self) -> bool {
		self.overflows.iter().all(|&value| value <= 0.0)
	}
}

/// Outcome of an auto-placement run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AutoPlacementReport {
	/// The chosen placement.
	pub placement: Placement,
	/// Every candidate's score, in ranked order.
	pub scores: Vec<PlacementScore>,
}

/// Candidate placements for `current`, minus every placement on an excluded side.
///
/// An aligned placement tries its own alignment first, then the opposite alignment, then
/// the centered placements; a centered one tries centered, then `start`, then `end`.
/// Each group keeps the `top, right, bottom, left` side order.
pub fn candidate_placements(current: Placement, exclude_sides: &[Side]) -> Vec<Placement> {
	let groups: [Option<Alignment>; 3] = match current.alignment() {
		Some(alignment) => [Some(alignment), Some(alignment.opposite()), None],
		None => [None, Some(Alignment::Start), Some(Alignment::End)],
	};

	groups
		.into_iter()
		.flat_map(|alignment| Placement::ALL.into_iter().filter(move |p| p.alignment() == alignment))
		.filter(|placement| !exclude_sides.contains(&placement.side()))
		.collect()
}

/// The two sides a candidate's alignment could overflow, most likely first.
pub fn alignment_sides(placement: Placement, rects: &ElementRects, is_rtl: bool) -> (Side, Side) {
	let cross_axis = placement.cross_axis();
	let alignment = placement.alignment();

	let mut main = match cross_axis {
		Axis::X => {
			let leading = if is_rtl { Alignment::End } else { Alignment::Start };
			if alignment == Some(leading) { Side::Right } else { Side::Left }
		}
		Axis::Y => {
			if alignment == Some(Alignment::Start) {
				Side::Bottom
			} else {
				Side::Top
			}
		}
	};
	if rects.anchor.length(cross_axis) > rects.floating.length(cross_axis) {
		main = main.opposite();
	}
	(main, main.opposite())
}

/// Scores every candidate with `probe` and picks the best one.
///
/// `probe` measures a candidate's overflow at its offset-applied, unshifted coordinates.
/// Returns `None` only when `exclude_sides` leaves no candidate.
pub fn choose_best_placement<F>(
	rects: &ElementRects,
	current: Placement,
	probe: F,
	is_rtl: bool,
	exclude_sides: &[Side],
) -> Option<AutoPlacementReport>
where
	F: Fn(Placement) -> Overflow,
{
	let mut scores: Vec<PlacementScore> = candidate_placements(current, exclude_sides)
		.into_iter()
		.map(|placement| {
			let overflow = probe(placement);
			let (first, second) = alignment_sides(placement, rects, is_rtl);
			PlacementScore {
				placement,
				overflows: [overflow[placement.side()], overflow[first], overflow[second]],
			}
		})
		.collect();

	scores.sort_by(|a, b| a.primary().total_cmp(&b.primary()));

	let placement = scores.iter().find(|score| score.fits()).or_else(|| scores.first())?.placement;
	Some(AutoPlacementReport { placement, scores })
}
