//! Core value types for floating-element positioning: geometry, overflow, and placements.
//!
//! Everything here is a plain `Copy` value recomputed on every positioning run.

/// Points, sizes, rectangles, edge insets and scroll offsets.
pub mod geometry;
/// Signed per-side overflow against a clipping boundary.
pub mod overflow;
/// Sides, alignments, axes and the twelve placements.
pub mod placement;
/// Positioning strategies (`absolute` / `fixed`).
pub mod strategy;

pub use geometry::{EdgeInsets, Point, Rect, ScrollOffset, Size};
pub use overflow::Overflow;
pub use placement::{Alignment, Axis, ParsePlacementError, Placement, Side};
pub use strategy::Strategy;
