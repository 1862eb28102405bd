//! Caller-supplied override hook run alongside auto-placement.

use std::sync::Arc;

use serde::Serialize;
use tether_primitives::{Overflow, Placement, Point, Strategy};

use crate::error::ConfigError;
use crate::rects::ElementRects;

/// A custom pipeline step. It sees the current state and returns either a replacement
/// placement or replacement coordinates.
pub type ComputationMiddleware = Arc<dyn Fn(&ComputationMiddlewareArgs) -> ComputationMiddlewareResult + Send + Sync>;

/// State handed to a [`ComputationMiddleware`].
#[derive(Debug, Clone, PartialEq)]
pub struct ComputationMiddlewareArgs {
	/// Current coordinates, relative to the offset container.
	pub coordinates: Point,
	/// Current placement.
	pub placement: Placement,
	/// Anchor and floating rectangles.
	pub element_rects: ElementRects,
	/// Positioning strategy.
	pub strategy: Strategy,
	/// Overflow measured at `coordinates`.
	pub overflow: Overflow,
	/// Whether the layout is right-to-left.
	pub is_rtl: bool,
}

/// What a [`ComputationMiddleware`] returns. Exactly one field must be set.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ComputationMiddlewareResult {
	/// Re-resolve coordinates for this placement.
	pub placement: Option<Placement>,
	/// Use these coordinates as-is and keep the current placement.
	pub coordinates: Option<Point>,
}

impl ComputationMiddlewareResult {
	/// Switches to `placement`.
	pub fn placement(placement: Placement) -> Self {
		Self {
			placement: Some(placement),
			coordinates: None,
		}
	}

	/// Overrides the coordinates.
	pub fn coordinates(coordinates: Point) -> Self {
		Self {
			placement: None,
			coordinates: Some(coordinates),
		}
	}
}

/// A checked middleware result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MiddlewareOutcome {
	/// The middleware chose a placement.
	Placement(Placement),
	/// The middleware set coordinates.
	Coordinates(Point),
}

impl TryFrom<ComputationMiddlewareResult> for MiddlewareOutcome {
	type Error = ConfigError;

	fn try_from(result: ComputationMiddlewareResult) -> Result<Self, Self::Error> {
		match (result.placement, result.coordinates) {
			(Some(_), Some(_)) => Err(ConfigError::ConflictingMiddlewareResult),
			(None, None) => Err(ConfigError::EmptyMiddlewareResult),
			(Some(placement), None) => Ok(Self::Placement(placement)),
			(None, Some(point)) if point.is_finite() => Ok(Self::Coordinates(point)),
			(None, Some(point)) => Err(ConfigError::NonFiniteCoordinates { x: point.x, y: point.y }),
		}
	}
}
