//! Error types for positioning runs.

use tether_host::GeometryError;
use tether_primitives::ParsePlacementError;
use thiserror::Error;

/// A configuration or middleware result the engine refuses to run with.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
	/// Placement text that is not one of the twelve placements.
	#[error(transparent)]
	InvalidPlacement(#[from] ParsePlacementError),

	/// An offset component is NaN or infinite.
	#[error("offset {axis} must be finite, got {value}")]
	NonFiniteOffset {
		/// `"mainAxis"` or `"crossAxis"`.
		axis: &'static str,
		/// The rejected value.
		value: f64,
	},

	/// Boundary padding is NaN or infinite.
	#[error("boundary padding must be finite")]
	NonFinitePadding,

	/// Auto-placement would have no candidate left.
	#[error("auto-placement excludes every side")]
	AllSidesExcluded,

	/// A custom middleware returned both a placement and coordinates.
	#[error("computation middleware returned both a placement and coordinates")]
	ConflictingMiddlewareResult,

	/// A custom middleware returned neither a placement nor coordinates.
	#[error("computation middleware returned neither a placement nor coordinates")]
	EmptyMiddlewareResult,

	/// A custom middleware returned NaN or infinite coordinates.
	#[error("computation middleware returned non-finite coordinates ({x}, {y})")]
	NonFiniteCoordinates {
		/// Returned `x`.
		x: f64,
		/// Returned `y`.
		y: f64,
	},
}

/// Why a positioning run produced no result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PositionError {
	/// The configuration (or a middleware result) is invalid. Fatal for this
	/// configuration.
	#[error("invalid configuration: {0}")]
	InvalidConfig(#[from] ConfigError),

	/// The host could not resolve some geometry. Skip this cycle and retry on the next
	/// layout change.
	#[error("geometry unavailable: {0}")]
	GeometryUnavailable(#[from] GeometryError),
}

impl PositionError {
	/// Returns true if retrying after the next layout change may succeed.
	pub fn is_recoverable(&self) -> bool {
		matches!(self, Self::GeometryUnavailable(_))
	}
}

/// Result type for positioning runs.
pub type Result<T> = std::result::Result<T, PositionError>;
