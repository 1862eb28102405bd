//! Floating-element positioning.
//!
//! [`compute_position`] places a floating element next to an anchor: it resolves both
//! rectangles through a [`HostGeometry`](tether_host::HostGeometry) adapter, computes
//! coordinates for the configured placement, optionally picks a better placement, lets a
//! custom middleware override the result, and clamps the main axis into the clipping
//! boundary.
//!
//! ```ignore
//! let config = ComputationConfig::default()
//!     .with_placement(Placement::BOTTOM)
//!     .with_auto_placement(AutoPlacement::enabled());
//! let position = compute_position(&tree, anchor.into(), floating.into(), &config)?;
//! element.set_style("transform", &position.translation.to_string());
//! ```

/// Auto-placement: candidate ordering, scoring and selection.
pub mod auto_placement;
/// The pipeline entry point and its result.
pub mod compute;
/// Run configuration.
pub mod config;
/// Coordinate resolution for a placement.
pub mod coords;
/// Configuration and positioning errors.
pub mod error;
/// The custom middleware hook.
pub mod middleware;
/// Overflow detection against the clipping boundary.
pub mod overflow;
/// Element rectangles and offset container frames.
pub mod rects;
/// Main-axis shift clamp.
pub mod shift;
/// Device-pixel-rounded translation.
pub mod translate;

pub use auto_placement::{AutoPlacementReport, PlacementScore, choose_best_placement};
pub use compute::{ComputedPosition, MiddlewareData, compute_position};
pub use config::{
	AutoPlacement, AutoPlacementOptions, ComputationConfig, ComputationMiddlewareOrder, Offset, RootBoundary,
};
pub use coords::{apply_offset, compute_coords_from_placement, resolve_coordinates};
pub use error::{ConfigError, PositionError, Result};
pub use middleware::{
	ComputationMiddleware, ComputationMiddlewareArgs, ComputationMiddlewareResult, MiddlewareOutcome,
};
pub use overflow::{OverflowDetector, detect_overflow};
pub use rects::{ElementRects, OffsetFrame};
pub use shift::ShiftLimits;
pub use translate::{Translation, round_by_dpr, translate};

