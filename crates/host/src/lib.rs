//! Host geometry adapter for the positioning engine.
//!
//! The engine never walks a live render tree. Everything it needs (bounding rects,
//! offset containers, scroll offsets, clipping ancestors, viewport and document
//! extents) is asked of a [`HostGeometry`] implementation. [`LayoutTree`] is an
//! in-memory host for callers that already hold layout results, and for tests.

/// The adapter trait and the handle types it speaks in.
pub mod adapter;
/// Errors raised when geometry cannot be resolved.
pub mod error;
/// Anchor/floating sources: concrete elements or virtual rectangles.
pub mod source;
/// Arena-backed in-memory host.
pub mod tree;

pub use adapter::{ClippingAncestor, CoordinateSpace, HostGeometry, OffsetContainer};
pub use error::{GeometryError, Result};
pub use source::{RectSource, VirtualElement, VirtualRect};
pub use tree::{LayoutBox, LayoutTree, NodeId, OverflowMode, PositionScheme};
