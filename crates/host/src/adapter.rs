use std::fmt;

use tether_primitives::{Point, Rect, ScrollOffset, Strategy};

use crate::error::Result;

/// Which box a bounding-rect query should report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoordinateSpace {
	/// The rectangle as painted, relative to the viewport.
	#[default]
	Visual,
	/// The painted rectangle divided by the element's accumulated transform scale.
	///
	/// Use this for sizes and positions that feed back into layout coordinates.
	Unscaled,
}

/// The box whose padding edge is the coordinate origin for positioning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OffsetContainer<E> {
	/// The viewport (no positioned ancestor, or `fixed` strategy).
	Viewport,
	/// A positioned (or otherwise containing-block establishing) ancestor.
	Element(E),
}

impl<E> OffsetContainer<E> {
	/// Returns the container element, if it is not the viewport.
	pub fn element(&self) -> Option<&E> {
		match self {
			Self::Viewport => None,
			Self::Element(element) => Some(element),
		}
	}
}

/// One entry in an element's clipping chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClippingAncestor<E> {
	/// A scrollable or clipping ancestor; contributes its client box.
	Element(E),
	/// The root boundary.
	Viewport,
}

/// Geometry queries the positioning engine needs from its host.
///
/// All queries made during one positioning run must observe the same layout; the
/// engine does not re-validate between calls.
pub trait HostGeometry {
	/// Handle naming an element in the host's tree.
	type Element: Clone + fmt::Debug;

	/// Border-box rectangle of `element` relative to the viewport.
	fn bounding_rect(&self, element: &Self::Element, space: CoordinateSpace) -> Result<Rect>;

	/// Client box of `element` (bounding box minus borders and scrollbars), relative to
	/// the viewport.
	fn client_rect(&self, element: &Self::Element) -> Result<Rect>;

	/// Nearest ancestor that establishes the coordinate space for `strategy`.
	fn offset_container(&self, element: &Self::Element, strategy: Strategy) -> Result<OffsetContainer<Self::Element>>;

	/// Current scroll position of a container or of the viewport.
	fn scroll_offset(&self, container: &OffsetContainer<Self::Element>) -> Result<ScrollOffset>;

	/// Clipping ancestors of `element`, innermost first, ending with the viewport.
	///
	/// Ancestors the element escapes (for example a static `overflow: hidden` box above an
	/// absolutely positioned element) must be left out.
	fn overflow_ancestors(&self, element: &Self::Element) -> Result<Vec<ClippingAncestor<Self::Element>>>;

	/// Visible viewport of the document containing `element`.
	fn viewport_rect(&self, element: &Self::Element) -> Result<Rect>;

	/// Full scrollable extent of the document containing `element`, relative to the
	/// viewport.
	fn document_rect(&self, element: &Self::Element) -> Result<Rect>;

	/// Accumulated transform scale applied to `element`.
	fn scale(&self, element: &Self::Element) -> Result<Point> {
		let _ = element;
		Ok(Point::new(1.0, 1.0))
	}

	/// Device pixels per layout pixel for the display showing `element`.
	fn device_pixel_ratio(&self, element: &Self::Element) -> f64 {
		let _ = element;
		1.0
	}
}

impl<H: HostGeometry + ?Sized> HostGeometry for &H {
	type Element = H::Element;

	fn bounding_rect(&self, element: &Self::Element, space: CoordinateSpace) -> Result<Rect> {
		(**self).bounding_rect(element, space)
	}

	fn client_rect(&self, element: &Self::Element) -> Result<Rect> {
		(**self).client_rect(element)
	}

	fn offset_container(&self, element: &Self::Element, strategy: Strategy) -> Result<OffsetContainer<Self::Element>> {
		(**self).offset_container(element, strategy)
	}

	fn scroll_offset(&self, container: &OffsetContainer<Self::Element>) -> Result<ScrollOffset> {
		(**self).scroll_offset(container)
	}

	fn overflow_ancestors(&self, element: &Self::Element) -> Result<Vec<ClippingAncestor<Self::Element>>> {
		(**self).overflow_ancestors(element)
	}

	fn viewport_rect(&self, element: &Self::Element) -> Result<Rect> {
		(**self).viewport_rect(element)
	}

	fn document_rect(&self, element: &Self::Element) -> Result<Rect> {
		(**self).document_rect(element)
	}

	fn scale(&self, element: &Self::Element) -> Result<Point> {
		(**self).scale(element)
	}

	fn device_pixel_ratio(&self, element: &Self::Element) -> f64 {
		(**self).device_pixel_ratio(element)
	}
}
