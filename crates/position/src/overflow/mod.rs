//! Signed overflow of the floating element against its clipping boundary.

use tether_host::{ClippingAncestor, GeometryError, HostGeometry};
use tether_primitives::{EdgeInsets, Overflow, Point, Rect};

use crate::config::RootBoundary;
use crate::rects::{ElementRects, OffsetFrame};

/// Overflow of `element` against `clipping`, both in viewport space.
pub fn detect_overflow(clipping: Rect, element: Rect) -> Overflow {
	Overflow::between(element, clipping)
}

/// Measures overflow at proposed coordinates.
///
/// Built once per run: the clipping rectangle and the offset container frame do not
/// change while candidate coordinates are tried.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverflowDetector {
	clipping: Rect,
	frame: OffsetFrame,
}

impl OverflowDetector {
	/// A detector for a viewport-space clipping rect and container coordinates equal to
	/// viewport coordinates.
	pub fn new(clipping: Rect) -> Self {
		Self {
			clipping,
			frame: OffsetFrame::IDENTITY,
		}
	}

	/// Replaces the offset container frame.
	#[must_use]
	pub fn with_frame(mut self, frame: OffsetFrame) -> Self {
		self.frame = frame;
		self
	}

	/// Builds the clipping rectangle for `clipping_element` and pairs it with `frame`.
	///
	/// The rectangle is the intersection of every overflow ancestor's client box, with
	/// the viewport entry standing for `root_boundary`, shrunk by `padding`.
	pub fn resolve<H: HostGeometry>(
		host: &H,
		clipping_element: &H::Element,
		frame: OffsetFrame,
		root_boundary: RootBoundary,
		padding: EdgeInsets,
	) -> tether_host::Result<Self> {
		let ancestors = host.overflow_ancestors(clipping_element)?;
		let root = match root_boundary {
			RootBoundary::Viewport => host.viewport_rect(clipping_element)?,
			RootBoundary::Document => host.document_rect(clipping_element)?,
		};

		let mut clipping: Option<Rect> = None;
		for ancestor in &ancestors {
			let rect = match ancestor {
				ClippingAncestor::Element(element) => host.client_rect(element)?,
				ClippingAncestor::Viewport => root,
			};
			clipping = Some(clipping.map_or(rect, |acc| acc.intersection(rect)));
		}
		let clipping = match clipping {
			Some(rect) => rect,
			None => host.document_rect(clipping_element)?,
		}
		.inset(padding);

		if !clipping.is_finite() {
			return Err(GeometryError::NonFinite(format!("clipping rect of {clipping_element:?}")));
		}
		tracing::trace!(
			element = ?clipping_element,
			ancestors = ancestors.len(),
			?clipping,
			"overflow.clipping_rect"
		);
		Ok(Self { clipping, frame })
	}

	/// Viewport-space clipping rectangle.
	pub fn clipping_rect(&self) -> Rect {
		self.clipping
	}

	/// Offset container frame.
	pub fn frame(&self) -> OffsetFrame {
		self.frame
	}

	/// Overflow of the floating element placed at `coordinates`, in container units.
	pub fn detect(&self, coordinates: Point, rects: &ElementRects) -> Overflow {
		let placed = rects.floating.with_origin(coordinates);
		let element = self.frame.to_viewport(placed);
		let overflow = detect_overflow(self.clipping, element);
		let Point { x: sx, y: sy } = self.frame.scale;
		Overflow::new(overflow.top / sy, overflow.right / sx, overflow.bottom / sy, overflow.left / sx)
	}
}
