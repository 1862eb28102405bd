//! Anchor and floating rectangles expressed in the offset container's coordinate space.

use serde::{Deserialize, Serialize};
use tether_host::{CoordinateSpace, GeometryError, HostGeometry, OffsetContainer, RectSource};
use tether_primitives::{Point, Rect, Strategy};

/// The anchor and floating rectangles of one positioning run.
///
/// Both are relative to the floating element's offset container. `floating` sits at the
/// origin and only its size is meaningful.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementRects {
	/// Anchor rectangle.
	pub anchor: Rect,
	/// Floating element rectangle at `(0, 0)`.
	pub floating: Rect,
}

impl ElementRects {
	/// Creates element rects from an anchor rectangle and a floating size.
	pub fn new(anchor: Rect, floating_width: f64, floating_height: f64) -> Self {
		Self {
			anchor,
			floating: Rect::new(0.0, 0.0, floating_width, floating_height),
		}
	}

	/// Resolves both rectangles through `host` into the space described by `frame`.
	///
	/// Both are read as painted viewport rects and divided by the container's scale, so an
	/// anchor under a different transform than the container still lands in container units.
	pub fn resolve<H: HostGeometry>(
		host: &H,
		anchor: &RectSource<'_, H::Element>,
		floating: &RectSource<'_, H::Element>,
		frame: &OffsetFrame,
	) -> tether_host::Result<Self> {
		let anchor_rect = frame.to_container(painted_rect(host, anchor)?);
		let floating_size = frame.to_container(painted_rect(host, floating)?).size();

		let rects = Self::new(anchor_rect, floating_size.width, floating_size.height);
		if rects.anchor.is_finite() && rects.floating.is_finite() {
			Ok(rects)
		} else {
			Err(GeometryError::NonFinite("element rects".into()))
		}
	}
}

fn painted_rect<H: HostGeometry>(host: &H, source: &RectSource<'_, H::Element>) -> tether_host::Result<Rect> {
	match source {
		RectSource::Element(element) => host.bounding_rect(element, CoordinateSpace::Visual),
		RectSource::Virtual(provider) => Ok(provider.bounding_rect()),
	}
}

/// Mapping between an offset container's coordinate space and the viewport.
///
/// A point `p` in container space sits at `p * scale - scroll * scale + origin` in the
/// viewport, where `origin` is the container's client-box origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetFrame {
	/// Scroll position of the container.
	pub scroll: Point,
	/// Accumulated transform scale of the container.
	pub scale: Point,
	/// Viewport position of the container's client box.
	pub origin: Point,
}

impl Default for OffsetFrame {
	fn default() -> Self {
		Self::IDENTITY
	}
}

impl OffsetFrame {
	/// Container space equals viewport space (a viewport container under `fixed`).
	pub const IDENTITY: Self = Self {
		scroll: Point::ORIGIN,
		scale: Point::new(1.0, 1.0),
		origin: Point::ORIGIN,
	};

	/// Captures the frame of `container` for `strategy`.
	pub fn resolve<H: HostGeometry>(
		host: &H,
		container: &OffsetContainer<H::Element>,
		strategy: Strategy,
	) -> tether_host::Result<Self> {
		let frame = match container {
			OffsetContainer::Viewport if strategy.is_fixed() => Self::IDENTITY,
			OffsetContainer::Viewport => Self {
				scroll: host.scroll_offset(container)?.as_point(),
				..Self::IDENTITY
			},
			OffsetContainer::Element(element) => Self {
				scroll: host.scroll_offset(container)?.as_point(),
				scale: host.scale(element)?,
				origin: host.client_rect(element)?.origin(),
			},
		};

		let usable_scale = frame.scale.is_finite() && frame.scale.x != 0.0 && frame.scale.y != 0.0;
		if usable_scale && frame.scroll.is_finite() && frame.origin.is_finite() {
			Ok(frame)
		} else {
			Err(GeometryError::NonFinite(format!("offset container {container:?}")))
		}
	}

	/// Converts a painted viewport rectangle into container space.
	///
	/// Inverse of [`OffsetFrame::to_viewport`]. Extents are clamped to be non-negative.
	pub fn to_container(&self, rect: Rect) -> Rect {
		let Point { x: sx, y: sy } = self.scale;
		Rect::new(
			(rect.x - self.origin.x) / sx + self.scroll.x,
			(rect.y - self.origin.y) / sy + self.scroll.y,
			rect.width / sx,
			rect.height / sy,
		)
	}

	/// Converts a container-space rectangle into viewport space.
	pub fn to_viewport(&self, rect: Rect) -> Rect {
		let Point { x: sx, y: sy } = self.scale;
		Rect::new(
			rect.x * sx - self.scroll.x * sx + self.origin.x,
			rect.y * sy - self.scroll.y * sy + self.origin.y,
			rect.width * sx,
			rect.height * sy,
		)
	}
}
