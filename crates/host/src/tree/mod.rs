//! Arena-backed in-memory layout tree implementing [`HostGeometry`].
//!
//! Boxes carry already-computed layout: a painted border box, borders, scrollbar
//! gutters, scroll position, overflow clipping, a positioning scheme and a transform
//! scale. The tree answers the engine's queries from that data alone.

use std::fmt;

use tether_primitives::{EdgeInsets, Point, Rect, ScrollOffset, Size, Strategy};

use crate::adapter::{ClippingAncestor, CoordinateSpace, HostGeometry, OffsetContainer};
use crate::error::{GeometryError, Result};

/// Index of a box in a [`LayoutTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// CSS-style positioning scheme of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PositionScheme {
	/// Normal flow.
	#[default]
	Static,
	/// Offset from its normal-flow position; establishes a containing block.
	Relative,
	/// Positioned against the nearest containing block.
	Absolute,
	/// Positioned against the viewport (or a transformed ancestor).
	Fixed,
	/// Normal flow until it sticks inside its scrolling ancestor.
	Sticky,
}

impl PositionScheme {
	/// Returns true for every scheme except [`PositionScheme::Static`].
	pub const fn is_positioned(self) -> bool {
		!matches!(self, Self::Static)
	}
}

/// Whether a box clips its descendants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowMode {
	/// Descendants paint outside the box.
	#[default]
	Visible,
	/// Descendants are clipped to the client box (`hidden`, `scroll`, `auto`, `clip`).
	Clip,
}

/// Layout data for one box.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutBox {
	/// Painted border box, relative to the viewport.
	pub border_box: Rect,
	/// Border widths.
	pub border: EdgeInsets,
	/// Vertical scrollbar width (`width`) and horizontal scrollbar height (`height`).
	pub scrollbar: Size,
	/// Scroll position of the box's content.
	pub scroll: ScrollOffset,
	/// Overflow clipping.
	pub overflow: OverflowMode,
	/// Positioning scheme.
	pub position: PositionScheme,
	/// Uniform transform scale applied by this box (1.0 for none).
	pub scale: f64,
	/// Whether the box is part of the rendered tree.
	pub attached: bool,
}

impl LayoutBox {
	/// A static, unclipped, unscaled box with the given border box.
	pub fn new(border_box: Rect) -> Self {
		Self {
			border_box,
			border: EdgeInsets::ZERO,
			scrollbar: Size::ZERO,
			scroll: ScrollOffset::ZERO,
			overflow: OverflowMode::Visible,
			position: PositionScheme::Static,
			scale: 1.0,
			attached: true,
		}
	}

	/// Sets the positioning scheme.
	#[must_use]
	pub fn positioned(mut self, position: PositionScheme) -> Self {
		self.position = position;
		self
	}

	/// Makes the box clip its descendants.
	#[must_use]
	pub fn clipping(mut self) -> Self {
		self.overflow = OverflowMode::Clip;
		self
	}

	/// Sets border widths.
	#[must_use]
	pub fn with_border(mut self, border: EdgeInsets) -> Self {
		self.border = border;
		self
	}

	/// Sets scrollbar gutters.
	#[must_use]
	pub fn with_scrollbar(mut self, scrollbar: Size) -> Self {
		self.scrollbar = scrollbar;
		self
	}

	/// Sets the scroll position.
	#[must_use]
	pub fn with_scroll(mut self, scroll: ScrollOffset) -> Self {
		self.scroll = scroll;
		self
	}

	/// Sets the transform scale.
	#[must_use]
	pub fn with_scale(mut self, scale: f64) -> Self {
		self.scale = scale;
		self
	}

	/// Establishes a containing block for absolutely positioned descendants.
	fn contains_absolute(&self) -> bool {
		self.position.is_positioned() || self.scale != 1.0
	}

	/// Establishes a containing block for fixed-position descendants.
	fn contains_fixed(&self) -> bool {
		self.scale != 1.0
	}
}

#[derive(Debug, Clone)]
struct Node {
	layout: LayoutBox,
	parent: Option<NodeId>,
	children: Vec<NodeId>,
}

/// In-memory layout tree.
///
/// Nodes are stored in insertion order and addressed by [`NodeId`]; a node with no
/// parent sits directly in the document.
#[derive(Debug, Clone)]
pub struct LayoutTree {
	nodes: Vec<Node>,
	viewport: Size,
	document: Size,
	scroll: ScrollOffset,
	device_pixel_ratio: f64,
}

impl LayoutTree {
	/// Creates an empty tree with the given viewport size. The document is initially the
	/// same size as the viewport.
	pub fn new(viewport: Size) -> Self {
		Self {
			nodes: Vec::new(),
			viewport,
			document: viewport,
			scroll: ScrollOffset::ZERO,
			device_pixel_ratio: 1.0,
		}
	}

	/// Sets the scrollable document size.
	#[must_use]
	pub fn with_document_size(mut self, document: Size) -> Self {
		self.document = document;
		self
	}

	/// Sets the document scroll position.
	#[must_use]
	pub fn with_scroll(mut self, scroll: ScrollOffset) -> Self {
		self.scroll = scroll;
		self
	}

	/// Sets the device pixel ratio.
	#[must_use]
	pub fn with_device_pixel_ratio(mut self, ratio: f64) -> Self {
		self.device_pixel_ratio = ratio;
		self
	}

	/// Adds a box directly under the document.
	pub fn add_root(&mut self, layout: LayoutBox) -> NodeId {
		let id = NodeId(self.nodes.len());
		self.nodes.push(Node {
			layout,
			parent: None,
			children: Vec::new(),
		});
		id
	}

	/// Adds a box as the last child of `parent`.
	pub fn add_child(&mut self, parent: NodeId, layout: LayoutBox) -> Result<NodeId> {
		let id = NodeId(self.nodes.len());
		self.node_mut(parent)?.children.push(id);
		self.nodes.push(Node {
			layout,
			parent: Some(parent),
			children: Vec::new(),
		});
		Ok(id)
	}

	/// Number of boxes in the tree.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// Returns true if the tree holds no boxes.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Layout data of `id`.
	pub fn get(&self, id: NodeId) -> Option<&LayoutBox> {
		self.nodes.get(id.0).map(|node| &node.layout)
	}

	/// Mutable layout data of `id`, for updating geometry between runs.
	pub fn get_mut(&mut self, id: NodeId) -> Option<&mut LayoutBox> {
		self.nodes.get_mut(id.0).map(|node| &mut node.layout)
	}

	/// Parent of `id`, or `None` for document-level boxes and unknown ids.
	pub fn parent(&self, id: NodeId) -> Option<NodeId> {
		self.nodes.get(id.0).and_then(|node| node.parent)
	}

	/// Children of `id` in insertion order.
	pub fn children(&self, id: NodeId) -> &[NodeId] {
		self.nodes.get(id.0).map(|node| node.children.as_slice()).unwrap_or_default()
	}

	/// Ancestors of `id`, innermost first.
	pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
		std::iter::successors(self.parent(id), move |&current| self.parent(current))
	}

	/// Removes `id` (and so its subtree) from rendering without freeing its slot.
	pub fn detach(&mut self, id: NodeId) -> Result<()> {
		self.node_mut(id)?.layout.attached = false;
		Ok(())
	}

	/// Sets the document scroll position.
	pub fn set_scroll(&mut self, scroll: ScrollOffset) {
		self.scroll = scroll;
	}

	fn node(&self, id: NodeId) -> Result<&Node> {
		self.nodes.get(id.0).ok_or_else(|| GeometryError::UnknownElement(id.to_string()))
	}

	fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
		self.nodes.get_mut(id.0).ok_or_else(|| GeometryError::UnknownElement(id.to_string()))
	}

	/// Looks up `id` and checks it and every ancestor is attached.
	fn attached(&self, id: NodeId) -> Result<&LayoutBox> {
		let node = self.node(id)?;
		let detached = !node.layout.attached || self.ancestors(id).any(|a| self.get(a).is_some_and(|l| !l.attached));
		if detached {
			return Err(GeometryError::Detached(id.to_string()));
		}
		Ok(&node.layout)
	}

	/// Product of the scales of `id` and its ancestors.
	fn effective_scale(&self, id: NodeId) -> Result<f64> {
		let own = self.attached(id)?.scale;
		Ok(self.ancestors(id).filter_map(|a| self.get(a)).fold(own, |acc, layout| acc * layout.scale))
	}

	fn check_finite(id: NodeId, rect: Rect) -> Result<Rect> {
		if rect.is_finite() {
			Ok(rect)
		} else {
			Err(GeometryError::NonFinite(id.to_string()))
		}
	}
}

impl HostGeometry for LayoutTree {
	type Element = NodeId;

	fn bounding_rect(&self, element: &NodeId, space: CoordinateSpace) -> Result<Rect> {
		let rect = self.attached(*element)?.border_box;
		let rect = match space {
			CoordinateSpace::Visual => rect,
			CoordinateSpace::Unscaled => {
				let scale = self.effective_scale(*element)?;
				rect.scale(Point::new(1.0 / scale, 1.0 / scale))
			}
		};
		Self::check_finite(*element, rect)
	}

	fn client_rect(&self, element: &NodeId) -> Result<Rect> {
		let layout = self.attached(*element)?;
		let scale = self.effective_scale(*element)?;
		let insets = EdgeInsets::new(
			layout.border.top * scale,
			(layout.border.right + layout.scrollbar.width) * scale,
			(layout.border.bottom + layout.scrollbar.height) * scale,
			layout.border.left * scale,
		);
		Self::check_finite(*element, layout.border_box.inset(insets))
	}

	fn offset_container(&self, element: &NodeId, strategy: Strategy) -> Result<OffsetContainer<NodeId>> {
		self.attached(*element)?;
		let container = self.ancestors(*element).find(|&ancestor| {
			self.get(ancestor).is_some_and(|layout| match strategy {
				Strategy::Absolute => layout.contains_absolute(),
				Strategy::Fixed => layout.contains_fixed(),
			})
		});
		Ok(container.map_or(OffsetContainer::Viewport, OffsetContainer::Element))
	}

	fn scroll_offset(&self, container: &OffsetContainer<NodeId>) -> Result<ScrollOffset> {
		match container {
			OffsetContainer::Viewport => Ok(self.scroll),
			OffsetContainer::Element(id) => Ok(self.attached(*id)?.scroll),
		}
	}

	fn overflow_ancestors(&self, element: &NodeId) -> Result<Vec<ClippingAncestor<NodeId>>> {
		// Tracks the scheme of the box whose containing block is still being searched
		// for: a clipping ancestor below that containing block does not clip.
		let mut escaping = self.attached(*element)?.position;
		let mut chain = Vec::new();
		for ancestor in self.ancestors(*element) {
			let layout = self.attached(ancestor)?;
			let escapes = match escaping {
				PositionScheme::Absolute => !layout.contains_absolute(),
				PositionScheme::Fixed => !layout.contains_fixed(),
				_ => false,
			};
			if escapes {
				tracing::trace!(%element, %ancestor, "layout_tree.clip.escaped");
				continue;
			}
			if layout.overflow == OverflowMode::Clip {
				chain.push(ClippingAncestor::Element(ancestor));
			}
			escaping = layout.position;
		}
		chain.push(ClippingAncestor::Viewport);
		Ok(chain)
	}

	fn viewport_rect(&self, element: &NodeId) -> Result<Rect> {
		self.attached(*element)?;
		Ok(Rect::new(0.0, 0.0, self.viewport.width, self.viewport.height))
	}

	fn document_rect(&self, element: &NodeId) -> Result<Rect> {
		self.attached(*element)?;
		Ok(Rect::new(
			-self.scroll.left,
			-self.scroll.top,
			self.document.width.max(self.viewport.width),
			self.document.height.max(self.viewport.height),
		))
	}

	fn scale(&self, element: &NodeId) -> Result<Point> {
		let scale = self.effective_scale(*element)?;
		Ok(Point::new(scale, scale))
	}

	fn device_pixel_ratio(&self, _element: &NodeId) -> f64 {
		self.device_pixel_ratio
	}
}

#[cfg(test)]
mod tests;
