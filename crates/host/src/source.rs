use std::fmt;

use tether_primitives::{Point, Rect};

/// A rectangle provider that is not an element: a cursor position, a text range, a
/// point on a canvas.
///
/// The rectangle is viewport-relative.
pub trait VirtualElement<E> {
	/// Current viewport-relative rectangle.
	fn bounding_rect(&self) -> Rect;

	/// Element whose document, viewport and clipping ancestors stand in for this source.
	fn context_element(&self) -> Option<E> {
		None
	}
}

impl<E> VirtualElement<E> for Rect {
	fn bounding_rect(&self) -> Rect {
		*self
	}
}

impl<E> VirtualElement<E> for Point {
	fn bounding_rect(&self) -> Rect {
		Rect::new(self.x, self.y, 0.0, 0.0)
	}
}

/// A fixed virtual rectangle with an optional context element.
#[derive(Debug, Clone, PartialEq)]
pub struct VirtualRect<E> {
	/// Viewport-relative rectangle.
	pub rect: Rect,
	/// Context element, if any.
	pub context: Option<E>,
}

impl<E> VirtualRect<E> {
	/// Creates a virtual rect without a context element.
	pub fn new(rect: Rect) -> Self {
		Self { rect, context: None }
	}

	/// Attaches a context element.
	#[must_use]
	pub fn with_context(mut self, context: E) -> Self {
		self.context = Some(context);
		self
	}
}

impl<E: Clone> VirtualElement<E> for VirtualRect<E> {
	fn bounding_rect(&self) -> Rect {
		self.rect
	}

	fn context_element(&self) -> Option<E> {
		self.context.clone()
	}
}

/// Where an anchor or floating rectangle comes from.
pub enum RectSource<'a, E> {
	/// A concrete element the host can query.
	Element(E),
	/// A caller-supplied rectangle provider.
	Virtual(&'a dyn VirtualElement<E>),
}

impl<E: Clone> RectSource<'_, E> {
	/// The concrete element, if this source is one.
	pub fn element(&self) -> Option<&E> {
		match self {
			Self::Element(element) => Some(element),
			Self::Virtual(_) => None,
		}
	}

	/// The element that resolves this source's document context: the element itself, or
	/// a virtual source's context element.
	pub fn context_element(&self) -> Option<E> {
		match self {
			Self::Element(element) => Some(element.clone()),
			Self::Virtual(provider) => provider.context_element(),
		}
	}
}

impl<E> From<E> for RectSource<'_, E> {
	fn from(element: E) -> Self {
		Self::Element(element)
	}
}

impl<E: fmt::Debug> fmt::Debug for RectSource<'_, E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Element(element) => f.debug_tuple("Element").field(element).finish(),
			Self::Virtual(provider) => f.debug_tuple("Virtual").field(&provider.bounding_rect()).finish(),
		}
	}
}
