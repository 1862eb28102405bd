use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;

fn tree() -> LayoutTree {
	LayoutTree::new(Size::new(800.0, 600.0))
}

#[test]
fn add_child_links_parent_and_children() {
	let mut tree = tree();
	let root = tree.add_root(LayoutBox::new(Rect::new(0.0, 0.0, 800.0, 600.0)));
	let child = tree.add_child(root, LayoutBox::new(Rect::new(10.0, 10.0, 50.0, 50.0))).expect("root exists");
	assert_eq!(tree.parent(child), Some(root));
	assert_eq!(tree.children(root), &[child]);
	assert_eq!(tree.ancestors(child).collect::<Vec<_>>(), vec![root]);
	assert_eq!(tree.len(), 2);
}

#[test]
fn add_child_rejects_unknown_parent() {
	let mut tree = tree();
	let err = tree.add_child(NodeId(7), LayoutBox::new(Rect::ZERO)).unwrap_err();
	assert_eq!(err, GeometryError::UnknownElement("#7".into()));
}

#[test]
fn detached_ancestor_makes_subtree_unavailable() {
	let mut tree = tree();
	let root = tree.add_root(LayoutBox::new(Rect::new(0.0, 0.0, 100.0, 100.0)));
	let child = tree.add_child(root, LayoutBox::new(Rect::new(0.0, 0.0, 10.0, 10.0))).expect("root exists");
	tree.detach(root).expect("root exists");
	assert!(matches!(
		tree.bounding_rect(&child, CoordinateSpace::Visual),
		Err(GeometryError::Detached(_))
	));
	assert!(matches!(tree.viewport_rect(&child), Err(GeometryError::Detached(_))));
}

#[test]
fn client_rect_subtracts_borders_and_scrollbars() {
	let mut tree = tree();
	let node = tree.add_root(
		LayoutBox::new(Rect::new(10.0, 20.0, 200.0, 100.0))
			.with_border(EdgeInsets::uniform(2.0))
			.with_scrollbar(Size::new(15.0, 0.0)),
	);
	assert_eq!(tree.client_rect(&node).expect("attached"), Rect::new(12.0, 22.0, 181.0, 96.0));
}

#[test]
fn unscaled_rect_divides_by_accumulated_scale() {
	let mut tree = tree();
	let outer = tree.add_root(LayoutBox::new(Rect::new(0.0, 0.0, 400.0, 400.0)).with_scale(2.0));
	let inner = tree.add_child(outer, LayoutBox::new(Rect::new(40.0, 80.0, 20.0, 10.0))).expect("outer exists");
	assert_eq!(
		tree.bounding_rect(&inner, CoordinateSpace::Unscaled).expect("attached"),
		Rect::new(20.0, 40.0, 10.0, 5.0)
	);
	assert_eq!(tree.scale(&inner).expect("attached"), Point::new(2.0, 2.0));
}

#[rstest]
#[case(Strategy::Absolute, true)]
#[case(Strategy::Fixed, false)]
fn offset_container_depends_on_strategy(#[case] strategy: Strategy, #[case] expect_element: bool) {
	let mut tree = tree();
	let positioned = tree.add_root(LayoutBox::new(Rect::new(0.0, 0.0, 300.0, 300.0)).positioned(PositionScheme::Relative));
	let wrapper = tree.add_child(positioned, LayoutBox::new(Rect::new(0.0, 0.0, 300.0, 300.0))).expect("exists");
	let floating = tree.add_child(wrapper, LayoutBox::new(Rect::new(0.0, 0.0, 30.0, 10.0))).expect("exists");

	let container = tree.offset_container(&floating, strategy).expect("attached");
	if expect_element {
		assert_eq!(container, OffsetContainer::Element(positioned));
	} else {
		assert_eq!(container, OffsetContainer::Viewport);
	}
}

#[test]
fn transformed_ancestor_contains_fixed_descendants() {
	let mut tree = tree();
	let transformed = tree.add_root(LayoutBox::new(Rect::new(0.0, 0.0, 300.0, 300.0)).with_scale(0.5));
	let floating = tree.add_child(transformed, LayoutBox::new(Rect::new(0.0, 0.0, 30.0, 10.0))).expect("exists");
	assert_eq!(
		tree.offset_container(&floating, Strategy::Fixed).expect("attached"),
		OffsetContainer::Element(transformed)
	);
}

#[test]
fn overflow_ancestors_end_with_viewport() {
	let mut tree = tree();
	let scroller = tree.add_root(LayoutBox::new(Rect::new(0.0, 0.0, 300.0, 300.0)).clipping());
	let plain = tree.add_child(scroller, LayoutBox::new(Rect::new(0.0, 0.0, 300.0, 300.0))).expect("exists");
	let floating = tree.add_child(plain, LayoutBox::new(Rect::new(0.0, 0.0, 30.0, 10.0))).expect("exists");
	assert_eq!(
		tree.overflow_ancestors(&floating).expect("attached"),
		vec![ClippingAncestor::Element(scroller), ClippingAncestor::Viewport]
	);
}

#[test]
fn absolute_element_escapes_static_clipping_ancestors() {
	let mut tree = tree();
	let relative_clip =
		tree.add_root(LayoutBox::new(Rect::new(0.0, 0.0, 500.0, 500.0)).positioned(PositionScheme::Relative).clipping());
	let static_clip = tree.add_child(relative_clip, LayoutBox::new(Rect::new(0.0, 0.0, 100.0, 100.0)).clipping()).expect("exists");
	let floating = tree
		.add_child(static_clip, LayoutBox::new(Rect::new(0.0, 0.0, 30.0, 10.0)).positioned(PositionScheme::Absolute))
		.expect("exists");

	assert_eq!(
		tree.overflow_ancestors(&floating).expect("attached"),
		vec![ClippingAncestor::Element(relative_clip), ClippingAncestor::Viewport]
	);
}

#[test]
fn fixed_element_escapes_every_untransformed_ancestor() {
	let mut tree = tree();
	let clip = tree.add_root(LayoutBox::new(Rect::new(0.0, 0.0, 500.0, 500.0)).positioned(PositionScheme::Relative).clipping());
	let floating = tree
		.add_child(clip, LayoutBox::new(Rect::new(0.0, 0.0, 30.0, 10.0)).positioned(PositionScheme::Fixed))
		.expect("exists");
	assert_eq!(tree.overflow_ancestors(&floating).expect("attached"), vec![ClippingAncestor::Viewport]);
}

#[test]
fn document_rect_follows_scroll_and_never_shrinks_below_viewport() {
	let mut tree = LayoutTree::new(Size::new(800.0, 600.0))
		.with_document_size(Size::new(800.0, 2000.0))
		.with_scroll(ScrollOffset::new(0.0, 150.0));
	let node = tree.add_root(LayoutBox::new(Rect::new(0.0, 0.0, 10.0, 10.0)));
	assert_eq!(tree.document_rect(&node).expect("attached"), Rect::new(0.0, -150.0, 800.0, 2000.0));
	assert_eq!(
		tree.scroll_offset(&OffsetContainer::Viewport).expect("viewport"),
		ScrollOffset::new(0.0, 150.0)
	);
}

#[test]
fn zero_scale_is_reported_as_non_finite() {
	let mut tree = tree();
	let node = tree.add_root(LayoutBox::new(Rect::new(0.0, 0.0, 10.0, 10.0)).with_scale(0.0));
	assert!(matches!(
		tree.bounding_rect(&node, CoordinateSpace::Unscaled),
		Err(GeometryError::NonFinite(_))
	));
}
