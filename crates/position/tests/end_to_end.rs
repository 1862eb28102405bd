//! Full positioning runs against an in-memory layout tree.

use pretty_assertions::assert_eq;
use rstest::rstest;
use tether_host::{HostGeometry, LayoutBox, LayoutTree, NodeId, PositionScheme};
use tether_position::{
	AutoPlacement, ComputationConfig, ComputationMiddlewareOrder, ComputationMiddlewareResult, ComputedPosition,
	OffsetFrame, PositionError, compute_position,
};
use tether_primitives::{Placement, Point, Rect, Side, Size};

struct Scene {
	tree: LayoutTree,
	anchor: NodeId,
	floating: NodeId,
}

impl Scene {
	/// Anchor `{100, 100, 50, 20}` and a 30x10 floating element at document level.
	fn new(viewport: Size) -> Self {
		let mut tree = LayoutTree::new(viewport);
		let anchor = tree.add_root(LayoutBox::new(Rect::new(100.0, 100.0, 50.0, 20.0)));
		let floating =
			tree.add_root(LayoutBox::new(Rect::new(0.0, 0.0, 30.0, 10.0)).positioned(PositionScheme::Absolute));
		Self { tree, anchor, floating }
	}

	/// Same geometry inside a positioned container that clips at `clip_bottom`.
	fn clipped(clip_bottom: f64) -> Self {
		let mut tree = LayoutTree::new(Size::new(800.0, 600.0));
		let clip = tree.add_root(
			LayoutBox::new(Rect::new(0.0, 0.0, 800.0, clip_bottom))
				.positioned(PositionScheme::Relative)
				.clipping(),
		);
		let anchor = tree
			.add_child(clip, LayoutBox::new(Rect::new(100.0, 100.0, 50.0, 20.0)))
			.expect("clip exists");
		let floating = tree
			.add_child(clip, LayoutBox::new(Rect::new(0.0, 0.0, 30.0, 10.0)).positioned(PositionScheme::Absolute))
			.expect("clip exists");
		Self { tree, anchor, floating }
	}

	/// Anchor painted at `{200, 200, 100, 40}` and a floating element painted at 60x20.
	///
	/// Each is placed either in the document or inside a scale-2 container painted at
	/// `(100, 100)`.
	fn scaled(anchor_inside: bool, floating_inside: bool) -> Self {
		let mut tree = LayoutTree::new(Size::new(1000.0, 1000.0));
		let container = tree.add_root(
			LayoutBox::new(Rect::new(100.0, 100.0, 800.0, 800.0))
				.positioned(PositionScheme::Relative)
				.with_scale(2.0),
		);
		let mut place = |inside: bool, layout: LayoutBox| {
			if inside {
				tree.add_child(container, layout).expect("container exists")
			} else {
				tree.add_root(layout)
			}
		};
		let anchor = place(anchor_inside, LayoutBox::new(Rect::new(200.0, 200.0, 100.0, 40.0)));
		let floating = place(
			floating_inside,
			LayoutBox::new(Rect::new(0.0, 0.0, 60.0, 20.0)).positioned(PositionScheme::Absolute),
		);
		Self { tree, anchor, floating }
	}

	fn run(&self, config: &ComputationConfig) -> Result<ComputedPosition, PositionError> {
		compute_position(&self.tree, self.anchor.into(), self.floating.into(), config)
	}

	/// Viewport position the floating element ends up painted at.
	fn painted(&self, position: &ComputedPosition) -> Point {
		let container = self.tree.offset_container(&self.floating, position.strategy).expect("attached");
		let frame = OffsetFrame::resolve(&self.tree, &container, position.strategy).expect("finite frame");
		frame.to_viewport(Rect::from_origin_size(position.coordinates(), Size::ZERO)).origin()
	}
}

fn bottom_with_offset_4() -> ComputationConfig {
	ComputationConfig::default().with_placement(Placement::BOTTOM).with_offset(4.0)
}

#[test]
fn bottom_placement_with_room() {
	let position = Scene::new(Size::new(800.0, 600.0)).run(&bottom_with_offset_4()).expect("attached");
	assert_eq!(position.coordinates(), Point::new(110.0, 124.0));
	assert_eq!(position.placement, Placement::BOTTOM);
}

#[test]
fn clipped_bottom_edge_shifts_back_to_115() {
	let position = Scene::clipped(115.0).run(&bottom_with_offset_4()).expect("attached");
	assert_eq!(position.coordinates(), Point::new(110.0, 105.0));
	assert_eq!(position.placement, Placement::BOTTOM);
}

#[test]
fn auto_placement_flips_to_top_when_bottom_is_short() {
	let config = bottom_with_offset_4().with_auto_placement(AutoPlacement::enabled());
	let position = Scene::new(Size::new(200.0, 130.0)).run(&config).expect("attached");
	assert_eq!(position.placement, Placement::TOP);
	assert_eq!(position.coordinates(), Point::new(110.0, 86.0));
}

#[rstest]
#[case::both_inside(true, true, Point::new(60.0, 70.0))]
#[case::anchor_outside(false, true, Point::new(60.0, 70.0))]
#[case::floating_outside(true, false, Point::new(220.0, 240.0))]
#[case::both_outside(false, false, Point::new(220.0, 240.0))]
fn scaled_container_does_not_move_the_painted_position(
	#[case] anchor_inside: bool,
	#[case] floating_inside: bool,
	#[case] coordinates: Point,
) {
	let scene = Scene::scaled(anchor_inside, floating_inside);
	let config = ComputationConfig::default().with_placement(Placement::BOTTOM).with_offset(0.0);
	let position = scene.run(&config).expect("attached");

	assert_eq!(position.coordinates(), coordinates);
	assert_eq!(scene.painted(&position), Point::new(220.0, 240.0));
}

#[test]
fn top_placement_sits_above_the_anchor() {
	let config = bottom_with_offset_4().with_placement(Placement::TOP);
	let position = Scene::new(Size::new(800.0, 600.0)).run(&config).expect("attached");
	assert_eq!(position.y, 100.0 - 10.0 - 4.0);
}

#[rstest]
#[case(false, 100.0)]
#[case(true, 120.0)]
fn rtl_mirrors_start_alignment(#[case] is_rtl: bool, #[case] expected_x: f64) {
	let config = bottom_with_offset_4().with_placement(Placement::TOP_START).with_rtl(is_rtl);
	let position = Scene::new(Size::new(800.0, 600.0)).run(&config).expect("attached");
	assert_eq!(position.x, expected_x);
}

#[test]
fn excluded_side_is_never_chosen_even_when_it_is_the_only_fit() {
	let config = bottom_with_offset_4().with_auto_placement(AutoPlacement::excluding([Side::Top]));
	let position = Scene::new(Size::new(200.0, 130.0)).run(&config).expect("attached");
	assert_ne!(position.placement.side(), Side::Top);
}

#[test]
fn json_config_drives_a_run() {
	let json = r#"{ "placement": "bottom", "offset": 4, "autoPlacement": true }"#;
	let config: ComputationConfig = serde_json::from_str(json).expect("valid json");
	let position = Scene::new(Size::new(200.0, 130.0)).run(&config).expect("attached");
	assert_eq!(position.placement, Placement::TOP);

	let serialized = serde_json::to_value(&position).expect("serializable");
	assert_eq!(serialized["placement"], "top");
	assert_eq!(serialized["middlewareData"]["autoPlacement"]["placement"], "top");
}

#[test]
fn custom_middleware_order_decides_who_wins() {
	let base = bottom_with_offset_4()
		.with_auto_placement(AutoPlacement::enabled())
		.with_middleware(|_| ComputationMiddlewareResult::placement(Placement::BOTTOM));
	let scene = Scene::new(Size::new(200.0, 130.0));

	let after = scene.run(&base).expect("attached");
	assert_eq!(after.placement, Placement::BOTTOM);
	// Shifted back inside the 130px viewport.
	assert_eq!(after.coordinates(), Point::new(110.0, 120.0));

	let before = scene
		.run(&base.clone().with_middleware_order(ComputationMiddlewareOrder::BeforeAutoPlacement))
		.expect("attached");
	assert_eq!(before.placement, Placement::TOP);
}

#[test]
fn every_side_excluded_is_rejected() {
	let config = bottom_with_offset_4()
		.with_auto_placement(AutoPlacement::excluding([Side::Top, Side::Right, Side::Bottom, Side::Left]));
	let err = Scene::new(Size::new(800.0, 600.0)).run(&config).unwrap_err();
	assert!(!err.is_recoverable());
	assert_eq!(err.to_string(), "invalid configuration: auto-placement excludes every side");
}
