//! The positioning pipeline.
//!
//! One run resolves geometry once, computes coordinates for the configured placement,
//! then runs auto-placement and the custom middleware in the configured order. Each step
//! that changes the placement re-resolves coordinates (including the shift clamp).

use serde::Serialize;
use tether_host::{GeometryError, HostGeometry, OffsetContainer, RectSource};
use tether_primitives::{Placement, Point, Strategy};
use tracing::{debug, trace};

use crate::auto_placement::{AutoPlacementReport, choose_best_placement};
use crate::config::{ComputationConfig, ComputationMiddlewareOrder};
use crate::coords::{
	ResolvedCoordinates, apply_offset, compute_coords_from_placement, resolve_coordinates_with_shift,
};
use crate::error::Result;
use crate::middleware::{ComputationMiddleware, ComputationMiddlewareArgs, MiddlewareOutcome};
use crate::overflow::OverflowDetector;
use crate::rects::{ElementRects, OffsetFrame};
use crate::translate::{Translation, translate};

/// What the pipeline steps did during a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MiddlewareData {
	/// Auto-placement scores and choice, if it ran.
	pub auto_placement: Option<AutoPlacementReport>,
	/// The custom middleware's result, if it ran.
	pub custom: Option<MiddlewareOutcome>,
	/// Movement applied by the last shift clamp. Zero when the custom middleware set
	/// the final coordinates.
	pub shift: Point,
}

/// Result of a positioning run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedPosition {
	/// Horizontal coordinate relative to the offset container.
	pub x: f64,
	/// Vertical coordinate relative to the offset container.
	pub y: f64,
	/// Final placement.
	pub placement: Placement,
	/// Strategy the coordinates are expressed in.
	pub strategy: Strategy,
	/// `(x, y)` rounded to device pixels.
	pub translation: Translation,
	/// Per-step details.
	pub middleware_data: MiddlewareData,
}

impl ComputedPosition {
	/// Final coordinates as a point.
	pub fn coordinates(&self) -> Point {
		Point::new(self.x, self.y)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
	AutoPlacement,
	Custom,
}

impl Step {
	fn order(order: ComputationMiddlewareOrder) -> [Self; 2] {
		match order {
			ComputationMiddlewareOrder::BeforeAutoPlacement => [Self::Custom, Self::AutoPlacement],
			ComputationMiddlewareOrder::AfterAutoPlacement => [Self::AutoPlacement, Self::Custom],
		}
	}
}

/// Mutable state threaded through the pipeline steps.
struct Pipeline<'a> {
	config: &'a ComputationConfig,
	rects: ElementRects,
	detector: OverflowDetector,
	placement: Placement,
	coordinates: Point,
	data: MiddlewareData,
}

impl Pipeline<'_> {
	fn apply(&mut self, resolved: ResolvedCoordinates) {
		self.coordinates = resolved.coordinates;
		self.data.shift = resolved.shift_delta();
	}

	fn resolve(&self, placement: Placement) -> ResolvedCoordinates {
		resolve_coordinates_with_shift(
			&self.rects,
			placement,
			self.config.offset,
			self.config.is_rtl,
			&self.detector,
		)
	}

	fn switch_placement(&mut self, placement: Placement, step: &'static str) {
		if placement != self.placement {
			debug!(step, from = %self.placement, to = %placement, "position.placement_changed");
		}
		self.placement = placement;
		let resolved = self.resolve(placement);
		self.apply(resolved);
	}

	fn run_auto_placement(&mut self) {
		let config = self.config;
		let Some(options) = config.auto_placement.options() else {
			return;
		};
		let overflow = self.detector.detect(self.coordinates, &self.rects);
		trace!(step = "autoPlacement", placement = %self.placement, ?overflow, "position.step.start");

		let (rects, detector, offset, is_rtl) = (self.rects, self.detector, config.offset, config.is_rtl);
		let probe = |placement: Placement| {
			let base = compute_coords_from_placement(&rects, placement, is_rtl);
			detector.detect(apply_offset(base, placement, offset, is_rtl), &rects)
		};

		let Some(report) = choose_best_placement(&rects, self.placement, probe, is_rtl, &options.exclude_sides) else {
			return;
		};
		let chosen = report.placement;
		trace!(step = "autoPlacement", candidates = report.scores.len(), placement = %chosen, "position.step");
		self.data.auto_placement = Some(report);
		self.switch_placement(chosen, "autoPlacement");
	}

	fn run_custom(&mut self, middleware: &ComputationMiddleware) -> Result<()> {
		let args = ComputationMiddlewareArgs {
			coordinates: self.coordinates,
			placement: self.placement,
			element_rects: self.rects,
			strategy: self.config.strategy,
			overflow: self.detector.detect(self.coordinates, &self.rects),
			is_rtl: self.config.is_rtl,
		};
		let outcome = MiddlewareOutcome::try_from(middleware(&args))?;
		trace!(step = "custom", ?outcome, "position.step");
		self.data.custom = Some(outcome);

		match outcome {
			MiddlewareOutcome::Placement(placement) => self.switch_placement(placement, "custom"),
			MiddlewareOutcome::Coordinates(point) => {
				self.coordinates = point;
				self.data.shift = Point::ORIGIN;
			}
		}
		Ok(())
	}
}

/// Computes where to put `floating` next to `anchor`.
///
/// Host geometry is read once up front; candidate placements are then evaluated against
/// that snapshot.
pub fn compute_position<H: HostGeometry>(
	host: &H,
	anchor: RectSource<'_, H::Element>,
	floating: RectSource<'_, H::Element>,
	config: &ComputationConfig,
) -> Result<ComputedPosition> {
	config.validate()?;

	let context = floating
		.context_element()
		.or_else(|| anchor.context_element())
		.ok_or(GeometryError::MissingContext("clipping boundary"))?;
	let container = match &floating {
		RectSource::Element(element) => host.offset_container(element, config.strategy)?,
		RectSource::Virtual(provider) => match provider.context_element() {
			Some(element) => host.offset_container(&element, config.strategy)?,
			None => OffsetContainer::Viewport,
		},
	};

	let frame = OffsetFrame::resolve(host, &container, config.strategy)?;
	let rects = ElementRects::resolve(host, &anchor, &floating, &frame)?;
	let detector = OverflowDetector::resolve(host, &context, frame, config.root_boundary, config.padding_insets())?;

	let mut pipeline = Pipeline {
		config,
		rects,
		detector,
		placement: config.placement,
		coordinates: Point::ORIGIN,
		data: MiddlewareData::default(),
	};
	let initial = pipeline.resolve(config.placement);
	pipeline.apply(initial);
	trace!(
		step = "initial",
		placement = %pipeline.placement,
		x = pipeline.coordinates.x,
		y = pipeline.coordinates.y,
		"position.step"
	);

	for step in Step::order(config.computation_middleware_order) {
		match step {
			Step::AutoPlacement => pipeline.run_auto_placement(),
			Step::Custom => {
				if let Some(middleware) = &config.computation_middleware {
					pipeline.run_custom(middleware)?;
				}
			}
		}
	}

	let Pipeline {
		placement,
		coordinates,
		data,
		..
	} = pipeline;
	let translation = translate(coordinates, host.device_pixel_ratio(&context));
	trace!(%placement, x = coordinates.x, y = coordinates.y, %translation, "position.done");

	Ok(ComputedPosition {
		x: coordinates.x,
		y: coordinates.y,
		placement,
		strategy: config.strategy,
		translation,
		middleware_data: data,
	})
}
