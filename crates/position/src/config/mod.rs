//! Per-run positioning configuration.
//!
//! Everything except the custom middleware is plain data and deserializes from camelCase
//! keys; missing keys take the defaults below.
//!
//! ```json
//! { "placement": "bottom-start", "autoPlacement": { "excludeSides": ["left"] }, "offset": 4 }
//! ```

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};
use tether_primitives::{EdgeInsets, Placement, Side, Strategy};

use crate::error::ConfigError;
use crate::middleware::{ComputationMiddleware, ComputationMiddlewareArgs, ComputationMiddlewareResult};

/// Default gap between anchor and floating element.
pub const DEFAULT_OFFSET: f64 = 8.0;

/// Distance between the anchor and the floating element.
///
/// Resolved once when the config is built; a bare number is a main-axis offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Offset {
	/// Main-axis gap only.
	Scalar(f64),
	/// Separate gaps along each axis.
	Axes {
		/// Gap away from the anchor.
		#[serde(rename = "mainAxis", default)]
		main_axis: f64,
		/// Slide along the anchor edge.
		#[serde(rename = "crossAxis", default)]
		cross_axis: f64,
	},
}

impl Default for Offset {
	fn default() -> Self {
		Self::Scalar(DEFAULT_OFFSET)
	}
}

impl Offset {
	/// Main-axis component.
	pub fn main_axis(self) -> f64 {
		match self {
			Self::Scalar(value) => value,
			Self::Axes { main_axis, .. } => main_axis,
		}
	}

	/// Cross-axis component (zero for [`Offset::Scalar`]).
	pub fn cross_axis(self) -> f64 {
		match self {
			Self::Scalar(_) => 0.0,
			Self::Axes { cross_axis, .. } => cross_axis,
		}
	}

	fn validate(self) -> Result<(), ConfigError> {
		for (axis, value) in [("mainAxis", self.main_axis()), ("crossAxis", self.cross_axis())] {
			if !value.is_finite() {
				return Err(ConfigError::NonFiniteOffset { axis, value });
			}
		}
		Ok(())
	}
}

impl From<f64> for Offset {
	fn from(value: f64) -> Self {
		Self::Scalar(value)
	}
}

/// Options for the auto-placement step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoPlacementOptions {
	/// Sides never chosen.
	#[serde(default)]
	pub exclude_sides: Vec<Side>,
}

/// Whether auto-placement runs, and with which options.
///
/// Deserializes from `true`/`false` or an [`AutoPlacementOptions`] object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AutoPlacementSetting", into = "AutoPlacementSetting")]
pub enum AutoPlacement {
	/// Keep the configured placement.
	#[default]
	Disabled,
	/// Pick the best-fitting placement.
	Enabled(AutoPlacementOptions),
}

impl AutoPlacement {
	/// Auto-placement with no excluded sides.
	pub fn enabled() -> Self {
		Self::Enabled(AutoPlacementOptions::default())
	}

	/// Auto-placement that never picks any of `sides`.
	pub fn excluding(sides: impl IntoIterator<Item = Side>) -> Self {
		Self::Enabled(AutoPlacementOptions {
			exclude_sides: sides.into_iter().collect(),
		})
	}

	/// Options, if enabled.
	pub fn options(&self) -> Option<&AutoPlacementOptions> {
		match self {
			Self::Disabled => None,
			Self::Enabled(options) => Some(options),
		}
	}
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum AutoPlacementSetting {
	Toggle(bool),
	Options(AutoPlacementOptions),
}

impl From<AutoPlacementSetting> for AutoPlacement {
	fn from(setting: AutoPlacementSetting) -> Self {
		match setting {
			AutoPlacementSetting::Toggle(false) => Self::Disabled,
			AutoPlacementSetting::Toggle(true) => Self::enabled(),
			AutoPlacementSetting::Options(options) => Self::Enabled(options),
		}
	}
}

impl From<AutoPlacement> for AutoPlacementSetting {
	fn from(auto_placement: AutoPlacement) -> Self {
		match auto_placement {
			AutoPlacement::Disabled => Self::Toggle(false),
			AutoPlacement::Enabled(options) if options.exclude_sides.is_empty() => Self::Toggle(true),
			AutoPlacement::Enabled(options) => Self::Options(options),
		}
	}
}

/// When the custom middleware runs relative to auto-placement.
#[derive(
	Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum ComputationMiddlewareOrder {
	/// Custom middleware first; auto-placement sees its result.
	BeforeAutoPlacement,
	/// Auto-placement first; the custom middleware has the last word.
	#[default]
	AfterAutoPlacement,
}

/// Outermost clipping rectangle.
#[derive(
	Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RootBoundary {
	/// The visible viewport.
	#[default]
	Viewport,
	/// The whole scrollable document.
	Document,
}

/// Configuration for one positioning run.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputationConfig {
	/// Preferred placement.
	#[serde(default)]
	pub placement: Placement,
	/// Coordinate space of the result.
	#[serde(default)]
	pub strategy: Strategy,
	/// Right-to-left layout.
	#[serde(default)]
	pub is_rtl: bool,
	/// Auto-placement step.
	#[serde(default)]
	pub auto_placement: AutoPlacement,
	/// Gap between anchor and floating element.
	#[serde(default)]
	pub offset: Offset,
	/// Custom middleware; attach with [`ComputationConfig::with_middleware`].
	#[serde(skip)]
	pub computation_middleware: Option<ComputationMiddleware>,
	/// When the custom middleware runs.
	#[serde(default)]
	pub computation_middleware_order: ComputationMiddlewareOrder,
	/// Outermost clipping rectangle.
	#[serde(default)]
	pub root_boundary: RootBoundary,
	/// Space kept free between the floating element and the clipping boundary.
	#[serde(default)]
	pub padding: f64,
}

impl fmt::Debug for ComputationConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ComputationConfig")
			.field("placement", &self.placement)
			.field("strategy", &self.strategy)
			.field("is_rtl", &self.is_rtl)
			.field("auto_placement", &self.auto_placement)
			.field("offset", &self.offset)
			.field("computation_middleware", &self.computation_middleware.is_some())
			.field("computation_middleware_order", &self.computation_middleware_order)
			.field("root_boundary", &self.root_boundary)
			.field("padding", &self.padding)
			.finish()
	}
}

impl ComputationConfig {
	/// Sets the preferred placement.
	#[must_use]
	pub fn with_placement(mut self, placement: Placement) -> Self {
		self.placement = placement;
		self
	}

	/// Parses and sets the preferred placement (`"bottom-start"`, ...).
	pub fn try_with_placement(self, placement: &str) -> Result<Self, ConfigError> {
		Ok(self.with_placement(placement.parse()?))
	}

	/// Sets the strategy.
	#[must_use]
	pub fn with_strategy(mut self, strategy: Strategy) -> Self {
		self.strategy = strategy;
		self
	}

	/// Sets right-to-left layout.
	#[must_use]
	pub fn with_rtl(mut self, is_rtl: bool) -> Self {
		self.is_rtl = is_rtl;
		self
	}

	/// Sets the auto-placement step.
	#[must_use]
	pub fn with_auto_placement(mut self, auto_placement: AutoPlacement) -> Self {
		self.auto_placement = auto_placement;
		self
	}

	/// Sets the offset.
	#[must_use]
	pub fn with_offset(mut self, offset: impl Into<Offset>) -> Self {
		self.offset = offset.into();
		self
	}

	/// Attaches a custom middleware.
	#[must_use]
	pub fn with_middleware<F>(mut self, middleware: F) -> Self
	where
		F: Fn(&ComputationMiddlewareArgs) -> ComputationMiddlewareResult + Send + Sync + 'static,
	{
		self.computation_middleware = Some(Arc::new(middleware));
		self
	}

	/// Sets when the custom middleware runs.
	#[must_use]
	pub fn with_middleware_order(mut self, order: ComputationMiddlewareOrder) -> Self {
		self.computation_middleware_order = order;
		self
	}

	/// Sets the root boundary.
	#[must_use]
	pub fn with_root_boundary(mut self, root_boundary: RootBoundary) -> Self {
		self.root_boundary = root_boundary;
		self
	}

	/// Sets the boundary padding.
	#[must_use]
	pub fn with_padding(mut self, padding: f64) -> Self {
		self.padding = padding;
		self
	}

	/// Boundary padding as per-side insets.
	pub fn padding_insets(&self) -> EdgeInsets {
		EdgeInsets::uniform(self.padding)
	}

	/// Checks the configuration can run.
	pub fn validate(&self) -> Result<(), ConfigError> {
		self.offset.validate()?;
		if !self.padding.is_finite() {
			return Err(ConfigError::NonFinitePadding);
		}
		if let Some(options) = self.auto_placement.options() {
			let all_excluded = [Side::Top, Side::Right, Side::Bottom, Side::Left]
				.iter()
				.all(|side| options.exclude_sides.contains(side));
			if all_excluded {
				return Err(ConfigError::AllSidesExcluded);
			}
		}
		Ok(())
	}
}
