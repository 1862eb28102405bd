use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};
use thiserror::Error;

/// A layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
	/// Horizontal.
	X,
	/// Vertical.
	Y,
}

impl Axis {
	/// Returns the perpendicular axis.
	pub const fn other(self) -> Self {
		match self {
			Self::X => Self::Y,
			Self::Y => Self::X,
		}
	}

	/// Side at the low end of the axis (`left` for `X`, `top` for `Y`).
	pub const fn min_side(self) -> Side {
		match self {
			Self::X => Side::Left,
			Self::Y => Side::Top,
		}
	}

	/// Side at the high end of the axis (`right` for `X`, `bottom` for `Y`).
	pub const fn max_side(self) -> Side {
		match self {
			Self::X => Side::Right,
			Self::Y => Side::Bottom,
		}
	}
}

/// The side of the anchor the floating element is placed against.
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Side {
	/// Above the anchor.
	Top,
	/// Right of the anchor.
	Right,
	/// Below the anchor.
	Bottom,
	/// Left of the anchor.
	Left,
}

impl Side {
	/// Returns the side facing this one.
	pub const fn opposite(self) -> Self {
		match self {
			Self::Top => Self::Bottom,
			Self::Right => Self::Left,
			Self::Bottom => Self::Top,
			Self::Left => Self::Right,
		}
	}

	/// Axis perpendicular to this side's edge, along which the floating element is pushed
	/// away from the anchor.
	pub const fn axis(self) -> Axis {
		match self {
			Self::Top | Self::Bottom => Axis::Y,
			Self::Left | Self::Right => Axis::X,
		}
	}

	/// Returns true for the low-coordinate sides (`top`, `left`).
	pub const fn is_leading(self) -> bool {
		matches!(self, Self::Top | Self::Left)
	}
}

/// Cross-axis alignment of the floating element against the anchor.
///
/// A placement without an alignment is centered.
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
	/// Leading edges aligned (left edges in LTR, top edges on a vertical cross axis).
	Start,
	/// Trailing edges aligned.
	End,
}

impl Alignment {
	/// Returns the other alignment.
	pub const fn opposite(self) -> Self {
		match self {
			Self::Start => Self::End,
			Self::End => Self::Start,
		}
	}
}

/// Error parsing a placement string such as `"bottom-end"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsePlacementError {
	/// The side component is not `top`, `right`, `bottom` or `left`.
	#[error("invalid placement '{input}': unknown side '{side}'")]
	UnknownSide {
		/// Full input string.
		input: String,
		/// Offending side text.
		side: String,
	},
	/// The alignment component is not `start` or `end`.
	#[error("invalid placement '{input}': unknown alignment '{alignment}'")]
	UnknownAlignment {
		/// Full input string.
		input: String,
		/// Offending alignment text.
		alignment: String,
	},
}

/// A side plus an optional alignment: one of the twelve placements.
///
/// Parsed once at the boundary (`"top"`, `"left-start"`, ...) and carried as a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Placement {
	side: Side,
	alignment: Option<Alignment>,
}

impl Placement {
	/// `top`
	pub const TOP: Self = Self::new(Side::Top, None);
	/// `top-start`
	pub const TOP_START: Self = Self::new(Side::Top, Some(Alignment::Start));
	/// `top-end`
	pub const TOP_END: Self = Self::new(Side::Top, Some(Alignment::End));
	/// `right`
	pub const RIGHT: Self = Self::new(Side::Right, None);
	/// `right-start`
	pub const RIGHT_START: Self = Self::new(Side::Right, Some(Alignment::Start));
	/// `right-end`
	pub const RIGHT_END: Self = Self::new(Side::Right, Some(Alignment::End));
	/// `bottom`
	pub const BOTTOM: Self = Self::new(Side::Bottom, None);
	/// `bottom-start`
	pub const BOTTOM_START: Self = Self::new(Side::Bottom, Some(Alignment::Start));
	/// `bottom-end`
	pub const BOTTOM_END: Self = Self::new(Side::Bottom, Some(Alignment::End));
	/// `left`
	pub const LEFT: Self = Self::new(Side::Left, None);
	/// `left-start`
	pub const LEFT_START: Self = Self::new(Side::Left, Some(Alignment::Start));
	/// `left-end`
	pub const LEFT_END: Self = Self::new(Side::Left, Some(Alignment::End));

	/// Every placement, grouped by side in `top, right, bottom, left` order with the
	/// centered variant first in each group.
	pub const ALL: [Self; 12] = [
		Self::TOP,
		Self::TOP_START,
		Self::TOP_END,
		Self::RIGHT,
		Self::RIGHT_START,
		Self::RIGHT_END,
		Self::BOTTOM,
		Self::BOTTOM_START,
		Self::BOTTOM_END,
		Self::LEFT,
		Self::LEFT_START,
		Self::LEFT_END,
	];

	/// Creates a placement from its parts.
	pub const fn new(side: Side, alignment: Option<Alignment>) -> Self {
		Self { side, alignment }
	}

	/// The side component.
	#[inline]
	pub const fn side(self) -> Side {
		self.side
	}

	/// The alignment component, `None` when centered.
	#[inline]
	pub const fn alignment(self) -> Option<Alignment> {
		self.alignment
	}

	/// Axis along which the floating element sits away from the anchor.
	#[inline]
	pub const fn main_axis(self) -> Axis {
		self.side.axis()
	}

	/// Axis along which alignment applies.
	#[inline]
	pub const fn cross_axis(self) -> Axis {
		self.side.axis().other()
	}

	/// Returns true for `top`/`bottom` placements (vertical main axis).
	#[inline]
	pub const fn is_vertical(self) -> bool {
		matches!(self.side.axis(), Axis::Y)
	}

	/// Same alignment on a different side.
	pub const fn with_side(self, side: Side) -> Self {
		Self::new(side, self.alignment)
	}

	/// Same side with a different alignment.
	pub const fn with_alignment(self, alignment: Option<Alignment>) -> Self {
		Self::new(self.side, alignment)
	}

	/// Placement on the opposite side with the same alignment.
	pub const fn flip_side(self) -> Self {
		self.with_side(self.side.opposite())
	}

	/// Placement with the opposite alignment; centered placements are unchanged.
	pub const fn flip_alignment(self) -> Self {
		match self.alignment {
			Some(alignment) => self.with_alignment(Some(alignment.opposite())),
			None => self,
		}
	}
}

impl Default for Placement {
	fn default() -> Self {
		Self::TOP
	}
}

impl From<Side> for Placement {
	fn from(side: Side) -> Self {
		Self::new(side, None)
	}
}

impl fmt::Display for Placement {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.alignment {
			Some(alignment) => write!(f, "{}-{}", self.side, alignment),
			None => write!(f, "{}", self.side),
		}
	}
}

impl FromStr for Placement {
	type Err = ParsePlacementError;

	fn from_str(input: &str) -> Result<Self, Self::Err> {
		let (side_text, alignment_text) = match input.split_once('-') {
			Some((side, alignment)) => (side, Some(alignment)),
			None => (input, None),
		};
		let side = Side::from_str(side_text).map_err(|_| ParsePlacementError::UnknownSide {
			input: input.to_string(),
			side: side_text.to_string(),
		})?;
		let alignment = alignment_text
			.map(|text| {
				Alignment::from_str(text).map_err(|_| ParsePlacementError::UnknownAlignment {
					input: input.to_string(),
					alignment: text.to_string(),
				})
			})
			.transpose()?;
		Ok(Self::new(side, alignment))
	}
}

impl TryFrom<String> for Placement {
	type Error = ParsePlacementError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

impl From<Placement> for String {
	fn from(placement: Placement) -> Self {
		placement.to_string()
	}
}
