//! Positioning strategy of the floating element.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Coordinate space the floating element is positioned in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
	/// Coordinates are relative to the nearest positioned ancestor (the offset container).
	#[default]
	Absolute,
	/// Coordinates are relative to the viewport.
	Fixed,
}

impl Strategy {
	/// Returns true for [`Strategy::Fixed`].
	pub const fn is_fixed(self) -> bool {
		matches!(self, Self::Fixed)
	}
}
