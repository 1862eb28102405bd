//! Error types for host geometry queries.

use thiserror::Error;

/// Geometry the host could not resolve.
///
/// Always recoverable: the caller skips this positioning cycle and retries on the next
/// layout change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
	/// The handle does not name an element the host knows about.
	#[error("unknown element {0}")]
	UnknownElement(String),

	/// The element (or one of its ancestors) is not attached to the layout tree.
	#[error("element {0} is detached from the layout tree")]
	Detached(String),

	/// Both sources are virtual and neither names a context element to resolve the
	/// viewport and clipping ancestors from.
	#[error("no context element available to resolve the {0}")]
	MissingContext(&'static str),

	/// The host produced a NaN or infinite value.
	#[error("non-finite geometry for {0}")]
	NonFinite(String),
}

/// Result type for host geometry queries.
pub type Result<T> = std::result::Result<T, GeometryError>;
