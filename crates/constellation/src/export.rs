//! Export of resolved graphs.
//!
//! This is the last stage of the Constellation pipeline. It is a reference
//! consumer of a [`RenderingContext`]: it measures the pending annotation
//! texts and views, then draws every entity at a position supplied by the
//! caller.
//!
//! # Pipeline Position
//!
//! ```text
//! Relation Text
//!     ↓ parse
//! ParsedGraph
//!     ↓ compose
//! Content Tree
//!     ↓ attach
//! RenderingContext
//!     ↓ layout
//! Node Positions
//!     ↓ export (this module)
//! SVG Document
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] — SVG output via [`svg::SvgBuilder`] and [`svg::SvgExporter`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`]. It converts into
//! [`ConstellationError::Export`] at the crate boundary.
//!
//! [`RenderingContext`]: crate::RenderingContext
//! [`ConstellationError::Export`]: crate::ConstellationError::Export

/// SVG export backend.
pub mod svg;

/// Errors that can occur while preparing an export.
#[derive(Debug)]
pub enum Error {
    /// A configured color could not be parsed.
    InvalidColor(String),
    /// A rendering failure described by `message`.
    Render(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidColor(msg) => write!(f, "Invalid color: {msg}"),
            Self::Render(msg) => write!(f, "Render error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
